//! Order list surface: the collection view, the three dialogs, and the
//! stale-flag refetch effect.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::state::{ControllerState, OrderDraft};
use crate::ui::row::{order_row, RowIntent};

pub struct OrdersApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ControllerState,
}

impl OrdersApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            state: ControllerState::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status);
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Add new order").clicked() {
                self.state.open_create();
            }
            ui.separator();
            ui.label("Waiter filter");
            ui.add(
                egui::TextEdit::singleline(&mut self.state.waiter_filter)
                    .hint_text("all waiters")
                    .desired_width(140.0),
            );
            if ui.button("Apply").clicked() {
                self.state.apply_waiter_filter();
            }
        });
    }

    fn show_order_list(&mut self, ui: &mut egui::Ui) {
        let mut intent = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            if self.state.orders.is_empty() {
                ui.weak("No orders");
            }
            for order in &self.state.orders {
                if let Some(row_intent) = order_row(ui, Some(order)) {
                    intent = Some(row_intent);
                }
                ui.separator();
            }
        });

        match intent {
            Some(RowIntent::Delete(order_id)) => {
                let cmd = self.state.request_delete(order_id);
                self.dispatch(cmd);
            }
            Some(RowIntent::ChangeWaiter(order_id)) => self.state.open_change_waiter(order_id),
            Some(RowIntent::ChangeOrder(order_id)) => self.state.open_change_order(order_id),
            None => {}
        }
    }

    fn show_add_order_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.add_order_open {
            return;
        }
        let mut open = true;
        egui::Window::new("Add Order")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                draft_form(ui, &mut self.state.draft);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        let cmd = self.state.submit_create();
                        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status);
                    }
                    if ui.button("Cancel").clicked() {
                        self.state.cancel_create();
                    }
                });
            });
        if !open {
            // Title-bar close is the cancel path.
            self.state.cancel_create();
        }
    }

    fn show_change_waiter_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.change_waiter.open {
            return;
        }
        let mut open = true;
        egui::Window::new("Change Waiter")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("new waiter");
                ui.text_edit_singleline(&mut self.state.waiter_draft);
                ui.horizontal(|ui| {
                    if ui.button("Change").clicked() {
                        if let Some(cmd) = self.state.submit_change_waiter() {
                            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status);
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        self.state.cancel_change_waiter();
                    }
                });
            });
        if !open {
            self.state.cancel_change_waiter();
        }
    }

    fn show_change_order_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.change_order.open {
            return;
        }
        let mut open = true;
        egui::Window::new("Change Order")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                draft_form(ui, &mut self.state.draft);
                ui.horizontal(|ui| {
                    if ui.button("Change").clicked() {
                        if let Some(cmd) = self.state.submit_change_order() {
                            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status);
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        self.state.cancel_change_order();
                    }
                });
            });
        if !open {
            self.state.cancel_change_order();
        }
    }
}

fn draft_form(ui: &mut egui::Ui, draft: &mut OrderDraft) {
    ui.label("dish");
    ui.text_edit_singleline(&mut draft.dish);
    ui.label("waiter");
    ui.text_edit_singleline(&mut draft.server);
    ui.label("table");
    ui.text_edit_singleline(&mut draft.table);
    ui.label("price");
    ui.text_edit_singleline(&mut draft.price);
}

impl eframe::App for OrdersApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // The stale flag is consumed here, as an effect between event intake
        // and rendering; rendering itself never performs network work.
        if let Some(cmd) = self.state.take_refetch() {
            self.dispatch(cmd);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.state.status.as_str());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_header(ui);
            ui.separator();
            self.show_order_list(ui);
        });

        self.show_add_order_dialog(ctx);
        self.show_change_waiter_dialog(ctx);
        self.show_change_order_dialog(ctx);

        // Worker completions arrive between frames; poll at a steady cadence.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
