//! Order Row: pure presentation of one order plus intent dispatch.
//!
//! The row never touches shared state; it renders what it is given (an
//! absent order renders as empty fields) and reports at most one intent per
//! frame for the controller to act on.

use shared::domain::{Order, OrderId};

#[derive(Debug, Clone, PartialEq)]
pub enum RowIntent {
    Delete(OrderId),
    ChangeWaiter(OrderId),
    ChangeOrder(OrderId),
}

pub fn order_row(ui: &mut egui::Ui, order: Option<&Order>) -> Option<RowIntent> {
    let mut intent = None;

    ui.horizontal(|ui| {
        let dish = order.map(|order| order.dish.as_str()).unwrap_or("");
        let server = order.map(|order| order.server.as_str()).unwrap_or("");
        let table = order
            .map(|order| order.table.to_string())
            .unwrap_or_default();
        let price = order
            .map(|order| format!("{:.2}", order.price))
            .unwrap_or_default();

        ui.label(format!("Dish: {dish}"));
        ui.label(format!("Server: {server}"));
        ui.label(format!("Table: {table}"));
        ui.label(format!("Price: ${price}"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let enabled = order.is_some();
            if ui
                .add_enabled(enabled, egui::Button::new("change order"))
                .clicked()
            {
                if let Some(order) = order {
                    intent = Some(RowIntent::ChangeOrder(order.id.clone()));
                }
            }
            if ui
                .add_enabled(enabled, egui::Button::new("change waiter"))
                .clicked()
            {
                if let Some(order) = order {
                    intent = Some(RowIntent::ChangeWaiter(order.id.clone()));
                }
            }
            if ui
                .add_enabled(enabled, egui::Button::new("delete order"))
                .clicked()
            {
                if let Some(order) = order {
                    intent = Some(RowIntent::Delete(order.id.clone()));
                }
            }
        });
    });

    intent
}
