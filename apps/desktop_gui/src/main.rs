use std::sync::Arc;

use clap::Parser;
use client_core::SilentErrors;
use crossbeam_channel::bounded;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::{commands::BackendCommand, runtime};
use controller::events::UiEvent;
use ui::app::OrdersApp;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the order service.
    #[arg(long, default_value = "http://localhost:5000")]
    server_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(args.server_url, cmd_rx, ui_tx, Arc::new(SilentErrors));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tableside Orders")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Tableside Orders",
        options,
        Box::new(|_cc| Ok(Box::new(OrdersApp::new(cmd_tx, ui_rx)))),
    )
}
