#![deny(warnings)]

use clap::Parser;
use clue_app::cli::Cli;
use clue_app::{controller, logging, publisher};
use clue_ui::GridRenderer;
use std::sync::mpsc;
use std::thread;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    let (updates, ticks) = mpsc::channel();
    let session = thread::spawn(move || controller::run(cli, updates));

    // Render loop: repaint the latest snapshot on every published tick. Ends
    // when the session thread drops its sender.
    let renderer = GridRenderer::default();
    for () in ticks {
        if let Some(matrix) = publisher::latest() {
            renderer.publish(&matrix);
        }
    }

    match session.join() {
        Ok(result) => result,
        Err(_) => Err(anyhow::anyhow!("session thread panicked")),
    }
}
