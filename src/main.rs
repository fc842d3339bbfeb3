//! Assister - single-screen voice assistant UI shell
//!
//! Main entry point for the Assister application.

use anyhow::Context as _;
use assister::scenario::Scenario;
use assister::ui::{AssisterApp, Theme};
use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "assister=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Assister UI shell");

    let scenario = match scenario_from_args() {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("{e:#}");
            std::process::exit(2);
        }
    };

    let theme = Theme::dark();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme.window_size)
            .with_resizable(false)
            .with_title("Assister"),
        ..Default::default()
    };

    eframe::run_native(
        "Assister",
        options,
        Box::new(move |cc| Ok(Box::new(AssisterApp::new(cc, scenario)))),
    )
}

/// Load the optional scenario file named as the first CLI argument
fn scenario_from_args() -> anyhow::Result<Option<Scenario>> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(None);
    };
    let scenario =
        Scenario::load(&path).with_context(|| format!("loading scenario '{path}'"))?;
    Ok(Some(scenario))
}
