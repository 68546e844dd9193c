#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the election dashboard window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use election_dashboard::config;
use election_dashboard::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use election_dashboard::logging;

const WINDOW_TITLE: &str = "Election EDA & Insights Dashboard";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_maximized(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let loaded = config::load_or_default();
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| match loaded {
            Ok(config) => Ok(Box::new(EguiApp::new(&config)) as Box<dyn eframe::App>),
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start dashboard");
                ui.label(&self.message);
            });
        });
    }
}
