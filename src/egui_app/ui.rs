//! egui renderer for the dashboard.
//!
//! Each frame builds the active tab's [`PanelView`](crate::egui_app::view_model::PanelView)
//! from scratch and paints it; only the tab, the Sankey selection and the
//! texture cache survive between frames.

mod blocks;
mod metrics_chart;
mod metrics_table;
pub mod style;
mod textures;

use eframe::egui::{self, RichText, Vec2};

use crate::assets::{AssetSource, FsAssets};
use crate::config::AppConfig;
use crate::dashboard::DashboardTab;
use crate::egui_app::state::DashboardState;
use crate::egui_app::view_model::{self, PAGE_INTRO, PAGE_TITLE};
use blocks::{BlockPainter, UiAction};
use textures::TextureCache;

/// Smallest window size that keeps two image columns readable.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(960.0, 640.0);

/// Dashboard window: tab strip on top, active panel below.
pub struct EguiApp {
    state: DashboardState,
    assets: FsAssets,
    textures: TextureCache,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(config: &AppConfig) -> Self {
        let assets = config.assets();
        tracing::info!("Serving dashboard assets from {}", assets.root().display());
        Self {
            state: DashboardState::new(config.initial_tab),
            assets,
            textures: TextureCache::default(),
            visuals_set: false,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DashboardState {
        &mut self.state
    }

    /// Lay out one frame. Separate from [`eframe::App::update`] so it can run
    /// against a headless context.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.apply_visuals(ctx);
        self.render_header(ctx);
        self.render_active_tab(ctx);
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new(PAGE_TITLE).size(26.0).strong());
            ui.label(PAGE_INTRO);
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                for tab in DashboardTab::ALL {
                    let selected = self.state.active_tab == tab;
                    if ui.selectable_label(selected, tab.title()).clicked() {
                        self.state.select_tab(tab);
                    }
                }
            });
            ui.add_space(4.0);
        });
    }

    fn render_active_tab(&mut self, ctx: &egui::Context) {
        let tab = self.state.active_tab;
        let view = view_model::panel_for(tab, Some(self.state.selected_state), &self.assets);
        let assets: &dyn AssetSource = &self.assets;
        let mut painter = BlockPainter {
            textures: &mut self.textures,
            assets,
            actions: Vec::new(),
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt(("tab_scroll", tab))
                .auto_shrink([false, false])
                .show(ui, |ui| painter.paint(ui, &view.blocks));
        });
        let actions = painter.actions;
        self.apply_actions(actions);
    }

    /// Apply interactions collected while painting the last frame.
    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::SelectState(label) => {
                    self.state.select_state(label);
                }
            }
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
