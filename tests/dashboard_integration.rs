mod support;

use support::{dashboard_env::DashboardEnvGuard, png::write_test_png};

use eframe::egui;
use election_dashboard::{
    app_dirs::APP_DIR_NAME,
    assets::FsAssets,
    config::{self, AppConfig, CONFIG_FILE_NAME},
    dashboard::{DashboardTab, MODEL_METRICS, SANKEY_PLOTS},
    egui_app::{
        ui::EguiApp,
        view_model::{self, Block, LOGISTIC_IMAGE},
    },
};
use tempfile::TempDir;

fn asset_dir(names: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create tempdir");
    for name in names {
        write_test_png(&dir.path().join(name));
    }
    dir
}

fn run_frame(app: &mut EguiApp, ctx: &egui::Context) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.show(ctx));
}

#[test]
fn sankey_lookup_against_real_files() {
    let present: Vec<&str> = SANKEY_PLOTS
        .iter()
        .map(|entry| entry.path)
        .filter(|path| *path != "jrk.png")
        .collect();
    let dir = asset_dir(&present);
    let assets = FsAssets::new(dir.path());

    for entry in SANKEY_PLOTS {
        let view = view_model::party_hopping_panel(Some(entry.label), &assets);
        if entry.path == "jrk.png" {
            assert!(view.images().is_empty());
            let errors = view.errors();
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("jrk.png"), "{}", errors[0]);
        } else {
            assert_eq!(
                view.images(),
                vec![(entry.path, format!("Sankey Chart for {}", entry.label).as_str())]
            );
            assert!(view.errors().is_empty());
        }
    }
}

#[test]
fn missing_sankey_leaves_other_tabs_intact() {
    let dir = asset_dir(&[LOGISTIC_IMAGE]);
    let assets = FsAssets::new(dir.path());

    let insights = view_model::panel_for(DashboardTab::PoliticalInsights, None, &assets);
    assert_eq!(insights.errors().len(), 1);
    assert!(insights.errors()[0].contains("mah.png"));

    let models = view_model::panel_for(DashboardTab::ModelComparison, None, &assets);
    assert!(models.errors().is_empty());
    assert_eq!(models.images().len(), 1);
    assert!(
        models
            .walk()
            .iter()
            .any(|block| matches!(block, Block::MetricsTable(table) if table.rows.len() == MODEL_METRICS.len()))
    );
}

#[test]
fn corrupt_sankey_is_reported_not_shown() {
    let dir = asset_dir(&["kerala.png"]);
    std::fs::write(dir.path().join("mah.png"), b"not a png").expect("write corrupt png");
    let assets = FsAssets::new(dir.path());

    let insights = view_model::panel_for(DashboardTab::PoliticalInsights, None, &assets);
    assert!(insights.images().is_empty());
    assert_eq!(insights.errors().len(), 1);
    assert!(insights.errors()[0].contains("mah.png"));

    let kerala = view_model::panel_for(DashboardTab::PoliticalInsights, Some("Kerala"), &assets);
    assert!(kerala.errors().is_empty());
    assert_eq!(kerala.images().len(), 1);
}

#[test]
fn headless_frames_cover_every_tab() {
    let dir = asset_dir(&["mah.png", "kerala.png", "uni1.png", "bi1.png", "mul1.png"]);
    let cfg = AppConfig {
        asset_root: Some(dir.path().to_path_buf()),
        initial_tab: DashboardTab::PoliticalInsights,
    };
    let mut app = EguiApp::new(&cfg);
    let ctx = egui::Context::default();

    run_frame(&mut app, &ctx);
    assert_eq!(app.state().selected_state, "Maharashtra");

    assert!(app.state_mut().select_state("Kerala"));
    run_frame(&mut app, &ctx);
    assert!(app.state_mut().select_state("Nagaland"));
    run_frame(&mut app, &ctx);
    assert_eq!(app.state().selected_state, "Nagaland");

    for tab in DashboardTab::ALL {
        app.state_mut().select_tab(tab);
        run_frame(&mut app, &ctx);
        run_frame(&mut app, &ctx);
        assert_eq!(app.state().active_tab, tab);
    }
    assert_eq!(app.state().selected_state, "Nagaland");
}

#[test]
fn config_file_sets_initial_tab_and_asset_root() {
    let home = tempfile::tempdir().expect("create tempdir");
    let _env = DashboardEnvGuard::set_config_home(home.path().to_path_buf());

    let app_root = home.path().join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_root).expect("create app root");
    std::fs::write(
        app_root.join(CONFIG_FILE_NAME),
        "asset_root = \"plots\"\ninitial_tab = \"model_comparison\"\n",
    )
    .expect("write config");

    let cfg = config::load_or_default().expect("load config");
    assert_eq!(cfg.initial_tab, DashboardTab::ModelComparison);
    assert_eq!(cfg.assets().root(), std::path::Path::new("plots"));

    let app = EguiApp::new(&cfg);
    assert_eq!(app.state().active_tab, DashboardTab::ModelComparison);
    assert_eq!(app.state().selected_state, "Maharashtra");
}

#[test]
fn absent_config_uses_defaults() {
    let home = tempfile::tempdir().expect("create tempdir");
    let _env = DashboardEnvGuard::set_config_home(home.path().to_path_buf());
    let cfg = config::load_or_default().expect("load config");
    assert_eq!(cfg, AppConfig::default());
    let seeded = config::config_path().expect("config path");
    assert!(seeded.is_file(), "{} not seeded", seeded.display());
    assert_eq!(config::load_from_path(&seeded).expect("reload"), cfg);
}
