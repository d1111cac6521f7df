use eframe::egui;

use schema_atlas::gui::frontend::PortfolioApp;
use schema_atlas::persistence::settings::AppSettings;

fn main() -> eframe::Result {
    env_logger::init();

    let settings = match AppSettings::load() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("could not load settings, using defaults: {}", e);
            AppSettings::default()
        }
    };
    let (w, h) = settings.window_size;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([w, h])
            // Small enough to reach the collapsed-sidebar layout
            .with_min_inner_size([360.0, 480.0])
            .with_resizable(true)
            .with_title("Schema Atlas"),
        ..Default::default()
    };
    eframe::run_native(
        "Schema Atlas",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PortfolioApp::new(settings)) as Box<dyn eframe::App>)
        }),
    )
}
