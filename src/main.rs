//! Amphibian Map.
//!
//! Interaktive Weltkarte mit Grants-, Groups- und Projects-Markern,
//! dauerhaft sichtbaren Tooltips und einer Filter-Legende.

use amphibian_map::ui::{self, EguiMapSdk};
use amphibian_map::{AppController, AppIntent, AppState, SiteConfig};
use anyhow::Context;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Amphibian Map v{} startet...", env!("CARGO_PKG_VERSION"));

        // Konfiguration laden (oder eingebettete Standardwerte)
        let config = SiteConfig::load_from_file(&SiteConfig::config_path())?;
        let registry = config
            .build_registry()
            .context("Marker-Konfiguration ungueltig")?;
        log::debug!(
            "Marker-Registry: {}",
            registry
                .to_json()
                .context("Marker-Registry nicht serialisierbar")?
        );

        let mut state = AppState::with_registry(registry, config.map.clone());
        let mut controller = AppController::new(EguiMapSdk::new(config.map.container_id.clone()));
        controller.start(&mut state)?;

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 640.0])
                .with_title("Amphibian Map"),
            ..Default::default()
        };

        eframe::run_native(
            "Amphibian Map",
            options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(MapApp { state, controller }))
            }),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {e}"))
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController<EguiMapSdk>,
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        if let Some(url) = self.state.take_pending_navigation() {
            ctx.open_url(egui::OpenUrl::same_tab(url));
        }
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(AppIntent::ExitRequested);
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(self.controller.sdk().show(ui));
            });

        events.extend(ui::render_legend(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
