use eframe::egui;
use film_overlay::logging;
use film_overlay::menu_ui::render_overlay_options_menu;
use film_overlay::options::FilmOverlayOptions;
use film_overlay::overlay::NoThumbnails;
use film_overlay::settings::OverlaySettings;
use film_overlay::settings_store;
use film_overlay::viewport::paint_active_overlays;
use tracing::warn;

struct FilmOverlayApp {
    options: FilmOverlayOptions,
    thumbnails: NoThumbnails,
}

impl FilmOverlayApp {
    fn new(settings: &OverlaySettings) -> Self {
        let mut options = FilmOverlayOptions::new();
        options.apply_settings(settings);
        Self {
            options,
            thumbnails: NoThumbnails,
        }
    }

    fn persist_settings(&mut self) {
        let settings = self.options.capture_settings();
        if let Err(err) = settings_store::save(&settings) {
            warn!("failed to save overlay settings: {err:#}");
        }
    }
}

impl eframe::App for FilmOverlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("Overlays", |ui| {
                    let result =
                        render_overlay_options_menu(ui, &mut self.options, &self.thumbnails);
                    if result.changed {
                        self.persist_settings();
                    }
                });
                ui.label(format!(
                    "Thumbnail: {}",
                    self.options.current_thumbnail().as_str()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            painter.rect_filled(response.rect, 0.0, egui::Color32::from_gray(24));
            paint_active_overlays(&painter, response.rect, &self.options);
        });
    }
}

fn main() -> anyhow::Result<()> {
    logging::init(false);

    let settings = settings_store::load().unwrap_or_else(|err| {
        warn!("failed to load overlay settings: {err:#}");
        OverlaySettings::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 560.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "Film Overlay",
        native_options,
        Box::new(move |_cc| Box::new(FilmOverlayApp::new(&settings))),
    );
    Ok(())
}
