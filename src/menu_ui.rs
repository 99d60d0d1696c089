use crate::color::OverlayColor;
use crate::menu::{format_percent, layout_master_menu, parse_percent};
use crate::options::FilmOverlayOptions;
use crate::overlay::{SettingsControl, ThumbnailResolver};
use crate::strategies::{SAFE_FRAME_PERCENT_MAX, SAFE_FRAME_PERCENT_MIN};
use eframe::egui;

pub struct OverlayMenuResult {
    pub changed: bool,
}

/// Renders the overlay options menu: the master-overlay grid, the master
/// tint picker and the safe-frame toggles. Returns whether any state
/// changed so the caller can persist it.
pub fn render_overlay_options_menu(
    ui: &mut egui::Ui,
    options: &mut FilmOverlayOptions,
    thumbnails: &dyn ThumbnailResolver,
) -> OverlayMenuResult {
    let mut changed = false;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.strong("Composition Overlays");
            ui.separator();
            changed |= master_overlay_grid(ui, options, thumbnails);

            ui.add_space(8.0);
            ui.strong("Overlay Color Tint");
            ui.separator();
            let mut rgba = options.master_tint().to_rgba_array();
            if ui.color_edit_button_srgba_unmultiplied(&mut rgba).changed() {
                options.set_master_tint(OverlayColor::from_rgba_array(rgba));
                changed = true;
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.strong("Safe Frames");
            ui.separator();
            changed |= safe_frame_rows(ui, options);
        });
    });

    OverlayMenuResult { changed }
}

fn master_overlay_grid(
    ui: &mut egui::Ui,
    options: &mut FilmOverlayOptions,
    thumbnails: &dyn ThumbnailResolver,
) -> bool {
    let layout = layout_master_menu(options.master_entries().map(|(key, _)| key));

    let mut clicked: Option<String> = None;
    egui::Grid::new("master_overlay_grid")
        .spacing([10.0, 10.0])
        .show(ui, |ui| {
            let mut current_row = 0;
            for cell in &layout.cells {
                if cell.row != current_row {
                    ui.end_row();
                    current_row = cell.row;
                }
                let Some(overlay) = options.master_overlay_by_key(&cell.key) else {
                    continue;
                };
                let selected = options.current_master_key() == Some(cell.key.as_str());
                ui.vertical(|ui| {
                    if let Some(texture) = overlay
                        .thumbnail()
                        .and_then(|thumbnail| thumbnails.resolve(&thumbnail))
                    {
                        ui.image(texture);
                    }
                    if ui
                        .selectable_label(selected, overlay.display_name())
                        .clicked()
                    {
                        clicked = Some(cell.key.clone());
                    }
                });
            }
        });

    if let Some(key) = clicked {
        options.select_master(&key);
        true
    } else {
        false
    }
}

fn safe_frame_rows(ui: &mut egui::Ui, options: &mut FilmOverlayOptions) -> bool {
    let mut changed = false;

    for (key, overlay) in options.toggleable_entries_mut() {
        ui.push_id(key, |ui| {
            ui.horizontal(|ui| {
                let mut enabled = overlay.is_enabled();
                if ui.checkbox(&mut enabled, overlay.display_name()).changed() {
                    overlay.set_enabled(enabled);
                    changed = true;
                }
                if let Some(SettingsControl::SizePercent(value)) = overlay.settings_control() {
                    changed |= ui
                        .add_enabled(
                            enabled,
                            egui::DragValue::new(value)
                                .clamp_range(SAFE_FRAME_PERCENT_MIN..=SAFE_FRAME_PERCENT_MAX)
                                .speed(1.0)
                                .custom_formatter(|value, _| format_percent(value as f32))
                                .custom_parser(|text| parse_percent(text).map(f64::from)),
                        )
                        .changed();
                }
            });
        });
    }

    changed
}
