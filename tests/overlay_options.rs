use film_overlay::color::OverlayColor;
use film_overlay::compositor::composite_overlays;
use film_overlay::menu::{layout_master_menu, master_grid_columns};
use film_overlay::options::{FilmOverlayOptions, MASTER_DISABLED_KEY};
use film_overlay::overlay::DEFAULT_THUMBNAIL;
use film_overlay::primitives::DrawPrimitive;
use film_overlay::settings_store;
use tempfile::tempdir;

fn active_names(options: &FilmOverlayOptions) -> Vec<String> {
    options
        .active_overlays()
        .iter()
        .map(|overlay| overlay.display_name())
        .collect()
}

#[test]
fn builtin_registries_match_the_cinematic_defaults() {
    let options = FilmOverlayOptions::new();

    let master_keys: Vec<&str> = options.master_entries().map(|(key, _)| key).collect();
    assert_eq!(
        master_keys,
        vec![MASTER_DISABLED_KEY, "3x3Grid", "2x2Grid", "Crosshair", "Rabatment"]
    );

    let toggleable_keys: Vec<&str> = options.toggleable_entries().map(|(key, _)| key).collect();
    assert_eq!(
        toggleable_keys,
        vec!["ActionSafeFrame", "TitleSafeFrame", "CustomSafeFrame"]
    );
}

#[test]
fn five_master_entries_build_a_two_column_menu() {
    let options = FilmOverlayOptions::new();
    assert_eq!(master_grid_columns(options.master_overlay_count()), 2);

    let layout = layout_master_menu(options.master_entries().map(|(key, _)| key));
    assert_eq!(layout.columns, 2);
    assert_eq!(layout.cells.len(), 5);
    assert_eq!(layout.cells[4].key, "Rabatment");
    assert_eq!((layout.cells[4].row, layout.cells[4].column), (2, 0));
}

#[test]
fn crosshair_with_action_safe_composites_in_selection_order() {
    let mut options = FilmOverlayOptions::new();
    options.select_master("Crosshair");
    options.toggle("ActionSafeFrame", true);
    options.toggle("TitleSafeFrame", false);

    assert_eq!(active_names(&options), vec!["Crosshair", "Action Safe"]);

    let overlays = options.active_overlays();
    let frame = composite_overlays(&overlays, (1920.0, 1080.0), 5);

    // Crosshair contributes four segments on layer 5, the safe frame one
    // polyline on layer 6.
    assert_eq!(frame.next_layer, 7);
    assert_eq!(frame.elements.len(), 5);
    assert!(frame.elements[..4]
        .iter()
        .all(|element| element.layer == 5
            && matches!(element.primitive, DrawPrimitive::Segment { .. })));
    assert!(matches!(
        &frame.elements[4].primitive,
        DrawPrimitive::Polyline { points, .. } if points.len() == 5
    ));
    assert_eq!(frame.elements[4].layer, 6);
}

#[test]
fn tint_follows_the_master_selection() {
    let mut options = FilmOverlayOptions::new();
    let tint = OverlayColor::rgba(200, 100, 50, 25);
    options.set_master_tint(tint);
    options.select_master("3x3Grid");

    let overlays = options.active_overlays();
    let frame = composite_overlays(&overlays, (300.0, 300.0), 0);
    assert!(frame
        .elements
        .iter()
        .all(|element| element.primitive.color() == tint));
}

#[test]
fn clearing_the_selection_restores_the_placeholder_thumbnail() {
    let mut options = FilmOverlayOptions::new();
    options.select_master("2x2Grid");
    assert_eq!(options.current_thumbnail().as_str(), "FilmOverlay.2x2Grid");

    options.select_master(MASTER_DISABLED_KEY);
    assert_eq!(options.current_thumbnail().as_str(), DEFAULT_THUMBNAIL);
}

#[test]
fn options_state_survives_a_disk_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overlay_settings.json");

    let mut options = FilmOverlayOptions::new();
    options.select_master("Rabatment");
    options.set_master_tint(OverlayColor::rgba(11, 22, 33, 44));
    options.toggle("CustomSafeFrame", true);

    settings_store::save_to_path(&path, &options.capture_settings()).unwrap();

    let mut restored = FilmOverlayOptions::new();
    restored.apply_settings(&settings_store::load_from_path(&path).unwrap());

    assert_eq!(restored.current_master_key(), Some("Rabatment"));
    assert_eq!(restored.master_tint(), OverlayColor::rgba(11, 22, 33, 44));
    assert_eq!(active_names(&restored), vec!["Rabatment", "Custom Safe"]);
}
