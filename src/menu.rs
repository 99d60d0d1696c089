//! Pure layout and text helpers behind the options menu. Everything here is
//! host-toolkit independent; `menu_ui` renders the result with egui.

/// Column count for the master-overlay button grid: `ceil(log2(n - 1))`.
///
/// Two entries yield zero columns; [`layout_master_menu`] treats that as a
/// single column by wrapping after every cell.
pub fn master_grid_columns(overlay_count: usize) -> usize {
    if overlay_count < 2 {
        return 0;
    }
    ((overlay_count - 1) as f32).log2().ceil() as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCell {
    pub key: String,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterMenuLayout {
    pub columns: usize,
    pub cells: Vec<MenuCell>,
}

/// Places master-overlay keys into grid cells, row by row in insertion
/// order. The wrap check runs after each placement, so a zero-column grid
/// degrades to one entry per row rather than looping forever.
pub fn layout_master_menu<'a>(keys: impl IntoIterator<Item = &'a str>) -> MasterMenuLayout {
    let keys: Vec<&str> = keys.into_iter().collect();
    let columns = master_grid_columns(keys.len());

    let mut cells = Vec::with_capacity(keys.len());
    let mut column = 0;
    let mut row = 0;
    for key in keys {
        cells.push(MenuCell {
            key: key.to_string(),
            row,
            column,
        });
        column += 1;
        if column >= columns {
            column = 0;
            row += 1;
        }
    }

    MasterMenuLayout { columns, cells }
}

/// Formats a safe-frame percentage for display, e.g. `95%`.
pub fn format_percent(value: f32) -> String {
    format!("{value}%")
}

/// Parses percentage text by stripping any `%` suffix. Returns `None` for
/// text that is not a finite number; range clamping is the caller's job.
pub fn parse_percent(text: &str) -> Option<f32> {
    let cleaned = text.replace('%', "");
    let value: f32 = cleaned.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
