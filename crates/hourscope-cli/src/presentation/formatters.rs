use hourscope_types::ThemePreference;

/// Display formatting options
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub enable_color: bool,
    pub theme: ThemePreference,
}

/// Widest bar of the hourly chart, in cells.
pub const CHART_WIDTH: usize = 40;

/// Bar colour for regular hours.
pub fn bar_rgb(theme: ThemePreference) -> (u8, u8, u8) {
    match theme {
        ThemePreference::Light => (255, 87, 0),
        ThemePreference::Dark => (255, 142, 83),
    }
}

/// Bar length proportional to `max`; any non-zero count gets at least one cell.
pub fn bar_len(posts: u64, max: u64, width: usize) -> usize {
    if max == 0 || posts == 0 {
        return 0;
    }
    let scaled = (posts as u128 * width as u128 / max as u128) as usize;
    scaled.max(1)
}

/// Right-pad a label to `width` display columns.
pub fn pad(label: &str, width: usize) -> String {
    format!("{:<width$}", label, width = width)
}
