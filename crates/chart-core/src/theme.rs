// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for frame colors, fonts and the point overlay.

/// Global styling shared by every margin and the overlay.
/// Colors are CSS color strings; a background of `"none"` draws no backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub background: String,
    /// Fill for tick labels and axis labels.
    pub text: String,
    pub font_family: String,
    /// Margin outline colors used when `debug_outline` is set.
    pub debug_fill: String,
    pub debug_stroke: String,
    pub point_fill: String,
    pub point_stroke: String,
    pub point_stroke_width: f64,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: "#ffffff".to_string(),
            text: "#000000".to_string(),
            font_family: "sans-serif".to_string(),
            debug_fill: "#f5f0dc".to_string(),
            debug_stroke: "#ff0000".to_string(),
            point_fill: "#ff0000".to_string(),
            point_stroke: "#000000".to_string(),
            point_stroke_width: 1.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: "#121214".to_string(),
            text: "#ebebf5".to_string(),
            font_family: "sans-serif".to_string(),
            debug_fill: "#282830".to_string(),
            debug_stroke: "#ffe646".to_string(),
            point_fill: "#40a0ff".to_string(),
            point_stroke: "#b4b4be".to_string(),
            point_stroke_width: 1.0,
        }
    }

    /// Whether a backdrop rectangle should be painted.
    pub fn has_background(&self) -> bool {
        !self.background.is_empty() && !self.background.eq_ignore_ascii_case("none")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
