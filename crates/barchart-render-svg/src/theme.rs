// File: crates/barchart-render-svg/src/theme.rs
// Summary: Light/Dark colour sets for the SVG output.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub bar_fill: &'static str,
    pub axis_line: &'static str,
    pub tick: &'static str,
    pub tick_label: &'static str,
    pub font_family: &'static str,
    pub font_size: u32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            bar_fill: "#4682b4", // steelblue
            axis_line: "#000000",
            tick: "#000000",
            tick_label: "#000000",
            font_family: "sans-serif",
            font_size: 10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            bar_fill: "#40a0ff",
            axis_line: "#b4b4be",
            tick: "#9696a0",
            tick_label: "#ebebf5",
            font_family: "sans-serif",
            font_size: 10,
        }
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
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
