// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the categorical palette.

use skia_safe as skia;

/// Number of distinct categorical colors per theme.
pub const PALETTE_LEN: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub line_stroke: skia::Color,
    pub palette: [skia::Color; PALETTE_LEN],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            panel: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 10, 10, 20),
            line_stroke: skia::Color::from_argb(255, 34, 139, 34),
            palette: [
                skia::Color::from_argb(255, 0x66, 0xc2, 0xa5),
                skia::Color::from_argb(255, 0xfc, 0x8d, 0x62),
                skia::Color::from_argb(255, 0x8d, 0xa0, 0xcb),
                skia::Color::from_argb(255, 0xe7, 0x8a, 0xc3),
                skia::Color::from_argb(255, 0xa6, 0xd8, 0x54),
                skia::Color::from_argb(255, 0xff, 0xd9, 0x2f),
                skia::Color::from_argb(255, 0xe5, 0xc4, 0x94),
                skia::Color::from_argb(255, 0xb3, 0xb3, 0xb3),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            panel: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 245, 245, 250),
            line_stroke: skia::Color::from_argb(255, 64, 200, 120),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 150, 64),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 170, 120, 230),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 90, 210, 210),
                skia::Color::from_argb(255, 200, 200, 200),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            panel: skia::Color::from_argb(255, 0xfd, 0xf6, 0xe3),
            grid: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: skia::Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            tick: skia::Color::from_argb(255, 0x58, 0x6e, 0x75),       // base01
            title: skia::Color::from_argb(255, 0x07, 0x36, 0x42),      // base02
            line_stroke: skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
            palette: [
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0xcb, 0x4b, 0x16), // orange
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
                skia::Color::from_argb(255, 0xd3, 0x36, 0x82), // magenta
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
            ],
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            panel: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0x00),
            palette: [
                skia::Color::from_argb(255, 0x00, 0xff, 0xff),
                skia::Color::from_argb(255, 0xff, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x00, 0xff),
                skia::Color::from_argb(255, 0x00, 0xff, 0x00),
                skia::Color::from_argb(255, 0xff, 0x80, 0x00),
                skia::Color::from_argb(255, 0x00, 0xaa, 0xff),
                skia::Color::from_argb(255, 0xff, 0x40, 0x40),
                skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            ],
        }
    }

    /// Palette color for slot `i`, wrapping around.
    pub fn palette_color(&self, i: usize) -> skia::Color {
        self.palette[i % PALETTE_LEN]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::light(),
        Theme::dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
