//! Catppuccin color palettes for the TUI.

use folio_engine::Layer;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Background layers
    pub dna: Color,
    pub star: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            // Foregrounds
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            // Accents
            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            // Background layers
            dna: Color::Rgb(166, 227, 161),  // #a6e3a1 (green)
            star: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

            // Borders
            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            // Backgrounds (inverted for light theme)
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            // Foregrounds
            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            // Accents
            primary: Color::Rgb(114, 135, 253), // #7287fd (lavender)

            // Background layers
            dna: Color::Rgb(64, 160, 43),   // #40a02b (green)
            star: Color::Rgb(223, 142, 29), // #df8e1d (yellow)

            // Borders
            border: Color::Rgb(188, 192, 204),        // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd (lavender)
        }
    }

    /// Accent color of a background layer.
    pub fn layer(&self, layer: Layer) -> Color {
        match layer {
            Layer::Dna => self.dna,
            Layer::Star => self.star,
        }
    }

    /// Layer color faded toward the base background by `opacity`.
    pub fn layer_faded(&self, layer: Layer, opacity: f64) -> Color {
        blend(self.base, self.layer(layer), opacity)
    }
}

/// Linear blend from `from` to `to`. Non-RGB colors snap to whichever end
/// is closer.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
