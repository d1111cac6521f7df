use eframe::egui::{self, Color32};

use crate::persistence::settings::Theme;

/// Colour tokens shared by the canvas, sidebar and inspector.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub background: Color32,
    pub surface_1: Color32,
    pub surface_2: Color32,
    pub border_1: Color32,
    pub border_2: Color32,
    pub ink_1: Color32,
    pub ink_2: Color32,
    pub ink_muted: Color32,
    pub grid_line: Color32,
    pub shadow: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: Color32::from_rgb(0xFA, 0xF7, 0xF2),
                surface_1: Color32::from_rgb(0xFF, 0xFF, 0xFF),
                surface_2: Color32::from_rgb(0xF3, 0xEE, 0xE6),
                border_1: Color32::from_rgb(0xD8, 0xD2, 0xC8),
                border_2: Color32::from_rgb(0xE8, 0xE2, 0xD8),
                ink_1: Color32::from_rgb(0x2B, 0x26, 0x20),
                ink_2: Color32::from_rgb(0x5A, 0x52, 0x48),
                ink_muted: Color32::from_rgb(0x8A, 0x81, 0x78),
                grid_line: Color32::from_rgb(0xB8, 0xB0, 0xA4),
                shadow: Color32::from_black_alpha(24),
            },
            Theme::Dark => Palette {
                background: Color32::from_rgb(0x0F, 0x14, 0x19),
                surface_1: Color32::from_rgb(0x16, 0x1B, 0x22),
                surface_2: Color32::from_rgb(0x1F, 0x25, 0x2D),
                border_1: Color32::from_rgb(0x30, 0x36, 0x3D),
                border_2: Color32::from_rgb(0x26, 0x2C, 0x33),
                ink_1: Color32::from_rgb(0xE6, 0xED, 0xF3),
                ink_2: Color32::from_rgb(0xC9, 0xD1, 0xD9),
                ink_muted: Color32::from_rgb(0x8B, 0x94, 0x9E),
                grid_line: Color32::from_rgb(0x3A, 0x43, 0x4E),
                shadow: Color32::from_black_alpha(90),
            },
        }
    }
}

pub fn apply(ctx: &egui::Context, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let mut visuals = match theme {
        Theme::Light => egui::Visuals::light(),
        Theme::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.surface_1;
    visuals.hyperlink_color = palette.ink_1;
    ctx.set_visuals(visuals);
}

/// Parses a `#RRGGBB` node colour; malformed tokens fall back to grey.
pub fn node_color(token: &str) -> Color32 {
    Color32::from_hex(token).unwrap_or(Color32::GRAY)
}

pub fn fade(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}
