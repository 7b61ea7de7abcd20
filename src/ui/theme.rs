use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug)]
pub struct Theme {
    pub primary: ColorSpec,
    pub text: ColorSpec,
    pub text_muted: ColorSpec,
    pub warning: ColorSpec,
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// RGB color specification.
///
#[derive(Clone, Copy, Debug)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    /// Tokyo Night palette.
    ///
    fn default() -> Self {
        Theme {
            primary: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            text: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
            text_muted: ColorSpec {
                r: 86,
                g: 95,
                b: 137,
            }, // Comment
            warning: ColorSpec {
                r: 224,
                g: 175,
                b: 104,
            }, // Yellow
            border_active: ColorSpec {
                r: 122,
                g: 162,
                b: 247,
            }, // Blue
            border_normal: ColorSpec {
                r: 59,
                g: 66,
                b: 97,
            }, // Dark blue
            highlight_bg: ColorSpec {
                r: 40,
                g: 52,
                b: 87,
            }, // Selection
            highlight_fg: ColorSpec {
                r: 192,
                g: 202,
                b: 245,
            }, // Foreground
        }
    }
}
