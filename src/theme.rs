use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }

    /// Linear blend toward `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn blend(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(
            channel(self.0, other.0),
            channel(self.1, other.1),
            channel(self.2, other.2),
        )
    }
}

/// Palette for one form rendering. Regions pick colors from here only, so a
/// variant is a palette swap rather than a second layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Backdrop the error banner fades against.
    pub surface: Rgb,
    pub text: Rgb,
    pub placeholder: Rgb,
    /// Value color while the controller reports the field invalid.
    pub invalid: Rgb,
    pub border: Rgb,
    pub focus: Rgb,
    pub accent: Rgb,
    pub accent_text: Rgb,
    pub danger: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            surface: Rgb(18, 20, 26),
            text: Rgb(220, 223, 228),
            placeholder: Rgb(120, 126, 138),
            invalid: Rgb(235, 111, 111),
            border: Rgb(70, 76, 90),
            focus: Rgb(240, 200, 90),
            accent: Rgb(0, 131, 202),
            accent_text: Rgb(255, 255, 255),
            danger: Rgb(214, 84, 84),
        }
    }

    /// Light palette echoing the grey-and-blue checkout card look.
    pub fn paper() -> Self {
        Self {
            surface: Rgb(228, 228, 228),
            text: Rgb(102, 102, 102),
            placeholder: Rgb(160, 160, 160),
            invalid: Rgb(186, 52, 52),
            border: Rgb(150, 150, 150),
            focus: Rgb(0, 131, 202),
            accent: Rgb(0, 131, 202),
            accent_text: Rgb(255, 255, 255),
            danger: Rgb(186, 52, 52),
        }
    }

    /// Banner color at the given opacity, faded toward the surface.
    pub fn danger_at(&self, opacity: f32) -> Color {
        self.surface.blend(self.danger, opacity).color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let a = Rgb(0, 0, 0);
        let b = Rgb(200, 100, 50);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.5), Rgb(100, 50, 25));
    }

    #[test]
    fn danger_fades_from_surface() {
        let theme = Theme::midnight();
        assert_eq!(theme.danger_at(0.0), theme.surface.color());
        assert_eq!(theme.danger_at(1.0), theme.danger.color());
    }
}
