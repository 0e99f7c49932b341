// Simple color struct, created from an unsigned 32 representing RRGGBB
// with a separate float alpha so it maps directly onto css rgba()

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    pub const fn from_rgb_u32(num: u32, a: f64) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_output() {
        let accent = Color::from_rgb_u32(0x2f81f7, 0.6);
        assert_eq!(accent, Color::rgba(47, 129, 247, 0.6));
        assert_eq!(accent.to_css(), "rgba(47, 129, 247, 0.6)");
        assert_eq!(accent.with_alpha(0.45).to_css(), "rgba(47, 129, 247, 0.45)");
    }
}
