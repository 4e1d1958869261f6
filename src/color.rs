// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// The alpha channel caps whatever per-draw alpha is asked for in `css`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn alpha_scale(&self) -> f64 {
        self.a as f64 / 255.0
    }

    // CSS color string for the canvas fill/stroke style
    pub fn css(&self, alpha: f64) -> String {
        let alpha = (alpha * self.alpha_scale()).max(0.0).min(1.0);
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
