// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Particles pick a random color inside a ColorRange when they are spawned.

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    pub fn with_alpha(self, alpha: f64) -> Color {
        Color {
            a: (alpha.max(0.0).min(1.0) * 255.0).round() as u8,
            ..self
        }
    }

    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    // Canvas fill/stroke styles take css strings
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.alpha())
    }
}

// Inclusive per-channel bounds for randomly tinted colors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorRange {
    pub low: Color,
    pub high: Color,
}

impl ColorRange {
    pub fn new(low: Color, high: Color) -> Self {
        ColorRange { low, high }
    }

    pub fn is_ordered(&self) -> bool {
        self.low.r <= self.high.r
            && self.low.g <= self.high.g
            && self.low.b <= self.high.b
            && self.low.a <= self.high.a
    }

    pub fn contains(&self, color: Color) -> bool {
        (self.low.r..=self.high.r).contains(&color.r)
            && (self.low.g..=self.high.g).contains(&color.g)
            && (self.low.b..=self.high.b).contains(&color.b)
            && (self.low.a..=self.high.a).contains(&color.a)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color {
            r: channel(rng, self.low.r, self.high.r),
            g: channel(rng, self.low.g, self.high.g),
            b: channel(rng, self.low.b, self.high.b),
            a: channel(rng, self.low.a, self.high.a),
        }
    }
}

fn channel<R: Rng + ?Sized>(rng: &mut R, low: u8, high: u8) -> u8 {
    if low >= high {
        return low;
    }
    rng.gen_range(low as u16, high as u16 + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn unpacks_rrggbbaa() {
        let color = Color::from_u32(0xc8c8e6ff);
        assert_eq!(color, Color { r: 200, g: 200, b: 230, a: 255 });
    }

    #[test]
    fn css_uses_fractional_alpha() {
        let color = Color::from_u32(0xc8c8e600).with_alpha(0.5);
        assert_eq!(color.a, 128);
        assert_eq!(color.to_css(), "rgba(200, 200, 230, 0.502)");
    }

    #[test]
    fn with_alpha_clamps() {
        let color = Color::from_u32(0x000000ff);
        assert_eq!(color.with_alpha(-1.0).a, 0);
        assert_eq!(color.with_alpha(3.0).a, 255);
    }

    #[test]
    fn samples_stay_inside_range() {
        let range = ColorRange::new(Color::from_u32(0xc3afc31a), Color::from_u32(0xfefefe66));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(range.contains(range.sample(&mut rng)));
        }
    }

    #[test]
    fn degenerate_range_yields_its_bound() {
        let only = Color::from_u32(0x10203040);
        let range = ColorRange::new(only, only);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(range.sample(&mut rng), only);
    }
}
