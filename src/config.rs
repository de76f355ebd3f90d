// Tuning for the particle field. Two tunings exist for the hero background;
// both are available as presets and `hero` is the default.

use crate::color::{Color, ColorRange};
use crate::error::AnimatorError;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    // Viewport pixels of width per particle.
    pub density: f64,
    pub max_particles: usize,
    pub min_speed: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub particle_colors: ColorRange,
    // Pairs closer than this (in pixels) are joined by a line.
    pub link_distance: f64,
    // Line alpha for two coincident particles, fading to zero at `link_distance`.
    pub link_alpha: f64,
    pub link_color: Color,
    pub line_width: f64,
}

impl FieldConfig {
    pub fn hero() -> Self {
        FieldConfig {
            density: 8.0,
            max_particles: 150,
            min_speed: 0.03,
            max_speed: 0.2,
            min_radius: 0.5,
            max_radius: 2.0,
            particle_colors: ColorRange::new(
                Color::from_u32(0xc3afc31a),
                Color::from_u32(0xfefefe66),
            ),
            link_distance: 80.0,
            link_alpha: 0.1,
            link_color: Color::from_u32(0xc8c8e6ff),
            line_width: 0.3,
        }
    }

    pub fn compact() -> Self {
        FieldConfig {
            density: 10.0,
            max_particles: 100,
            min_speed: 0.05,
            max_speed: 0.35,
            min_radius: 1.0,
            max_radius: 3.0,
            particle_colors: ColorRange::new(
                Color::from_u32(0x96b4ff33),
                Color::from_u32(0xdce6ff80),
            ),
            link_distance: 100.0,
            link_alpha: 0.15,
            link_color: Color::from_u32(0x96b4ffff),
            line_width: 0.5,
        }
    }

    pub fn validate(&self) -> Result<(), AnimatorError> {
        let invalid = |reason: &str| -> Result<(), AnimatorError> {
            Err(AnimatorError::InvalidConfig(reason.to_owned()))
        };

        if !(self.density.is_finite() && self.density > 0.0) {
            return invalid("density must be a positive number");
        }
        if !(self.min_speed >= 0.0 && self.min_speed <= self.max_speed && self.max_speed.is_finite()) {
            return invalid("speed range must satisfy 0 <= min_speed <= max_speed");
        }
        if !(self.min_radius > 0.0 && self.min_radius <= self.max_radius && self.max_radius.is_finite()) {
            return invalid("radius range must satisfy 0 < min_radius <= max_radius");
        }
        if !self.particle_colors.is_ordered() {
            return invalid("particle color range is inverted");
        }
        if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
            return invalid("link_distance must be a positive number");
        }
        if !(0.0..=1.0).contains(&self.link_alpha) {
            return invalid("link_alpha must be within [0, 1]");
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return invalid("line_width must be a positive number");
        }
        Ok(())
    }

    // Number of particles for a viewport `width` pixels wide, capped at `max_particles`.
    pub fn particle_count(&self, width: f64) -> usize {
        if !(width.is_finite() && width > 0.0) || !(self.density > 0.0) {
            return 0;
        }
        let count = (width / self.density).floor();
        if count >= self.max_particles as f64 {
            self.max_particles
        } else {
            count as usize
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig::hero()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Preset {
    Hero,
    Compact,
}

impl Preset {
    pub fn config(self) -> FieldConfig {
        match self {
            Preset::Hero => FieldConfig::hero(),
            Preset::Compact => FieldConfig::compact(),
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Preset::Hero
    }
}

impl FromStr for Preset {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(Preset::Hero),
            "compact" => Ok(Preset::Compact),
            _ => Err(AnimatorError::UnknownPreset(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert_eq!(FieldConfig::hero().validate(), Ok(()));
        assert_eq!(FieldConfig::compact().validate(), Ok(()));
    }

    #[test]
    fn count_follows_density() {
        assert_eq!(FieldConfig::compact().particle_count(800.0), 80);
        assert_eq!(FieldConfig::hero().particle_count(800.0), 100);
        assert_eq!(FieldConfig::hero().particle_count(7.9), 0);
    }

    #[test]
    fn count_is_capped() {
        let config = FieldConfig::hero();
        assert_eq!(config.particle_count(1200.0), 150);
        assert_eq!(config.particle_count(100_000.0), 150);
        assert_eq!(config.particle_count(f64::MAX), 150);
    }

    #[test]
    fn count_is_monotonic_in_width() {
        let config = FieldConfig::hero();
        let mut previous = 0;
        for width in (0..4000).step_by(7) {
            let count = config.particle_count(width as f64);
            assert!(count >= previous);
            assert!(count <= config.max_particles);
            previous = count;
        }
    }

    #[test]
    fn degenerate_widths_yield_no_particles() {
        let config = FieldConfig::hero();
        assert_eq!(config.particle_count(0.0), 0);
        assert_eq!(config.particle_count(-320.0), 0);
        assert_eq!(config.particle_count(f64::NAN), 0);
        assert_eq!(config.particle_count(f64::INFINITY), 0);

        let broken = FieldConfig { density: 0.0, ..FieldConfig::hero() };
        assert_eq!(broken.particle_count(800.0), 0);
    }

    #[test]
    fn rejects_bad_tunings() {
        let zero_density = FieldConfig { density: 0.0, ..FieldConfig::hero() };
        assert!(matches!(zero_density.validate(), Err(AnimatorError::InvalidConfig(_))));

        let inverted_speed = FieldConfig { min_speed: 0.5, max_speed: 0.1, ..FieldConfig::hero() };
        assert!(inverted_speed.validate().is_err());

        let zero_radius = FieldConfig { min_radius: 0.0, ..FieldConfig::hero() };
        assert!(zero_radius.validate().is_err());

        let no_links = FieldConfig { link_distance: 0.0, ..FieldConfig::hero() };
        assert!(no_links.validate().is_err());

        let colors = ColorRange::new(Color::from_u32(0xffffffff), Color::from_u32(0x00000000));
        let inverted_colors = FieldConfig { particle_colors: colors, ..FieldConfig::hero() };
        assert!(inverted_colors.validate().is_err());
    }

    #[test]
    fn parses_preset_names() {
        assert_eq!("hero".parse::<Preset>(), Ok(Preset::Hero));
        assert_eq!(" Compact ".parse::<Preset>(), Ok(Preset::Compact));
        assert_eq!(
            "neon".parse::<Preset>(),
            Err(AnimatorError::UnknownPreset("neon".to_owned()))
        );
        assert_eq!(Preset::default().config(), FieldConfig::default());
    }
}
