use serde::{Deserialize, Serialize};

use crate::{Color, AMBER_RING, PAPER, WARM_PALETTE};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SettingsError(pub String);

/// Largest `max_active` accepted from stored overrides.
pub const MAX_ACTIVE_CEILING: usize = 10_000;

/// Tuning for the background effect.
///
/// Every field has a default, so stored overrides only need to name the
/// values they change.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldSettings {
    /// Master switch; a disabled effect never mounts.
    pub enabled: bool,
    /// Probability that a single pointer move spawns a particle.
    pub spawn_chance: f64,
    /// Ceiling on concurrently active particles.
    pub max_active: usize,
    /// Half-width of the spawn square around the pointer, in pixels.
    pub jitter: f64,
    /// Largest speed on either axis, in pixels per frame.
    pub max_speed: f64,
    /// Inclusive lifetime range, in frames.
    pub life_range: (u32, u32),
    /// Radius range, in pixels.
    pub size_range: (f64, f64),
    pub target_fps: f64,
    /// Upper bound on the device pixel ratio used for the backing surface.
    pub max_pixel_ratio: f64,
    pub palette: Vec<Color>,
    pub background: Color,
    pub ripples: bool,
    pub ripple_color: Color,
}

impl Default for FieldSettings {
    fn default() -> Self {
        FieldSettings {
            enabled: true,
            spawn_chance: 0.3,
            max_active: 50,
            jitter: 15.0,
            max_speed: 1.0,
            life_range: (40, 80),
            size_range: (1.0, 4.0),
            target_fps: 60.0,
            max_pixel_ratio: 2.0,
            palette: WARM_PALETTE.to_vec(),
            background: PAPER,
            ripples: true,
            ripple_color: AMBER_RING,
        }
    }
}

impl FieldSettings {
    /// Parses stored overrides and checks them.
    pub fn from_json(json: &str) -> Result<FieldSettings, SettingsError> {
        let settings: FieldSettings =
            serde_json::from_str(json).map_err(|err| SettingsError(err.to_string()))?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(SettingsError(format!(
                "spawn chance {} is outside 0..=1",
                self.spawn_chance
            )));
        }

        if self.max_active > MAX_ACTIVE_CEILING {
            return Err(SettingsError(format!(
                "max active {} is above {MAX_ACTIVE_CEILING}",
                self.max_active
            )));
        }

        if self.palette.is_empty() {
            return Err(SettingsError("palette is empty".to_string()));
        }

        let (min_life, max_life) = self.life_range;

        if min_life == 0 || min_life > max_life {
            return Err(SettingsError(format!(
                "life range {min_life}..={max_life} is invalid"
            )));
        }

        let (min_size, max_size) = self.size_range;

        if !(min_size > 0.0) || !max_size.is_finite() || min_size > max_size {
            return Err(SettingsError(format!(
                "size range {min_size}..={max_size} is invalid"
            )));
        }

        let finite_non_negative = |value: f64| value.is_finite() && value >= 0.0;

        if !finite_non_negative(self.jitter) || !finite_non_negative(self.max_speed) {
            return Err(SettingsError(
                "jitter and speed must be finite and not negative".to_string(),
            ));
        }

        if !(self.target_fps > 0.0) {
            return Err(SettingsError(format!(
                "target fps {} must be positive",
                self.target_fps
            )));
        }

        if !(self.max_pixel_ratio > 0.0) {
            return Err(SettingsError(format!(
                "max pixel ratio {} must be positive",
                self.max_pixel_ratio
            )));
        }

        Ok(())
    }

    /// Milliseconds between admitted frames.
    pub fn frame_interval(&self) -> f64 {
        1000.0 / self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = FieldSettings::default();

        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.max_active, 50);
        assert!((settings.frame_interval() - 16.666).abs() < 0.01);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            FieldSettings::from_json(r#"{ "spawn_chance": 0.5, "ripples": false }"#).unwrap();

        assert_eq!(settings.spawn_chance, 0.5);
        assert!(!settings.ripples);
        assert_eq!(settings.max_active, 50);
        assert_eq!(settings.palette, WARM_PALETTE.to_vec());
    }

    #[test]
    fn test_palette_override() {
        let settings = FieldSettings::from_json(
            r#"{ "palette": [{ "r": 1, "g": 2, "b": 3, "a": 0.5 }] }"#,
        )
        .unwrap();

        assert_eq!(settings.palette, vec![Color::new(1, 2, 3, 0.5)]);
    }

    #[test]
    fn test_rejected_settings() {
        let cases = [
            r#"{ "spawn_chance": 1.5 }"#,
            r#"{ "palette": [] }"#,
            r#"{ "life_range": [0, 10] }"#,
            r#"{ "life_range": [80, 40] }"#,
            r#"{ "size_range": [0.0, 4.0] }"#,
            r#"{ "size_range": [5.0, 4.0] }"#,
            r#"{ "jitter": -1.0 }"#,
            r#"{ "target_fps": 0.0 }"#,
            r#"{ "max_pixel_ratio": -2.0 }"#,
            r#"{ "max_active": "many" }"#,
            r#"{ "max_active": 18446744073709551615 }"#,
            r#"{ "max_active": 10001 }"#,
            "not json",
        ];

        for case in cases {
            assert!(FieldSettings::from_json(case).is_err(), "accepted {case}");
        }
    }

    #[test]
    fn test_ceiling_is_accepted() {
        let settings = FieldSettings::from_json(r#"{ "max_active": 10000 }"#).unwrap();

        assert_eq!(settings.max_active, MAX_ACTIVE_CEILING);
    }

    #[test]
    fn test_unbounded_motion_is_rejected() {
        let cases = [
            FieldSettings {
                jitter: f64::INFINITY,
                ..FieldSettings::default()
            },
            FieldSettings {
                max_speed: f64::INFINITY,
                ..FieldSettings::default()
            },
            FieldSettings {
                max_speed: f64::NAN,
                ..FieldSettings::default()
            },
            FieldSettings {
                size_range: (1.0, f64::INFINITY),
                ..FieldSettings::default()
            },
        ];

        for case in cases {
            assert!(case.validate().is_err(), "accepted {case:?}");
        }
    }
}
