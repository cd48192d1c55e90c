//! Visualization settings
//!
//! A settings value is an immutable snapshot: the host builds a new one and
//! hands it to the renderer, which diffs it against the active snapshot.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::easing::Easing;
use crate::error::SettingsError;

/// Surface the points are distributed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Shape {
    #[default]
    Sphere,
    Logo,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Sphere => "Sphere",
            Shape::Logo => "Logo",
        }
    }
}

/// Auto-rotation direction around the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Sign applied to the yaw increment
    pub fn sign(&self) -> f32 {
        match self {
            RotationDirection::Clockwise => 1.0,
            RotationDirection::CounterClockwise => -1.0,
        }
    }
}

/// Direction the wobble offset is applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WobbleAxis {
    /// Along the position vector (breathing)
    #[default]
    Radial,
    /// Perpendicular to the position, in the horizontal plane
    Tangential,
    /// Along a fixed random direction per point
    Random,
}

/// How a point's trail is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrailStyle {
    #[default]
    Line,
    Dots,
    Ribbon,
}

/// Complete configuration snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Shape ===
    pub shape: Shape,
    pub point_count: usize,

    // === Rotation ===
    pub auto_rotate: bool,
    /// Radians per second
    pub rotation_speed: f32,
    pub rotation_direction: RotationDirection,
    /// Selected curve (sampled, not applied)
    pub easing: Easing,

    // === Wobble ===
    /// Fraction of the unit radius; 0 disables wobble
    pub wobble_amplitude: f32,
    /// Radians per second
    pub wobble_frequency: f32,
    pub wobble_axis: WobbleAxis,

    // === Size ===
    /// Base marker radius in pixels
    pub point_size: f32,
    /// Extra pixels spread across points by index
    pub size_variation: f32,
    pub pulse_enabled: bool,
    pub pulse_speed: f32,
    pub pulse_amount: f32,
    /// Shrink and fade points that are farther away
    pub depth_scaling: bool,

    // === Trails ===
    /// Samples kept per point; 0 disables trails
    pub trail_length: usize,
    /// Alpha of the newest trail sample (0.0 - 1.0)
    pub trail_opacity: f32,
    pub trail_style: TrailStyle,

    // === Camera ===
    pub camera_distance: f32,

    // === Color ===
    pub primary_color: [f32; 4],
    pub secondary_color: [f32; 4],
    /// Blend from primary to secondary by point index
    pub use_gradient: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere,
            point_count: 200,

            auto_rotate: true,
            rotation_speed: 0.5,
            rotation_direction: RotationDirection::Clockwise,
            easing: Easing::Linear,

            wobble_amplitude: 0.05,
            wobble_frequency: 2.0,
            wobble_axis: WobbleAxis::Radial,

            point_size: 4.0,
            size_variation: 2.0,
            pulse_enabled: true,
            pulse_speed: 2.0,
            pulse_amount: 0.2,
            depth_scaling: true,

            trail_length: 12,
            trail_opacity: 0.6,
            trail_style: TrailStyle::Line,

            camera_distance: DEFAULT_CAMERA_DISTANCE,

            primary_color: [0.2, 0.8, 1.0, 1.0],
            secondary_color: [0.9, 0.3, 0.9, 1.0],
            use_gradient: true,
        }
    }
}

impl Settings {
    /// Parse a (possibly partial) JSON snapshot; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validated()
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject unusable values and clamp ranged ones into their documented bounds
    pub fn validated(mut self) -> Result<Self, SettingsError> {
        if self.point_count > MAX_POINT_COUNT {
            return Err(SettingsError::TooManyPoints(self.point_count));
        }

        let scalars = [
            ("rotation_speed", self.rotation_speed),
            ("wobble_amplitude", self.wobble_amplitude),
            ("wobble_frequency", self.wobble_frequency),
            ("point_size", self.point_size),
            ("size_variation", self.size_variation),
            ("pulse_speed", self.pulse_speed),
            ("pulse_amount", self.pulse_amount),
            ("trail_opacity", self.trail_opacity),
            ("camera_distance", self.camera_distance),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SettingsError::NonFinite(*name));
        }
        if self
            .primary_color
            .iter()
            .chain(self.secondary_color.iter())
            .any(|c| !c.is_finite())
        {
            return Err(SettingsError::NonFinite("color"));
        }

        if self.trail_length > TRAIL_CAPACITY {
            log::warn!(
                "Trail length {} clamped to {}",
                self.trail_length,
                TRAIL_CAPACITY
            );
            self.trail_length = TRAIL_CAPACITY;
        }
        let distance = self
            .camera_distance
            .clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
        if distance != self.camera_distance {
            log::warn!(
                "Camera distance {} clamped to {}",
                self.camera_distance,
                distance
            );
            self.camera_distance = distance;
        }
        self.trail_opacity = self.trail_opacity.clamp(0.0, 1.0);
        self.point_size = self.point_size.max(0.0);
        self.size_variation = self.size_variation.max(0.0);
        self.wobble_amplitude = self.wobble_amplitude.max(0.0);
        for c in self
            .primary_color
            .iter_mut()
            .chain(self.secondary_color.iter_mut())
        {
            *c = c.clamp(0.0, 1.0);
        }

        Ok(self)
    }

    /// Whether moving from `self` to `next` requires rebuilding the points
    pub fn needs_regeneration(&self, next: &Settings) -> bool {
        self.shape != next.shape
            || self.point_count != next.point_count
            || self.primary_color != next.primary_color
            || self.secondary_color != next.secondary_color
            || self.use_gradient != next.use_gradient
    }

    /// Trails are drawn at all
    pub fn trails_enabled(&self) -> bool {
        self.trail_length > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "shape": "Logo", "point_count": 64 }"#).unwrap();
        assert_eq!(settings.shape, Shape::Logo);
        assert_eq!(settings.point_count, 64);
        assert_eq!(settings.trail_style, Settings::default().trail_style);
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = Settings::from_json(r#"{ "point_count": -5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_huge_count_rejected() {
        let settings = Settings {
            point_count: MAX_POINT_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(
            settings.validated(),
            Err(SettingsError::TooManyPoints(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let settings = Settings {
            wobble_frequency: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validated(),
            Err(SettingsError::NonFinite("wobble_frequency"))
        ));
    }

    #[test]
    fn test_ranges_clamped() {
        let settings = Settings {
            trail_length: 500,
            camera_distance: 40.0,
            trail_opacity: 2.0,
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(settings.trail_length, TRAIL_CAPACITY);
        assert_eq!(settings.camera_distance, MAX_CAMERA_DISTANCE);
        assert_eq!(settings.trail_opacity, 1.0);
    }

    #[test]
    fn test_regeneration_triggers() {
        let base = Settings::default();
        let trail_only = Settings {
            trail_length: 3,
            wobble_amplitude: 0.2,
            ..base.clone()
        };
        assert!(!base.needs_regeneration(&trail_only));

        let shape = Settings {
            shape: Shape::Logo,
            ..base.clone()
        };
        assert!(base.needs_regeneration(&shape));

        let color = Settings {
            primary_color: [1.0, 0.0, 0.0, 1.0],
            ..base.clone()
        };
        assert!(base.needs_regeneration(&color));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            shape: Shape::Logo,
            trail_style: TrailStyle::Ribbon,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
