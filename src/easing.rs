//! Scalar easing curves
//!
//! Selectable from settings. The renderer samples the active curve each frame
//! but nothing consumes the value yet.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Easing curve selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInOutSine,
    Elastic,
}

impl Easing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseInOutSine => "Ease In/Out",
            Easing::Elastic => "Elastic",
        }
    }

    /// Evaluate the curve at `t` (clamped to [0, 1])
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                // ease-out elastic, ~3 oscillations
                let c4 = TAU / 3.0;
                2f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Easing::default().as_str(), "Linear");
        assert_eq!(Easing::EaseInOutSine.as_str(), "Ease In/Out");
        assert_eq!(Easing::Elastic.as_str(), "Elastic");
    }

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::EaseInOutSine, Easing::Elastic] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_sine_midpoint() {
        assert!((Easing::EaseInOutSine.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_elastic_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::Elastic.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Easing::Linear.apply(-2.0), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
    }
}
