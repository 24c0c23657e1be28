use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Probability of placing a town instead of a village, constrained to [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct TownProbability(f64);

impl TownProbability {
    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;

    pub fn new(value: f64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for TownProbability {
    fn default() -> Self {
        Self::new(0.25)
    }
}

/// Mask cells per map unit, constrained to [1, 64]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, From, Serialize, Deserialize)]
pub struct MaskResolution(u32);

impl MaskResolution {
    const MIN: u32 = 1;
    const MAX: u32 = 64;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for MaskResolution {
    fn default() -> Self {
        Self::new(8)
    }
}

/// A normalized height threshold constrained to [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Serialize, Deserialize)]
pub struct HeightThreshold(f32);

impl HeightThreshold {
    const MIN: f32 = 0.0;
    const MAX: f32 = 1.0;

    pub fn new(value: f32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for HeightThreshold {
    fn default() -> Self {
        Self::new(0.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_town_probability_clamping() {
        assert_eq!(TownProbability::new(-0.5).get(), 0.0);
        assert_eq!(TownProbability::new(0.25).get(), 0.25);
        assert_eq!(TownProbability::new(3.0).get(), 1.0);
    }

    #[test]
    fn test_mask_resolution_clamping() {
        assert_eq!(MaskResolution::new(0).get(), 1);
        assert_eq!(MaskResolution::new(8).get(), 8);
        assert_eq!(MaskResolution::new(1000).get(), 64);
    }

    #[test]
    fn test_display() {
        let threshold = HeightThreshold::new(0.5);
        assert_eq!(format!("{threshold}"), "0.5");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(TownProbability::default().get(), 0.25);
        assert_eq!(MaskResolution::default().get(), 8);
        assert_eq!(HeightThreshold::default().get(), 0.4);
    }
}
