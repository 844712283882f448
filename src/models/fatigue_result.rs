//! Per-shift fatigue scores produced by the evaluator.

use serde::{Deserialize, Serialize};

use crate::config::FatigueThresholds;

/// Classification of a Fatigue Growth Index against its tier thresholds.
///
/// Ordered from least to most severe, so `max` picks the worst level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueLevel {
    /// Within good practice.
    Ok,
    /// Above good practice, within the level-2 limit.
    Level1,
    /// Above the level-2 limit.
    Level2,
    /// Above the breach limit.
    Breach,
}

/// Fatigue scores for one shift of an evaluated sequence.
///
/// `risk_index` (FRI) is the product of the three components and sits
/// around 0.5–2.0; `fatigue_index` (FGI) is an additive score on a 0–50+
/// scale. Values are unrounded; the `*_display` helpers round for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueResult {
    /// The `day` of the input shift.
    pub day: u32,
    /// Cumulative component.
    pub cumulative: f64,
    /// Duty-timing component.
    pub timing: f64,
    /// Job-type and breaks component.
    pub job_breaks: f64,
    /// Fatigue Risk Index.
    pub risk_index: f64,
    /// Fatigue Growth Index.
    pub fatigue_index: f64,
    /// Whether the shift was scored against night thresholds.
    pub is_night: bool,
    /// Duty length in hours.
    pub duty_hours: f64,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl FatigueResult {
    /// FRI rounded to three decimal places.
    pub fn risk_index_display(&self) -> f64 {
        round_to(self.risk_index, 3)
    }

    /// FGI rounded to one decimal place.
    pub fn fatigue_index_display(&self) -> f64 {
        round_to(self.fatigue_index, 1)
    }

    /// Classifies the FGI using the day or night tier, whichever applies.
    ///
    /// # Example
    ///
    /// ```
    /// use fatigue_engine::config::FatigueThresholds;
    /// use fatigue_engine::models::{FatigueLevel, FatigueResult};
    ///
    /// let mut result = FatigueResult {
    ///     day: 1,
    ///     cumulative: 1.0,
    ///     timing: 1.0,
    ///     job_breaks: 1.0,
    ///     risk_index: 1.0,
    ///     fatigue_index: 40.0,
    ///     is_night: false,
    ///     duty_hours: 12.0,
    /// };
    /// let thresholds = FatigueThresholds::default();
    /// assert_eq!(result.fatigue_level(&thresholds), FatigueLevel::Level2);
    ///
    /// result.is_night = true;
    /// assert_eq!(result.fatigue_level(&thresholds), FatigueLevel::Level1);
    /// ```
    pub fn fatigue_level(&self, thresholds: &FatigueThresholds) -> FatigueLevel {
        thresholds
            .for_shift(self.is_night)
            .classify(self.fatigue_index)
    }

    /// Whether the FRI is above the configured risk limit.
    pub fn exceeds_risk_limit(&self, thresholds: &FatigueThresholds) -> bool {
        self.risk_index > thresholds.risk_index_limit
    }
}
