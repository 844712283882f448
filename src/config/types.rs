//! Configuration types for fatigue evaluation and compliance checking.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! built-in default, so a file only needs to list what it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Working-time limits applied by the compliance checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceLimits {
    /// Longest permitted single shift, in hours.
    pub max_shift_hours: Decimal,
    /// Longest permitted shift plus commute ("door to door"), in hours.
    pub max_duty_with_commute_hours: Decimal,
    /// Shortest permitted rest between shifts, in hours.
    pub min_rest_hours: Decimal,
    /// 7-day total at which the level-1 warning fires, in hours.
    pub weekly_hours_level1: Decimal,
    /// 7-day total above which the limit is breached, in hours.
    pub max_weekly_hours: Decimal,
    /// Longest permitted run of consecutive working days.
    pub max_consecutive_days: u32,
    /// Run of nights above which a good-practice warning fires.
    pub consecutive_nights_warning: u32,
    /// Longest permitted run of consecutive nights.
    pub max_consecutive_nights: u32,
}

impl Default for ComplianceLimits {
    fn default() -> Self {
        Self {
            max_shift_hours: Decimal::new(12, 0),
            max_duty_with_commute_hours: Decimal::new(14, 0),
            min_rest_hours: Decimal::new(12, 0),
            weekly_hours_level1: Decimal::new(60, 0),
            max_weekly_hours: Decimal::new(72, 0),
            max_consecutive_days: 6,
            consecutive_nights_warning: 4,
            max_consecutive_nights: 7,
        }
    }
}

/// Values used for fatigue parameters that neither the assignment nor the
/// shift pattern supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDefaults {
    /// Workload rating, 1 (most demanding) to 4.
    pub workload: u8,
    /// Attention rating, 1 (most demanding) to 4.
    pub attention: u8,
    /// Commute to work, minutes.
    pub commute_in: u32,
    /// Commute home, minutes.
    pub commute_out: u32,
    /// Minutes of work between breaks.
    pub break_frequency: u32,
    /// Break length, minutes.
    pub break_length: u32,
    /// Start time used when an assignment's pattern is missing.
    pub start_time: String,
    /// End time used when an assignment's pattern is missing.
    pub end_time: String,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            workload: 2,
            attention: 2,
            commute_in: 30,
            commute_out: 30,
            break_frequency: 180,
            break_length: 30,
            start_time: "08:00".to_string(),
            end_time: "18:00".to_string(),
        }
    }
}

/// FGI tier boundaries for one shift type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FgiTiers {
    /// Scores above this leave good practice.
    pub good_practice: f64,
    /// Scores above this are level-2 exceedances.
    pub level2: f64,
    /// Scores above this are breaches.
    pub breach: f64,
}

impl FgiTiers {
    /// Maps an FGI score onto its tier.
    pub fn classify(&self, fatigue_index: f64) -> crate::models::FatigueLevel {
        use crate::models::FatigueLevel;

        if fatigue_index > self.breach {
            FatigueLevel::Breach
        } else if fatigue_index > self.level2 {
            FatigueLevel::Level2
        } else if fatigue_index > self.good_practice {
            FatigueLevel::Level1
        } else {
            FatigueLevel::Ok
        }
    }
}

/// Fatigue thresholds, split by shift type.
///
/// Night shifts carry higher FGI limits than day shifts in every tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueThresholds {
    /// FGI tiers for day shifts.
    pub day: FgiTiers,
    /// FGI tiers for night shifts.
    pub night: FgiTiers,
    /// FRI above which a shift is flagged.
    pub risk_index_limit: f64,
}

impl Default for FatigueThresholds {
    fn default() -> Self {
        Self {
            day: FgiTiers {
                good_practice: 25.0,
                level2: 35.0,
                breach: 45.0,
            },
            night: FgiTiers {
                good_practice: 35.0,
                level2: 45.0,
                breach: 55.0,
            },
            risk_index_limit: 1.6,
        }
    }
}

impl FatigueThresholds {
    /// The tier table for a shift type.
    pub fn for_shift(&self, is_night: bool) -> &FgiTiers {
        if is_night { &self.night } else { &self.day }
    }
}

/// Contents of `fatigue.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    /// Parameter defaults.
    pub defaults: ParameterDefaults,
    /// Classification thresholds.
    pub thresholds: FatigueThresholds,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Working-time limits.
    pub limits: ComplianceLimits,
    /// Fatigue parameter defaults.
    pub defaults: ParameterDefaults,
    /// Fatigue thresholds.
    pub thresholds: FatigueThresholds,
}

impl EngineConfig {
    /// Creates a config from its component parts.
    pub fn new(limits: ComplianceLimits, fatigue: FatigueConfig) -> Self {
        Self {
            limits,
            defaults: fatigue.defaults,
            thresholds: fatigue.thresholds,
        }
    }
}
