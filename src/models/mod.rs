//! Core data models for the fatigue and compliance engine.
//!
//! This module contains the shift, assignment, result and violation types
//! shared by the evaluator, the rule checker and the HTTP layer.

mod assignment;
mod fatigue_result;
mod shift_definition;
mod violation;

pub use assignment::{Assignment, ShiftPattern};
pub use fatigue_result::{FatigueLevel, FatigueResult};
pub use shift_definition::ShiftDefinition;
pub use violation::{ComplianceResult, ComplianceViolation, Severity, ViolationType};
