//! Request types for the engine API.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, ShiftDefinition, ShiftPattern};

/// Request body for `POST /fatigue/evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// Shifts in roster order.
    pub shifts: Vec<ShiftDefinition>,
}

/// Request body for `POST /compliance/check`.
///
/// `assignments` may contain other employees' records; only those for
/// `employee_id` are checked. Unknown fields on the records are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRequest {
    /// The employee to check.
    pub employee_id: String,
    /// The assignment history.
    pub assignments: Vec<Assignment>,
    /// Shift patterns referenced by the assignments.
    #[serde(default)]
    pub shift_patterns: Vec<ShiftPattern>,
}
