//! Bed preparation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a prep task is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrepCategory {
    Soil,
    Irrigation,
    Structure,
    Timing,
}

/// Task urgency
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// A preparation task on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepTask {
    pub id: Uuid,
    pub task: String,
    pub description: String,
    pub completed: bool,
    /// Space the task applies to; `None` for garden-wide chores
    pub space_id: Option<Uuid>,
    pub category: PrepCategory,
    pub priority: TaskPriority,
    /// Parsed leniently from free text like "2 hours"
    pub estimated_hours: Decimal,
}
