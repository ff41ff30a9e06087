//! Bed preparation task board

use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{parse_amount, validate_name, PrepCategory, PrepTask, TaskPriority};

use crate::error::{AppError, AppResult};

/// Input for adding a prep task
#[derive(Debug, Clone)]
pub struct NewPrepTask {
    pub task: String,
    pub description: String,
    pub space_id: Option<Uuid>,
    pub category: PrepCategory,
    pub priority: TaskPriority,
    /// Free text like "30 min" or "2 hours"; the leading number is read as
    /// hours and anything unparsable as zero
    pub estimated_time: String,
}

/// Completion stats for the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrepProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: Decimal,
}

/// Preparation checklist across all spaces
#[derive(Debug, Default)]
pub struct PrepBoard {
    tasks: Vec<PrepTask>,
}

impl PrepBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, input: NewPrepTask) -> AppResult<PrepTask> {
        validate_name(&input.task).map_err(|msg| AppError::validation("task", msg))?;
        let task = PrepTask {
            id: Uuid::new_v4(),
            task: input.task,
            description: input.description,
            completed: false,
            space_id: input.space_id,
            category: input.category,
            priority: input.priority,
            estimated_hours: parse_amount(&input.estimated_time),
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    pub fn list(&self) -> &[PrepTask] {
        &self.tasks
    }

    /// Tasks filtered to one space, or everything when `space_id` is `None`
    pub fn tasks_for_space(&self, space_id: Option<Uuid>) -> Vec<&PrepTask> {
        match space_id {
            Some(id) => self
                .tasks
                .iter()
                .filter(|task| task.space_id == Some(id))
                .collect(),
            None => self.tasks.iter().collect(),
        }
    }

    /// Flip a task's completion state
    pub fn toggle(&mut self, id: Uuid) -> AppResult<PrepTask> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::NotFound("Prep task".to_string()))?;
        task.completed = !task.completed;
        tracing::debug!(id = %task.id, completed = task.completed, "toggled prep task");
        Ok(task.clone())
    }

    /// Completion stats; an empty board reads as zero percent, not a
    /// division by zero
    pub fn progress(&self) -> PrepProgress {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        let percent = if total == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(completed) / Decimal::from(total) * Decimal::ONE_HUNDRED).round_dp(1)
        };
        PrepProgress {
            completed,
            total,
            percent,
        }
    }

    /// Open high-priority tasks
    pub fn open_high_priority(&self) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.priority == TaskPriority::High && !task.completed)
            .count()
    }

    /// Hours of work left on open tasks
    pub fn estimated_hours_left(&self) -> Decimal {
        self.tasks
            .iter()
            .filter(|task| !task.completed)
            .map(|task| task.estimated_hours)
            .sum()
    }
}
