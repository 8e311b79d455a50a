use serde::Serialize;

use crate::model::{Filter, Task};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub name: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub filter: Filter,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        name: task.name.clone(),
        completed: task.completed,
    }
}

/// Format a task as a display row: `  12 [x] name`
pub fn task_row(task: &Task) -> String {
    format!("{:>4} [{}] {}", task.id, task.checkbox_char(), task.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn task_row_aligns_id_and_checkbox() {
        let mut task = Task::new(7, "buy milk".into());
        assert_eq!(task_row(&task), "   7 [ ] buy milk");
        task.completed = true;
        assert_eq!(task_row(&task), "   7 [x] buy milk");
    }
}
