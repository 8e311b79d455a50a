use serde::{Deserialize, Serialize};

/// Unique task identifier, assigned monotonically by the store
pub type TaskId = u64;

/// A single tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Display name, non-empty once committed
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(id: TaskId, name: String) -> Self {
        Task {
            id,
            name,
            completed: false,
        }
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Completion filter selecting one of the three views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tab display order
    pub const TABS: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Parse a filter name as used on the CLI
    pub fn from_name(s: &str) -> Option<Filter> {
        match s {
            "all" => Some(Filter::All),
            "active" => Some(Filter::Active),
            "completed" | "done" => Some(Filter::Completed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Whether a task passes this filter
    pub fn accepts(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Project a list through the filter. View-only: the underlying list is
    /// never mutated or reordered.
    pub fn apply(self, tasks: &[Task]) -> Vec<&Task> {
        tasks.iter().filter(|t| self.accepts(t)).collect()
    }

    /// Tab to the right, wrapping
    pub fn next(self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    /// Tab to the left, wrapping
    pub fn prev(self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Active => Filter::All,
            Filter::Completed => Filter::Active,
        }
    }
}
