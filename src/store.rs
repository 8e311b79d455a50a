use std::path::{Path, PathBuf};

use crate::io::snapshot::{self, StoreError};
use crate::model::{Task, TaskId};

/// Single source of truth for tasks: owns the list, mediates every mutation,
/// and writes the full snapshot through on each change.
///
/// "Not found" and "empty name" are not errors; they leave the list
/// untouched and are reported through the return value. Only persistence
/// failures are fallible.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    /// Next id to assign. Monotonic and independent of list length, so a
    /// remove followed by an add never reuses a live id.
    next_id: TaskId,
    salvaged: Option<PathBuf>,
}

impl TaskStore {
    /// Open the store in `data_dir`, loading the snapshot if present.
    /// A missing snapshot yields an empty list; an unparsable one is moved
    /// aside (see `snapshot::read`) and likewise yields an empty list.
    pub fn open(data_dir: &Path) -> Result<TaskStore, StoreError> {
        let path = data_dir.join(snapshot::SNAPSHOT_FILE);
        let load = snapshot::read(&path)?;
        let next_id = load.tasks.iter().map(|t| t.id).max().map_or(1, |m| m + 1);
        Ok(TaskStore {
            path,
            tasks: load.tasks,
            next_id,
            salvaged: load.salvaged,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Where the malformed snapshot went, if `open` had to move one aside
    pub fn salvaged(&self) -> Option<&Path> {
        self.salvaged.as_deref()
    }

    /// Append a new task and return its id. A name that trims to empty is a
    /// no-op returning None.
    pub fn add(&mut self, name: &str) -> Result<Option<TaskId>, StoreError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, name.to_string()));
        self.persist()?;
        Ok(Some(id))
    }

    /// Flip `completed` on the matching task. Returns whether a task matched.
    pub fn toggle(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.persist()?;
        Ok(true)
    }

    /// Replace the matching task's name. No-op when the trimmed name is
    /// empty or the id is absent.
    pub fn edit(&mut self, id: TaskId, new_name: &str) -> Result<bool, StoreError> {
        if new_name.trim().is_empty() {
            return Ok(false);
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.name = new_name.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Remove the matching task. No-op when absent.
    pub fn remove(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), StoreError> {
        snapshot::write(&self.path, &self.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> TaskStore {
        TaskStore::open(dir.path()).unwrap()
    }

    #[test]
    fn add_appends_uncompleted_task() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let id = store.add("Buy milk").unwrap().unwrap();

        assert_eq!(id, 1);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].name, "Buy milk");
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn add_blank_name_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert_eq!(store.add("").unwrap(), None);
        assert_eq!(store.add("   ").unwrap(), None);
        assert!(store.tasks().is_empty());
        // No mutation happened, so nothing was written
        assert!(!dir.path().join(snapshot::SNAPSHOT_FILE).exists());
    }

    #[test]
    fn add_keeps_the_name_as_given() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let id = store.add("  padded  ").unwrap().unwrap();
        assert_eq!(store.get(id).unwrap().name, "  padded  ");
    }

    #[test]
    fn toggle_twice_restores_original_flag() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("Buy milk").unwrap().unwrap();

        assert!(store.toggle(id).unwrap());
        assert!(store.get(id).unwrap().completed);
        assert!(store.toggle(id).unwrap());
        assert!(!store.get(id).unwrap().completed);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("Buy milk").unwrap();

        assert!(!store.toggle(99).unwrap());
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn edit_replaces_the_name() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("Buy milk").unwrap().unwrap();

        assert!(store.edit(id, "Buy oat milk").unwrap());
        assert_eq!(store.get(id).unwrap().name, "Buy oat milk");
    }

    #[test]
    fn edit_blank_name_or_unknown_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("Buy milk").unwrap().unwrap();

        assert!(!store.edit(id, "  ").unwrap());
        assert!(!store.edit(99, "something").unwrap());
        assert_eq!(store.get(id).unwrap().name, "Buy milk");
    }

    #[test]
    fn remove_twice_is_a_no_op_the_second_time() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let id = store.add("Buy milk").unwrap().unwrap();

        assert!(store.remove(id).unwrap());
        assert!(store.tasks().is_empty());
        assert!(!store.remove(id).unwrap());
    }

    #[test]
    fn ids_stay_unique_after_remove_then_add() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let first = store.add("one").unwrap().unwrap();
        let second = store.add("two").unwrap().unwrap();

        // The length+1 scheme would hand out `second` again here
        store.remove(first).unwrap();
        let third = store.add("three").unwrap().unwrap();

        assert_ne!(third, second);
        assert_eq!(third, 3);
    }

    #[test]
    fn persist_and_reopen_round_trips() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&dir);
            store.add("Buy milk").unwrap();
            let id = store.add("Call mom").unwrap().unwrap();
            store.toggle(id).unwrap();
        }

        let store = open_store(&dir);
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(store.tasks()[0].name, "Buy milk");
        assert!(store.tasks()[1].completed);
    }

    #[test]
    fn reopen_seeds_the_counter_past_live_ids() {
        let dir = TempDir::new().unwrap();
        {
            let mut store = open_store(&dir);
            store.add("one").unwrap();
            store.add("two").unwrap();
            store.remove(1).unwrap();
        }

        let mut store = open_store(&dir);
        let id = store.add("three").unwrap().unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn corrupt_snapshot_opens_empty_and_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(snapshot::SNAPSHOT_FILE);
        std::fs::write(&path, "]]]").unwrap();

        let store = open_store(&dir);
        assert!(store.tasks().is_empty());
        let aside = store.salvaged().expect("corrupt file should be moved aside");
        assert_eq!(std::fs::read_to_string(aside).unwrap(), "]]]");
    }

    #[test]
    fn every_mutation_writes_through() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(snapshot::SNAPSHOT_FILE);
        let mut store = open_store(&dir);

        let id = store.add("Buy milk").unwrap().unwrap();
        let after_add = std::fs::read_to_string(&path).unwrap();
        assert!(after_add.contains("Buy milk"));

        store.toggle(id).unwrap();
        let after_toggle = std::fs::read_to_string(&path).unwrap();
        assert!(after_toggle.contains("true"));

        store.remove(id).unwrap();
        let after_remove = std::fs::read_to_string(&path).unwrap();
        assert_eq!(after_remove.trim(), "[]");
    }
}
