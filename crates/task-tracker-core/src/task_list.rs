//! Task List State
//!
//! The in-memory collection, the draft input and the active filter.
//! All mutations here are local and synchronous; the controller decides
//! when to apply them relative to store requests.

use crate::filter::Filter;
use crate::task::{Task, TaskId};

/// Whether the initial bulk read has succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Uninitialized,
    Loaded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    draft: String,
    filter: Filter,
    phase: Phase,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Replace the whole collection with a fresh read from the store
    pub fn load(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.phase = Phase::Loaded;
    }

    /// Append a store-created task. Refused if its id is already present.
    pub fn append(&mut self, task: Task) -> bool {
        if self.contains(task.id) {
            return false;
        }
        self.tasks.push(task);
        true
    }

    /// Remove the task with `id`, wherever it currently sits
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Flip `completed` and return the task as it now reads
    pub fn toggle(&mut self, id: TaskId) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.clone())
    }

    /// Tasks matching the active filter, in collection order
    pub fn visible(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect()
    }

    /// Collection positions occupied by the visible tasks
    fn visible_slots(&self) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| self.filter.matches(task))
            .map(|(index, _)| index)
            .collect()
    }

    /// Move the visible task at `source` to `destination` (both in view
    /// index space). Visible tasks are permuted within the slots they
    /// already occupy, so hidden tasks keep their positions.
    ///
    /// Returns false when either index is out of range or nothing moved.
    pub fn reorder(&mut self, source: usize, destination: usize) -> bool {
        let slots = self.visible_slots();
        if source >= slots.len() || destination >= slots.len() || source == destination {
            return false;
        }

        let mut moved: Vec<Task> = slots.iter().map(|&slot| self.tasks[slot].clone()).collect();
        let task = moved.remove(source);
        moved.insert(destination, task);

        for (slot, task) in slots.into_iter().zip(moved) {
            self.tasks[slot] = task;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|task| task.id).collect()
    }

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.load(vec![
            Task::new(1, "a", false),
            Task::new(2, "b", true),
            Task::new(3, "c", false),
            Task::new(4, "d", true),
            Task::new(5, "e", false),
        ]);
        list
    }

    #[test]
    fn test_load_sets_phase() {
        let list = sample();
        assert_eq!(list.phase(), Phase::Loaded);
        assert_eq!(ids(list.tasks()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_visible_is_stable() {
        let mut list = sample();
        list.set_filter(Filter::Incomplete);
        assert_eq!(list.visible(), list.visible());
    }

    #[test]
    fn test_filters_partition_collection() {
        let mut list = sample();
        list.set_filter(Filter::Completed);
        let done = ids(&list.visible());
        list.set_filter(Filter::Incomplete);
        let open = ids(&list.visible());
        list.set_filter(Filter::All);
        let all = ids(&list.visible());

        assert!(done.iter().all(|id| !open.contains(id)));
        let mut union: Vec<TaskId> = done.into_iter().chain(open).collect();
        union.sort();
        assert_eq!(union, all);
    }

    #[test]
    fn test_append_refuses_duplicate_id() {
        let mut list = sample();
        assert!(!list.append(Task::new(3, "dup", false)));
        assert_eq!(list.len(), 5);
        assert!(list.append(Task::new(201, "new", false)));
        assert_eq!(list.tasks().last().map(|t| t.id), Some(201));
    }

    #[test]
    fn test_toggle_missing_is_none() {
        let mut list = sample();
        let before = list.clone();
        assert!(list.toggle(99).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_reorder_all() {
        let mut list = TaskList::new();
        list.load(vec![Task::new(1, "A", false), Task::new(2, "B", false), Task::new(3, "C", false)]);
        assert!(list.reorder(0, 2));
        assert_eq!(ids(&list.visible()), vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_keeps_hidden_tasks_in_place() {
        let mut list = sample();
        list.set_filter(Filter::Incomplete);
        // visible: 1, 3, 5 at slots 0, 2, 4
        assert!(list.reorder(0, 2));
        assert_eq!(ids(&list.visible()), vec![3, 5, 1]);
        assert_eq!(ids(list.tasks()), vec![3, 2, 5, 4, 1]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_reorder_backwards() {
        let mut list = sample();
        assert!(list.reorder(4, 1));
        assert_eq!(ids(list.tasks()), vec![1, 5, 2, 3, 4]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut list = sample();
        list.set_filter(Filter::Completed);
        let before = list.clone();
        assert!(!list.reorder(0, 2));
        assert!(!list.reorder(5, 0));
        assert!(!list.reorder(1, 1));
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_after_reorder() {
        let mut list = sample();
        list.reorder(0, 4);
        let removed = list.remove(1);
        assert_eq!(removed.map(|t| t.id), Some(1));
        assert_eq!(ids(list.tasks()), vec![2, 3, 4, 5]);
    }
}
