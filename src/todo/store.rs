use crate::todo::models::{Category, Draft, Priority, Task, TaskId};
use chrono::NaiveDate;
use log::debug;

/// Owns the task list and the draft of the next task.
///
/// Every mutation goes through the methods below. Invalid input (blank
/// draft text, an id that is not in the list) leaves the store untouched
/// and is not reported as an error.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    draft: Draft,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
    }

    pub fn set_draft_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    pub fn set_draft_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.draft.due_date = due_date;
    }

    /// Appends a task built from the draft and returns its id.
    ///
    /// Returns `None` without touching anything when the trimmed draft text
    /// is empty. On success the draft text and due date are cleared; the
    /// category and priority stay as they were for the next entry.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let text = self.draft.text.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let id = self.fresh_id();
        let task = Task {
            id,
            text,
            completed: false,
            category: self.draft.category,
            priority: self.draft.priority,
            due_date: self.draft.due_date,
        };
        debug!(
            "event=task_added id={} category={} priority={} has_due_date={}",
            id,
            task.category,
            task.priority,
            task.due_date.is_some()
        );
        self.tasks.push(task);

        self.draft.text.clear();
        self.draft.due_date = None;

        Some(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `false` if no such task exists.
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!("event=task_toggled id={} completed={}", id, task.completed);
                true
            }
            None => false,
        }
    }

    /// Removes the task with `id`, keeping the order of the others.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        debug!("event=task_removed id={} remaining={}", id, self.tasks.len());
        Some(task)
    }

    // Counter-based so two tasks added in the same instant never share an id.
    fn fresh_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId::new(self.next_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn store_with(texts: &[&str]) -> (TaskStore, Vec<TaskId>) {
        let mut store = TaskStore::new();
        let ids = texts
            .iter()
            .map(|text| {
                store.set_draft_text(*text);
                store.add_task().unwrap()
            })
            .collect();
        (store, ids)
    }

    fn ids_of(store: &TaskStore) -> Vec<TaskId> {
        store.tasks().iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_add_task_trims_text_and_starts_incomplete() {
        let (store, ids) = store_with(&["  Walk the dog \t"]);

        assert_eq!(store.len(), 1);
        let task = store.get(ids[0]).unwrap();
        assert_eq!(task.text, "Walk the dog");
        assert!(!task.completed);
        assert_eq!(task.category, Category::Personal);
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.due_date.is_none());
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n  ")]
    fn test_add_task_ignores_blank_text(#[case] text: &str) {
        let (mut store, ids) = store_with(&["first", "second"]);

        store.set_draft_text(text);
        assert_eq!(store.add_task(), None);

        assert_eq!(ids_of(&store), ids);
        assert_eq!(store.draft().text, text);
    }

    #[test]
    fn test_add_task_copies_draft_and_resets_text_and_date() {
        let mut store = TaskStore::new();
        let due = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        store.set_draft_text("Buy milk");
        store.set_draft_category(Category::Shopping);
        store.set_draft_priority(Priority::High);
        store.set_draft_due_date(Some(due));

        let id = store.add_task().unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.category, Category::Shopping);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, Some(due));

        let draft = store.draft();
        assert_eq!(draft.text, "");
        assert!(draft.due_date.is_none());
        assert_eq!(draft.category, Category::Shopping);
        assert_eq!(draft.priority, Priority::High);
    }

    #[test]
    fn test_same_text_twice_creates_distinct_tasks() {
        let (store, ids) = store_with(&["Call mom", "Call mom"]);

        assert_eq!(store.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert!(store.tasks().iter().all(|t| t.text == "Call mom"));
    }

    #[test]
    fn test_ids_stay_unique_after_removals() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        store.remove_task(ids[2]);
        store.set_draft_text("d");
        let new_id = store.add_task().unwrap();

        let all: HashSet<TaskId> = ids.iter().copied().chain([new_id]).collect();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_toggle_flips_only_the_target() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let before = store.tasks().to_vec();

        assert!(store.toggle_complete(ids[1]));

        assert_eq!(ids_of(&store), ids);
        assert!(store.get(ids[1]).unwrap().completed);
        assert_eq!(store.tasks()[0], before[0]);
        assert_eq!(store.tasks()[2], before[2]);
        assert_eq!(store.completed_count(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let (mut store, ids) = store_with(&["a", "b"]);
        let before = store.tasks().to_vec();

        store.toggle_complete(ids[0]);
        store.toggle_complete(ids[0]);

        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_unknown_id_leaves_list_unchanged() {
        let (mut store, _) = store_with(&["a", "b"]);
        let before = store.tasks().to_vec();
        let unknown = TaskId::new(999);

        assert!(!store.toggle_complete(unknown));
        assert!(store.remove_task(unknown).is_none());

        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_remove_preserves_order_of_remaining() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d"]);

        let removed = store.remove_task(ids[1]).unwrap();

        assert_eq!(removed.text, "b");
        assert_eq!(store.len(), 3);
        assert_eq!(ids_of(&store), vec![ids[0], ids[2], ids[3]]);
    }

    #[test]
    fn test_draft_setters_do_not_touch_the_list() {
        let (mut store, ids) = store_with(&["a"]);

        store.set_draft_text("  spaced  ");
        store.set_draft_category(Category::Work);
        store.set_draft_priority(Priority::Low);
        store.set_draft_due_date(NaiveDate::from_ymd_opt(2030, 12, 31));

        assert_eq!(ids_of(&store), ids);
        assert_eq!(store.draft().text, "  spaced  ");
        assert_eq!(store.draft().category, Category::Work);
        assert_eq!(store.draft().priority, Priority::Low);
        assert_eq!(
            store.draft().due_date,
            NaiveDate::from_ymd_opt(2030, 12, 31)
        );
    }

    #[test]
    fn test_buy_milk_lifecycle() {
        let mut store = TaskStore::new();
        store.set_draft_text("Buy milk");
        store.set_draft_category("shopping".parse().unwrap());
        store.set_draft_priority("high".parse().unwrap());
        store.set_draft_due_date(NaiveDate::from_ymd_opt(2024, 1, 1));

        let id = store.add_task().unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.get(id).unwrap().completed);

        store.toggle_complete(id);
        assert!(store.get(id).unwrap().completed);

        store.remove_task(id);
        assert!(store.is_empty());
    }
}
