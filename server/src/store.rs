//! In-memory todo collection.
//!
//! # Design
//! `TodoStore` owns both the ordered list and the id counter, so one lock
//! around the store covers validation, id assignment and insertion together.
//! Ids start at 1 and are never reused, even after a delete.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::{Todo, TodoCreateRequest, TodoId, TodoUpdateRequest};
use crate::validation::{validate_create, validate_patch};

pub type SharedStore = Arc<RwLock<TodoStore>>;

#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    pub fn shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn position(&self, id: TodoId) -> Result<usize, StoreError> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn create(&mut self, request: &TodoCreateRequest) -> Result<Todo, StoreError> {
        let valid = validate_create(request).map_err(StoreError::Validation)?;
        let todo = Todo {
            id: self.next_id,
            title: valid.title,
            is_complete: valid.is_complete,
            priority: valid.priority,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Snapshot of every todo in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        Ok(self.todos[index].clone())
    }

    /// Replace the whole entity, keeping its id and position.
    pub fn replace(&mut self, id: TodoId, request: &TodoCreateRequest) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        let valid = validate_create(request).map_err(StoreError::Validation)?;
        let todo = Todo {
            id,
            title: valid.title,
            is_complete: valid.is_complete,
            priority: valid.priority,
        };
        self.todos[index] = todo.clone();
        Ok(todo)
    }

    /// Merge the present fields of `request` into the stored entity.
    pub fn patch(&mut self, id: TodoId, request: &TodoUpdateRequest) -> Result<Todo, StoreError> {
        let index = self.position(id)?;
        let patch = validate_patch(request).map_err(StoreError::Validation)?;
        let todo = &mut self.todos[index];
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(is_complete) = patch.is_complete {
            todo.is_complete = is_complete;
        }
        if let Some(priority) = patch.priority {
            todo.priority = priority;
        }
        Ok(todo.clone())
    }

    pub fn delete(&mut self, id: TodoId) -> Result<(), StoreError> {
        let index = self.position(id)?;
        self.todos.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, PriorityInput};
    use crate::validation::ErrorCode;

    fn request(title: &str, priority: Priority) -> TodoCreateRequest {
        TodoCreateRequest {
            title: Some(title.to_string()),
            is_complete: false,
            priority: Some(priority.into()),
        }
    }

    fn validation_codes(err: StoreError) -> Vec<ErrorCode> {
        match err {
            StoreError::Validation(errors) => errors.into_iter().map(|e| e.code).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = TodoStore::new();
        let a = store.create(&request("Buy milk", Priority::Low)).unwrap();
        let b = store.create(&request("Walk the dog", Priority::High)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = TodoStore::new();
        let a = store.create(&request("Buy milk", Priority::Low)).unwrap();
        store.delete(a.id).unwrap();
        let b = store.create(&request("Buy bread", Priority::Low)).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn failed_create_does_not_consume_an_id() {
        let mut store = TodoStore::new();
        assert!(store.create(&request("abc", Priority::Low)).is_err());
        let todo = store.create(&request("Buy milk", Priority::Low)).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn title_is_stored_trimmed() {
        let mut store = TodoStore::new();
        let todo = store.create(&request("   Buy milk  ", Priority::Low)).unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(store.get(todo.id).unwrap().title, "Buy milk");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TodoStore::new();
        for title in ["First todo", "Second todo", "Third todo"] {
            store.create(&request(title, Priority::Mid)).unwrap();
        }
        store.delete(2).unwrap();
        let titles: Vec<_> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["First todo", "Third todo"]);
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = TodoStore::new();
        assert_eq!(store.get(9), Err(StoreError::NotFound(9)));
    }

    #[test]
    fn replace_keeps_id_and_position() {
        let mut store = TodoStore::new();
        store.create(&request("First todo", Priority::Low)).unwrap();
        store.create(&request("Second todo", Priority::Low)).unwrap();

        let mut replacement = request("  Replaced todo ", Priority::High);
        replacement.is_complete = true;
        let todo = store.replace(1, &replacement).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Replaced todo");
        assert!(todo.is_complete);
        assert_eq!(store.list()[0], todo);
    }

    #[test]
    fn replace_checks_existence_before_validation() {
        let mut store = TodoStore::new();
        let err = store.replace(3, &request("bad", Priority::Low)).unwrap_err();
        assert_eq!(err, StoreError::NotFound(3));
    }

    #[test]
    fn replace_validates_like_create() {
        let mut store = TodoStore::new();
        store.create(&request("Buy milk", Priority::Low)).unwrap();
        let err = store.replace(1, &request("", Priority::Low)).unwrap_err();
        assert_eq!(
            validation_codes(err),
            vec![ErrorCode::TitleRequired, ErrorCode::TitleTooShort]
        );
        assert_eq!(store.get(1).unwrap().title, "Buy milk");
    }

    #[test]
    fn patch_only_is_complete_keeps_other_fields() {
        let mut store = TodoStore::new();
        store.create(&request("Buy milk", Priority::Mid)).unwrap();
        let todo = store
            .patch(
                1,
                &TodoUpdateRequest {
                    is_complete: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.priority, Priority::Mid);
        assert!(todo.is_complete);
    }

    #[test]
    fn patch_rejects_blank_title_without_mutating() {
        let mut store = TodoStore::new();
        store.create(&request("Buy milk", Priority::Mid)).unwrap();
        let err = store
            .patch(
                1,
                &TodoUpdateRequest {
                    title: Some(String::new()),
                    priority: Some(PriorityInput::Name("Nope".to_string())),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(
            validation_codes(err),
            vec![
                ErrorCode::TitleEmpty,
                ErrorCode::TitleTooShort,
                ErrorCode::InvalidPriority
            ]
        );
        assert_eq!(store.get(1).unwrap().title, "Buy milk");
    }

    #[test]
    fn patch_missing_is_not_found() {
        let mut store = TodoStore::new();
        let err = store.patch(5, &TodoUpdateRequest::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound(5));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = TodoStore::new();
        store.create(&request("Buy milk", Priority::Low)).unwrap();
        store.delete(1).unwrap();
        assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
        assert_eq!(store.delete(1), Err(StoreError::NotFound(1)));
        assert!(store.is_empty());
    }
}
