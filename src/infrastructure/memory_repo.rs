use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    repository::TodoRepository,
    todo::{Todo, TodoId, UpdateTodo},
};

#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self { Self::default() }

    pub fn with_sample_data() -> Self {
        Self { items: Arc::new(RwLock::new(sample_todos())) }
    }
}

fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new("1", "Buy groceries", false, "Milk, Bread, Eggs"),
        Todo::new("2", "Read book", true, "The Go Programming Language"),
        Todo::new("3", "Exercise", false, "30 minutes of running"),
    ]
}

fn position(items: &[Todo], id: &TodoId) -> Option<usize> {
    items.iter().position(|t| &t.id == id)
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn init(&self) -> Result<()> {
        let count = self.items.read().await.len();
        tracing::debug!(count, "in-memory store ready");
        Ok(())
    }

    async fn create(&self, todo: Todo) -> Result<bool> {
        let mut items = self.items.write().await;
        if position(&items, &todo.id).is_some() { return Ok(false); }
        items.push(todo);
        Ok(true)
    }

    async fn get(&self, id: &TodoId) -> Result<Option<Todo>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|t| &t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Todo>> {
        Ok(self.items.read().await.clone())
    }

    async fn update(&self, id: &TodoId, input: UpdateTodo) -> Result<Option<Todo>> {
        let mut items = self.items.write().await;
        let Some(todo) = items.iter_mut().find(|t| &t.id == id) else { return Ok(None) };
        input.apply_to(todo);
        Ok(Some(todo.clone()))
    }

    async fn delete(&self, id: &TodoId) -> Result<bool> {
        let mut items = self.items.write().await;
        match position(&items, id) {
            Some(idx) => {
                items.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
