use crate::domain::error::{TodoError, TodoResult};
use crate::domain::repository::TodoRepository;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo>;
    async fn get(&self, id: TodoId) -> TodoResult<Todo>;
    async fn list(&self) -> TodoResult<Vec<Todo>>;
    async fn update(&self, id: TodoId, input: UpdateTodo) -> TodoResult<Todo>;
    async fn delete(&self, id: TodoId) -> TodoResult<()>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: CreateTodo) -> TodoResult<Todo> {
        if input.id.is_empty() {
            tracing::debug!("rejecting create with empty id");
            return Err(TodoError::invalid("id must not be empty"));
        }
        let todo = Todo::from(input);
        if !self.repo.create(todo.clone()).await? {
            tracing::debug!(id = %todo.id, "rejecting create with duplicate id");
            return Err(TodoError::Conflict(todo.id));
        }
        tracing::info!(id = %todo.id, "todo created");
        Ok(todo)
    }

    async fn get(&self, id: TodoId) -> TodoResult<Todo> {
        match self.repo.get(&id).await? {
            Some(todo) => Ok(todo),
            None => Err(TodoError::NotFound(id)),
        }
    }

    async fn list(&self) -> TodoResult<Vec<Todo>> {
        let todos = self.repo.list().await?;
        tracing::debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    async fn update(&self, id: TodoId, input: UpdateTodo) -> TodoResult<Todo> {
        let Some(todo) = self.repo.update(&id, input).await? else {
            return Err(TodoError::NotFound(id));
        };
        tracing::info!(id = %todo.id, done = todo.done, "todo updated");
        Ok(todo)
    }

    async fn delete(&self, id: TodoId) -> TodoResult<()> {
        if !self.repo.delete(&id).await? {
            return Err(TodoError::NotFound(id));
        }
        tracing::info!(%id, "todo deleted");
        Ok(())
    }
}
