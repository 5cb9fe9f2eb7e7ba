//! In-Memory Repository
//!
//! Process-local table with the same observable behavior as the remote one:
//! ascending ids, `is_complete` defaulting to false, and update/delete on a
//! missing id succeeding with no rows touched. Individual operations can be
//! made to fail, and every request is counted.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, NewTodo, Todo, TodoId, TodoPatch};
use super::traits::{Operation, TodoRepository};

#[derive(Default)]
struct Table {
    rows: BTreeMap<TodoId, Todo>,
    next_id: TodoId,
    failing: HashSet<Operation>,
    requests: HashMap<Operation, usize>,
}

impl Table {
    /// Count the request and fail it if injection is on
    fn begin(&mut self, op: Operation) -> DomainResult<()> {
        *self.requests.entry(op).or_insert(0) += 1;
        if self.failing.contains(&op) {
            return Err(DomainError::Internal(format!("injected {} failure", op.as_str())));
        }
        Ok(())
    }
}

pub struct InMemoryTodoRepository {
    table: Mutex<Table>,
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                ..Default::default()
            }),
        }
    }

    /// Seed with existing rows; later inserts get ids above the highest seeded one
    pub fn with_rows(rows: impl IntoIterator<Item = Todo>) -> Self {
        let mut table = Table::default();
        for row in rows {
            table.rows.insert(row.id, row);
        }
        table.next_id = table.rows.keys().next_back().map_or(1, |id| id + 1);
        Self {
            table: Mutex::new(table),
        }
    }

    /// Make `op` fail (or succeed again) on every subsequent request
    pub async fn set_failing(&self, op: Operation, failing: bool) {
        let mut table = self.table.lock().await;
        if failing {
            table.failing.insert(op);
        } else {
            table.failing.remove(&op);
        }
    }

    /// Number of `op` requests received so far, failed ones included
    pub async fn request_count(&self, op: Operation) -> usize {
        let table = self.table.lock().await;
        table.requests.get(&op).copied().unwrap_or(0)
    }

    /// Current rows, bypassing counters and failure injection
    pub async fn snapshot(&self) -> Vec<Todo> {
        let table = self.table.lock().await;
        table.rows.values().cloned().collect()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let mut table = self.table.lock().await;
        table.begin(Operation::List)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, todo: &NewTodo) -> DomainResult<Todo> {
        let mut table = self.table.lock().await;
        table.begin(Operation::Insert)?;
        let id = table.next_id;
        table.next_id += 1;
        let row = Todo::new(id, todo.task.clone());
        table.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: TodoId, patch: &TodoPatch) -> DomainResult<Vec<Todo>> {
        let mut table = self.table.lock().await;
        table.begin(Operation::Update)?;
        Ok(table
            .rows
            .get_mut(&id)
            .map(|row| {
                row.is_complete = patch.is_complete;
                vec![row.clone()]
            })
            .unwrap_or_default())
    }

    async fn delete(&self, id: TodoId) -> DomainResult<()> {
        let mut table = self.table.lock().await;
        table.begin(Operation::Delete)?;
        table.rows.remove(&id);
        Ok(())
    }
}
