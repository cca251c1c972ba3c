// service.rs — CRUD over the store, with validation applied before mutation.
//
// Every operation is atomic: it either completes fully or returns an error
// having touched nothing. The store sits behind an async RwLock so that
// axum's concurrent handlers serialize access.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::model::{Task, TaskPatch, User, UserPatch};
use crate::store::Store;
use crate::validate;

/// Optional filters for task listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub completed: Option<bool>,
    pub owner_id: Option<u64>,
}

/// Record counts, exposed at `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub users: usize,
    pub tasks: usize,
    pub completed_tasks: usize,
}

/// The resource service. Owns its store — constructed per server instance
/// (and per test), never shared process-wide.
#[derive(Debug, Default)]
pub struct TaskService {
    store: RwLock<Store>,
}

impl TaskService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::new()),
        }
    }

    // ─── Users ───────────────────────────────────────────────────────────

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        age: Option<u32>,
    ) -> Result<User, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("name cannot be empty"));
        }
        let email = validate::validate_email_strict(email)?;
        if let Some(age) = age {
            if !validate::validate_age(age) {
                return Err(ApiError::validation("age must be between 0 and 150"));
            }
        }

        let mut store = self.store.write().await;
        let user = store
            .users
            .insert_with(|id| User {
                id,
                name: name.to_string(),
                email,
                age,
            })
            .clone();
        Ok(user)
    }

    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let store = self.store.read().await;
        store
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("user", id))
    }

    /// All users, in creation order.
    pub async fn list_users(&self) -> Vec<User> {
        self.store.read().await.users.iter().cloned().collect()
    }

    /// Apply a partial update, re-validating every changed field first.
    pub async fn update_user(&self, id: u64, patch: UserPatch) -> Result<User, ApiError> {
        // Validate the whole patch before taking the write path, so a bad
        // patch mutates nothing.
        let name = match &patch.name {
            Some(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(ApiError::validation("name cannot be empty"));
                }
                Some(name.to_string())
            }
            None => None,
        };
        let email = match &patch.email {
            Some(email) => Some(validate::validate_email_strict(email)?),
            None => None,
        };
        if let Some(age) = patch.age {
            if !validate::validate_age(age) {
                return Err(ApiError::validation("age must be between 0 and 150"));
            }
        }

        let mut store = self.store.write().await;
        let Some(user) = store.users.get_mut(id) else {
            return Err(ApiError::not_found("user", id));
        };
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(email) = email {
            user.email = email;
        }
        if let Some(age) = patch.age {
            user.age = Some(age);
        }
        Ok(user.clone())
    }

    /// Delete a user. Tasks owned by the user are removed with them.
    pub async fn delete_user(&self, id: u64) -> Result<(), ApiError> {
        let mut store = self.store.write().await;
        if store.users.remove(id).is_none() {
            return Err(ApiError::not_found("user", id));
        }
        store.tasks.remove_where(|task| task.owner_id == Some(id));
        Ok(())
    }

    // ─── Tasks ───────────────────────────────────────────────────────────

    pub async fn create_task(
        &self,
        title: &str,
        description: Option<String>,
        owner_id: Option<u64>,
    ) -> Result<Task, ApiError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ApiError::validation("title cannot be empty"));
        }

        let mut store = self.store.write().await;
        if let Some(owner) = owner_id {
            if store.users.get(owner).is_none() {
                return Err(ApiError::validation(format!(
                    "owner user {owner} does not exist"
                )));
            }
        }
        let task = store
            .tasks
            .insert_with(|id| Task {
                id,
                title: title.to_string(),
                description,
                completed: false,
                owner_id,
            })
            .clone();
        Ok(task)
    }

    pub async fn get_task(&self, id: u64) -> Result<Task, ApiError> {
        let store = self.store.read().await;
        store
            .tasks
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("task", id))
    }

    /// Tasks in creation order, optionally filtered by completion status
    /// and/or owning user.
    pub async fn list_tasks(&self, filter: TaskFilter) -> Vec<Task> {
        self.store
            .read()
            .await
            .tasks
            .iter()
            .filter(|task| filter.completed.is_none_or(|c| task.completed == c))
            .filter(|task| filter.owner_id.is_none_or(|o| task.owner_id == Some(o)))
            .cloned()
            .collect()
    }

    pub async fn update_task(&self, id: u64, patch: TaskPatch) -> Result<Task, ApiError> {
        let title = match &patch.title {
            Some(title) => {
                let title = title.trim();
                if title.is_empty() {
                    return Err(ApiError::validation("title cannot be empty"));
                }
                Some(title.to_string())
            }
            None => None,
        };

        let mut store = self.store.write().await;
        if store.tasks.get(id).is_none() {
            return Err(ApiError::not_found("task", id));
        }
        if let Some(owner) = patch.owner_id {
            if store.users.get(owner).is_none() {
                return Err(ApiError::validation(format!(
                    "owner user {owner} does not exist"
                )));
            }
        }
        let Some(task) = store.tasks.get_mut(id) else {
            return Err(ApiError::not_found("task", id));
        };
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = Some(description);
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(owner) = patch.owner_id {
            task.owner_id = Some(owner);
        }
        Ok(task.clone())
    }

    /// Mark a task completed. Idempotent.
    pub async fn complete_task(&self, id: u64) -> Result<Task, ApiError> {
        let mut store = self.store.write().await;
        let Some(task) = store.tasks.get_mut(id) else {
            return Err(ApiError::not_found("task", id));
        };
        task.completed = true;
        Ok(task.clone())
    }

    pub async fn delete_task(&self, id: u64) -> Result<(), ApiError> {
        let mut store = self.store.write().await;
        if store.tasks.remove(id).is_none() {
            return Err(ApiError::not_found("task", id));
        }
        Ok(())
    }

    pub async fn stats(&self) -> StoreStats {
        let store = self.store.read().await;
        StoreStats {
            users: store.users.len(),
            tasks: store.tasks.len(),
            completed_tasks: store.tasks.iter().filter(|t| t.completed).count(),
        }
    }
}
