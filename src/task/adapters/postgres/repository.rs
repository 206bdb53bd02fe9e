//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        NewTask, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus, TaskTitle,
    },
    ports::{TaskOrder, TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::Clock;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Identifiers are generated by the adapter and timestamps are taken from
/// the injected clock. Written tasks are returned as read back from the
/// database, so timestamps carry the column precision.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository<C: Clock + Send + Sync> {
    pool: TaskPgPool,
    clock: C,
}

impl<C: Clock + Send + Sync> PostgresTaskRepository<C> {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool, clock: C) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl<C: Clock + Send + Sync> TaskRepository for PostgresTaskRepository<C> {
    async fn store(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(&task.into_task(TaskId::new(), &self.clock));

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<Task> {
        let mut updated = task.clone();
        updated.touch(&self.clock);
        let task_id = updated.id();
        let changeset = to_changeset(&updated);

        let row = self
            .run_blocking(move |connection| {
                diesel::update(tasks::table.find(task_id.into_inner()))
                    .set(&changeset)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?
            .ok_or(TaskRepositoryError::NotFound(task_id))?;

        row_to_task(row)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let affected = self
            .run_blocking(move |connection| {
                diesel::delete(tasks::table.find(id.into_inner()))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;

        if affected == 0 {
            return Err(TaskRepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn list(&self, order: TaskOrder) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let select = tasks::table.select(TaskRow::as_select());
            // PostgreSQL sorts NULL deadlines after every date in ascending order.
            let rows = match order {
                TaskOrder::Unordered => select
                    .order((tasks::created_at.asc(), tasks::id.asc()))
                    .load::<TaskRow>(connection),
                TaskOrder::DeadlineAscending => select
                    .order((tasks::deadline.asc(), tasks::created_at.asc()))
                    .load::<TaskRow>(connection),
                TaskOrder::CreatedDescending => select
                    .order((tasks::created_at.desc(), tasks::id.desc()))
                    .load::<TaskRow>(connection),
            }
            .map_err(TaskRepositoryError::persistence)?;

            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        deadline: task.deadline(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        title: task.title().as_str().to_owned(),
        description: task.description().map(str::to_owned),
        deadline: task.deadline(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title: persisted_title,
        description,
        deadline,
        status: persisted_status,
        priority: persisted_priority,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: TaskTitle::from_persisted(persisted_title),
        description,
        deadline,
        status,
        priority,
        created_at,
        updated_at,
    }))
}
