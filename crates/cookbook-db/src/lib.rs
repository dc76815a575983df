//! Shared plumbing for the relationship recipes.
//!
//! Every recipe runs against a fresh in-memory SQLite database: the schema is
//! created from the recipe's entity definitions at the top of `run()` and is
//! discarded with the connection. Nothing here is recipe-specific.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Open a fresh `sqlite::memory:` database.
///
/// The pool is capped at a single connection so every statement sees the same
/// in-memory database; with more connections each would get its own empty one.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    Database::connect(options).await
}

/// Create the table for `entity`, deriving columns, keys, and foreign-key
/// clauses from the entity definition.
pub async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    tracing::debug!(table = entity.table_name(), "create table");
    let backend = db.get_database_backend();
    let stmt = Schema::new(backend).create_table_from_entity(entity);
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}

/// Install the fmt subscriber. The default filter echoes every SQL statement
/// the driver executes; set `RUST_LOG` to override.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sqlx::query=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn connects_to_a_usable_database() {
        let db = super::connect().await.unwrap();
        db.execute_unprepared("CREATE TABLE scratch (id INTEGER PRIMARY KEY)")
            .await
            .unwrap();
        db.execute_unprepared("INSERT INTO scratch (id) VALUES (1)")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn schema_does_not_leak_between_connections() {
        let first = super::connect().await.unwrap();
        first
            .execute_unprepared("CREATE TABLE scratch (id INTEGER PRIMARY KEY)")
            .await
            .unwrap();

        let second = super::connect().await.unwrap();
        assert!(second
            .execute_unprepared("INSERT INTO scratch (id) VALUES (1)")
            .await
            .is_err());
    }
}
