// src/bin/migrate.rs
use anyhow::{Result, bail};
use restaurant_core::{config::database_url_from_env, telemetry};
use sqlx::{
    Postgres,
    migrate::{MigrateDatabase, Migrator},
    postgres::PgPoolOptions,
};
use std::env;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let direction = env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let database_url = database_url_from_env()?;

    if !Postgres::database_exists(&database_url).await? {
        tracing::info!("database does not exist; creating it");
        Postgres::create_database(&database_url).await?;
    }

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;

    match direction.as_str() {
        "up" => {
            MIGRATOR.run(&pool).await?;
            tracing::info!("migrations applied");
        }
        "down" => {
            let target = env::args()
                .nth(2)
                .map(|v| v.parse::<i64>())
                .transpose()?
                .unwrap_or(0);
            MIGRATOR.undo(&pool, target).await?;
            tracing::info!(target, "migrations reverted");
        }
        other => bail!("unknown migration direction '{other}', expected 'up' or 'down'"),
    }

    pool.close().await;
    Ok(())
}
