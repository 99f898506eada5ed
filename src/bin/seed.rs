// src/bin/seed.rs
use dotenvy::dotenv;

use techrise_backend::config::Config;
use techrise_backend::database;
use techrise_backend::factories::user::create_multiple_users;
use techrise_backend::repository::PgUserRepository;
use techrise_backend::seed::{insert_users, SEED_USER_COUNT};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Error during seeding");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting seed...");

    let config = Config::from_env()?;
    if config.uses_memory_store() {
        return Err("seeding needs a PostgreSQL DATABASE_URL".into());
    }

    let db_pool = database::create_pool(&config.database_url, config.max_connections).await?;
    database::run_migrations(&db_pool).await?;

    let repository = PgUserRepository::new(db_pool.clone());
    let report = insert_users(&repository, create_multiple_users(SEED_USER_COUNT)).await?;

    tracing::info!("Successfully created {} users", report.created);
    for user in &report.sample {
        tracing::info!(
            id = user.id,
            email = %user.email,
            username = %user.username,
            is_active = user.is_active,
            "Sample user"
        );
    }

    db_pool.close().await;
    Ok(())
}
