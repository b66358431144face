use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};
use std::env;

use crate::entities::{cause, Cause};

/// Connect to the database named by `DATABASE_URL`, defaulting to a local
/// SQLite file for development. Called once at startup; the handle is passed
/// to the router as shared state rather than held in a global.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:./donations.db?mode=rwc".to_string());
    Database::connect(&db_url).await
}

/// Bring the schema up to date and seed sample causes if the table is empty.
pub async fn init_db(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    seed_causes(db).await?;
    tracing::info!("database tables checked/created");
    Ok(())
}

async fn seed_causes(db: &DatabaseConnection) -> Result<(), DbErr> {
    if Cause::find().count(db).await? > 0 {
        return Ok(());
    }

    let samples = [
        (
            "Educate a Child",
            "Provide access to quality education for underprivileged children, empowering them for a brighter future.",
            "https://images.unsplash.com/photo-1593113646773-028c64a8f1b8?auto=format&fit=crop&w=1470&q=80",
            10000.0,
            7500.0,
        ),
        (
            "Protect Our Planet",
            "Support initiatives focused on reforestation, wildlife conservation, and combating climate change.",
            "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?auto=format&fit=crop&w=1574&q=80",
            20000.0,
            12000.0,
        ),
        (
            "Clean Water for All",
            "Help provide access to clean and safe drinking water for communities in need around the world.",
            "https://images.unsplash.com/photo-1518398046578-8CCA57782e36?auto=format&fit=crop&w=1470&q=80",
            5000.0,
            4500.0,
        ),
    ];

    for (title, description, image, goal_amount, raised_amount) in samples {
        cause::ActiveModel {
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            image: Set(Some(image.to_string())),
            goal_amount: Set(goal_amount),
            raised_amount: Set(raised_amount),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::info!("sample causes seeded");
    Ok(())
}
