pub use sea_orm::DatabaseConnection;

/// Connects to the backing store. The returned handle is created once at
/// process start and passed explicitly to every component; there are no
/// ambient globals.
pub async fn init_database(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = sea_orm::Database::connect(database_url).await?;
    tracing::info!("Database connected successfully");
    Ok(db)
}
