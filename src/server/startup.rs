use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        notification::NotificationDispatcher, settings::AdminUserService,
        user_directory::HttpUserDirectory,
    },
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request
/// is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the push gateway and user service clients, each with its own timeout.
pub fn setup_clients(
    config: &Config,
) -> Result<(NotificationDispatcher, HttpUserDirectory), AppError> {
    let dispatcher = NotificationDispatcher::new(&config.push_service_url, config.push_timeout)?;
    let directory =
        HttpUserDirectory::new(&config.user_service_url, config.user_service_timeout)?;

    Ok((dispatcher, directory))
}

/// Creates the super admin account if the database has no admin user yet.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    AdminUserService::new(db)
        .ensure_super_admin(config.super_admin.as_ref())
        .await?;

    Ok(())
}
