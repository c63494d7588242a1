//! Application state shared across all request handlers.
//!
//! Every field is cheap to clone: the database handle is a pool and both HTTP
//! clients wrap a `reqwest::Client`, which is reference-counted.

use sea_orm::DatabaseConnection;

use crate::server::service::{
    notification::NotificationDispatcher, user_directory::HttpUserDirectory,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Push gateway client used after a listing status change.
    pub dispatcher: NotificationDispatcher,

    /// User service client that resolves delivery tokens.
    pub directory: HttpUserDirectory,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        dispatcher: NotificationDispatcher,
        directory: HttpUserDirectory,
    ) -> Self {
        Self {
            db,
            dispatcher,
            directory,
        }
    }
}
