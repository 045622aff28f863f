pub mod api;
pub mod app;
pub mod clock;
pub mod err;
pub mod init;
pub mod time_log;

use sqlx::AnyPool;

#[derive(Clone)]
pub struct SharedState {
    pub db: AnyPool,
}
