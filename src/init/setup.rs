use crate::{api, err::Error};
use sqlx::{AnyPool, Connection};

/// Connect to the database named by `database_url`, check it answers and make sure
/// `time_log` exists.
///
/// The driver is picked from the URL scheme (`mysql://` or `sqlite://`).
pub async fn setup_database(database_url: &str) -> Result<AnyPool, Error> {
    sqlx::any::install_default_drivers();

    let db = AnyPool::connect(database_url).await?;

    let mut conn = db.acquire().await?;
    conn.ping().await?;
    drop(conn);

    api::setup::create_time_log_table(&db).await?;

    Ok(db)
}
