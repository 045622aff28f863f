use sqlx::AnyPool;

pub async fn create_time_log_table(db: &AnyPool) -> Result<(), sqlx::Error> {
    let mut conn = db.acquire().await?;

    // MySQL and SQLite spell auto-increment differently
    let statement = if conn.backend_name() == "MySQL" {
        "CREATE TABLE IF NOT EXISTS time_log (
            id INT AUTO_INCREMENT PRIMARY KEY,
            timestamp DATETIME NOT NULL
        )"
    } else {
        "CREATE TABLE IF NOT EXISTS time_log (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp DATETIME NOT NULL
        )"
    };

    sqlx::query(statement).execute(&mut *conn).await?;

    Ok(())
}
