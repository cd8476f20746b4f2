use anyhow::Context;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

/// `employee_id` and `department` use a NO PAD binary collation: comparisons are exact,
/// so `'E001 '` and `'e001'` never match `'E001'`. Requires MySQL 8.0.
/// Timestamps are `DATETIME(6)` holding UTC written by the application.
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        employee_id VARCHAR(50) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin NOT NULL,
        full_name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        department VARCHAR(100) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin NOT NULL,
        created_at DATETIME(6) NOT NULL,
        UNIQUE KEY uq_employees_employee_id (employee_id)
    ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
        employee_id VARCHAR(50) CHARACTER SET utf8mb4 COLLATE utf8mb4_0900_bin NOT NULL,
        date DATE NOT NULL,
        status VARCHAR(20) NOT NULL,
        created_at DATETIME(6) NOT NULL,
        KEY idx_attendance_employee_date (employee_id, date),
        CONSTRAINT fk_attendance_employee
            FOREIGN KEY (employee_id) REFERENCES employees (employee_id)
            ON DELETE CASCADE
    ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
    "#,
];

pub async fn init_db(database_url: &str, max_connections: u32) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .context("Failed to create schema")?;
    }

    info!(max_connections, "Database ready");
    Ok(pool)
}
