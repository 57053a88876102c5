use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_MENU_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_menu (
        id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
        name TEXT NOT NULL,
        parent INTEGER NULL REFERENCES a001_menu(id) ON DELETE SET NULL,
        route TEXT NULL,
        "order" INTEGER NULL,
        icon TEXT NULL,
        data TEXT NULL
    );
"#;

const CREATE_MENU_ASSIGNMENT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_menu_assignment (
        role TEXT NOT NULL,
        menu_id INTEGER NOT NULL,
        PRIMARY KEY (role, menu_id)
    );
"#;

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let conn = Database::connect(&db_url).await?;

    for sql in [CREATE_MENU_TABLE, CREATE_MENU_ASSIGNMENT_TABLE] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database already initialized"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
