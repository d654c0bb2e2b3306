#[cfg(feature = "postgres")]
use std::sync::Arc;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the board database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Logical database name, applied as the schema search path.
    pub database_name: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// The process-wide database handle.
///
/// Established once before serving and shared by every repository through
/// an `Arc`. Closing it closes the pool for every holder.
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    pub main: Arc<DbConn>,
}

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Connect using the given configuration. Fails if the database cannot be reached.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true);
        if let Some(name) = &config.database_name {
            opts.set_schema_search_path(name.clone());
        }

        let main = Database::connect(opts).await?;
        main.ping().await?;

        tracing::info!(
            database = config.database_name.as_deref().unwrap_or("public"),
            pool = config.max_connections,
            "Database connected"
        );

        Ok(Self::from_conn(main))
    }

    /// Wrap an already established connection.
    pub fn from_conn(conn: DbConn) -> Self {
        Self {
            main: Arc::new(conn),
        }
    }

    /// Close the pool. Repositories sharing the handle stop working.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.main.close_by_ref().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
