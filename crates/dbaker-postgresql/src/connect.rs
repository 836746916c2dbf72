//! Connection setup.

use crate::args::ConnectionArgs;
use crate::error::PostgreSQLError;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error};

/// Connect to PostgreSQL and verify the connection with `SELECT 1`.
///
/// The connection task is spawned onto the current tokio runtime.
pub async fn connect(args: &ConnectionArgs) -> Result<Client, PostgreSQLError> {
    debug!(
        "Connecting to PostgreSQL at {}:{} (database {})",
        args.host, args.port, args.database
    );

    let (client, connection) = args.pg_config().connect(NoTls).await?;

    // Spawn the connection task
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("PostgreSQL connection error: {}", e);
        }
    });

    // Test connection
    client.simple_query("SELECT 1").await?;

    Ok(client)
}
