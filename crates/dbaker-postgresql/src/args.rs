//! CLI argument definitions for PostgreSQL connections.

use clap::Args;

/// Connection arguments shared by the `introspect` and `generate` commands.
#[derive(Args, Clone, Debug)]
pub struct ConnectionArgs {
    /// Host of the database
    #[arg(long, short = 'H', env = "DBAKER_HOST")]
    pub host: String,

    /// Port of the database
    #[arg(long, short = 'P', env = "DBAKER_PORT", default_value = "5432")]
    pub port: u16,

    /// Database to connect to
    #[arg(long, short = 'd', env = "DBAKER_DATABASE")]
    pub database: String,

    /// Database user
    #[arg(long, short = 'u', env = "DBAKER_USERNAME")]
    pub username: String,

    /// Database user's password
    #[arg(long, short = 'p', env = "DBAKER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl ConnectionArgs {
    /// Build the `tokio-postgres` configuration for these arguments.
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.username)
            .password(&self.password);
        config
    }
}
