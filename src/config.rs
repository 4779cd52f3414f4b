use clap::Parser;

/// Server configuration from flags, falling back to environment variables.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Serve insurance policies over HTTP", long_about = None)]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "DB_URL")]
    pub database_url: String,
    /// Worker threads; actix defaults to the number of physical cores.
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

impl Config {
    pub fn bind(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

/// Fixture loader configuration.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Seed the policies table from a JSON export", long_about = None)]
pub struct Seed {
    #[arg(long, env = "DB_URL")]
    pub database_url: String,
    #[arg(long, default_value = "fixture/Insurance-Data.json")]
    pub file: std::path::PathBuf,
    /// Truncate the table before loading.
    #[arg(long)]
    pub fresh: bool,
}
