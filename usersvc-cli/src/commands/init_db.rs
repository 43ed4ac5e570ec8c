//! Create the database file and `users` table, then exit

use anyhow::{Context, Result};
use clap::Parser;

use usersvc_server::UserStore;

use super::DEFAULT_DATABASE_URL;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let store = UserStore::open(&args.database_url, 1)
        .await
        .with_context(|| format!("Failed to initialise database at {}", args.database_url))?;
    store.close().await;

    println!("Database ready: {}", args.database_url);
    Ok(())
}
