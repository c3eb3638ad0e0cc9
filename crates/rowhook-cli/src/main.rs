//! rowhook — one-shot function-to-trigger synchronization.
//!
//! Reconciles a manifest of deployed functions with PostgreSQL
//! row-change triggers so that every registered function is invoked
//! over HTTP when a matching table event occurs.
//!
//! # Usage
//!
//! ```text
//! rowhook sync --manifest functions.json \
//!     --base-url https://api.example.com --api-key s3cr3t
//! ```
//!
//! The PostgreSQL connection string comes from the
//! `POSTGRESQL_CONNECTION_URL` environment variable; a `.env` file in
//! the working directory is honored.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "rowhook",
    about = "rowhook — wires deployed functions to database row triggers",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synchronize row-change triggers with the function manifest.
    Sync {
        /// Path to the function manifest JSON.
        #[arg(short, long, default_value = "functions.json")]
        manifest: PathBuf,

        /// Base URL the function endpoints hang off.
        #[arg(long)]
        base_url: String,

        /// Shared secret sent in the x-api-key header of every trigger call.
        #[arg(long)]
        api_key: String,

        /// Comma-separated function names to restrict the run to.
        #[arg(long)]
        functions: Option<String>,

        /// Plan and print the SQL without touching the database.
        #[arg(long)]
        dry_run: bool,

        /// Output format for the resulting route map: text or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,rowhook_sync=debug,rowhook_registry=debug"
                    .parse()
                    .unwrap()
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sync {
            manifest,
            base_url,
            api_key,
            functions,
            dry_run,
            format,
        } => {
            commands::sync::sync(commands::sync::SyncArgs {
                manifest,
                base_url,
                api_key,
                functions,
                dry_run,
                format,
            })
            .await
        }
    }
}
