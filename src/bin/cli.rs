//! pknulms CLI
//!
//! Reads the activity feed, fetches notification content and sends notes
//! from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use pknulms::error::{LmsError, Result};
use pknulms::{Config, LmsClient};

/// pknulms - PKNU LMS portal client
#[derive(Parser, Debug)]
#[command(name = "pknulms", version, about = "PKNU LMS portal client")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "pknulms.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct Credentials {
    /// Portal user id
    #[arg(long, env = "LMS_ID")]
    id: String,

    /// Portal password
    #[arg(long, env = "LMS_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List notifications as JSON
    List {
        #[command(flatten)]
        credentials: Credentials,

        /// 1-based page (ignored when --start is given)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// 1-based offset into the feed
        #[arg(long, requires = "count")]
        start: Option<u32>,

        /// Number of entries to fetch (at least 8)
        #[arg(long)]
        count: Option<u32>,
    },

    /// Print the content of one notification
    Content {
        #[command(flatten)]
        credentials: Credentials,

        /// Page containing the notification
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// 0-based position within the page
        #[arg(long)]
        index: usize,
    },

    /// Send a note to another user
    Send {
        #[command(flatten)]
        credentials: Credentials,

        /// Recipient user id
        #[arg(long)]
        to: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging from the configured level or the verbosity flag.
fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Build a client and log in with `credentials`.
async fn connect(config: &Arc<Config>, credentials: &Credentials) -> Result<LmsClient> {
    let client = LmsClient::new(Arc::clone(config))?;
    client
        .require_login(&credentials.id, &credentials.password)
        .await?;
    Ok(client)
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config);
    init_logging(&config.logging.level, cli.verbose);

    let config = Arc::new(config);

    match cli.command {
        Command::List {
            credentials,
            page,
            start,
            count,
        } => {
            let client = connect(&config, &credentials).await?;
            let notifications = match (start, count) {
                (Some(start), Some(count)) => client.get_notifications(start, count).await,
                (None, Some(count)) => client.get_notifications(1, count).await,
                _ => client.get_notifications_by_page(page).await,
            };
            let outcome = notifications.and_then(|list| {
                log::info!("Fetched {} notifications", list.len());
                Ok(serde_json::to_string_pretty(&list)?)
            });
            client.logout().await?;
            println!("{}", outcome?);
        }

        Command::Content {
            credentials,
            page,
            index,
        } => {
            let client = connect(&config, &credentials).await?;
            let outcome: Result<String> = async {
                let notifications = client.get_notifications_by_page(page).await?;
                let notification = notifications.get(index).ok_or_else(|| {
                    LmsError::precondition(format!(
                        "page {} has {} notifications, index {} is out of range",
                        page,
                        notifications.len(),
                        index
                    ))
                })?;

                log::info!("Fetching content of {}", notification);
                client.get_notification_content(notification).await
            }
            .await;
            client.logout().await?;
            println!("{}", outcome?);
        }

        Command::Send {
            credentials,
            to,
            title,
            content,
        } => {
            let client = connect(&config, &credentials).await?;
            let outcome = client.send_note(&to, &title, &content).await;
            client.logout().await?;
            outcome?;
            log::info!("Done!");
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
