use anyhow::Result;
use clap::{Parser, Subcommand};

use atelier_api::ShopApi;
use atelier_core::{
    NotificationLedger, aggregate_notifications, banner_payload, due_follow_ups, group_tasks,
    today_in, top_notification,
};

mod config;
mod render;
mod state;
mod watch;

use config::{config_path, load_config};

#[derive(Parser, Debug)]
#[command(name = "atelier", version, about = "Atelier shop desk CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the date-grouped task board
    Board,

    /// Notification digests and banners
    Notify {
        #[command(subcommand)]
        command: NotifyCommand,
    },

    /// Contact-log follow-ups due today or earlier
    Followups,

    /// List clients with their instruments and last sale
    Clients,

    /// Poll the backend and surface fresh notifications
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = 300)]
        interval_secs: u64,
    },

    /// Manage ~/.atelier/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum NotifyCommand {
    /// Print counts and the full ordered notification list
    Check {
        /// Emit the digest as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the top-priority banner payload, honoring the dedup ledger
    Banner {
        /// Forget previously surfaced notifications first
        #[arg(long, default_value_t = false)]
        reset_ledger: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,

    /// Show the active config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config()?;

    match cli.command {
        Command::Board => {
            let api = ShopApi::new(&cfg.api.base_url, &cfg.api.api_key)?;
            let today = today_in(cfg.shop_tz()?);
            let window = cfg.notify.upcoming_window_days;
            let tasks = api.list_tasks().await?;
            let groups = group_tasks(&tasks, today, window);
            render::print_board(&groups, today, window);
        }

        Command::Notify { command } => match command {
            NotifyCommand::Check { json } => {
                let api = ShopApi::new(&cfg.api.base_url, &cfg.api.api_key)?;
                let today = today_in(cfg.shop_tz()?);
                let tasks = api.list_tasks().await?;
                let digest =
                    aggregate_notifications(&tasks, today, cfg.notify.upcoming_window_days);
                if json {
                    println!("{}", serde_json::to_string_pretty(&digest)?);
                } else {
                    render::print_digest(&digest);
                }
            }

            NotifyCommand::Banner { reset_ledger } => {
                if reset_ledger {
                    state::clear_ledger()?;
                }
                let api = ShopApi::new(&cfg.api.base_url, &cfg.api.api_key)?;
                let today = today_in(cfg.shop_tz()?);
                let tasks = api.list_tasks().await?;
                let digest =
                    aggregate_notifications(&tasks, today, cfg.notify.upcoming_window_days);

                let mut ledger = state::load_ledger()?;
                let fresh = digest
                    .notifications
                    .iter()
                    .filter(|n| !ledger.already_sent(&n.task_id))
                    .cloned()
                    .collect::<Vec<_>>();
                let trimmed = atelier_core::NotificationDigest {
                    counts: digest.counts,
                    notifications: fresh,
                };

                match top_notification(&trimmed) {
                    Some(n) => {
                        let p = banner_payload(n);
                        ledger.mark_sent(&n.task_id);
                        state::save_ledger(&ledger)?;
                        println!("{}", serde_json::to_string_pretty(&p)?);
                    }
                    None => println!("Nothing new to surface."),
                }
            }
        },

        Command::Followups => {
            let api = ShopApi::new(&cfg.api.base_url, &cfg.api.api_key)?;
            let today = today_in(cfg.shop_tz()?);
            let logs = api.list_contact_logs().await?;
            let due = due_follow_ups(&logs, today);
            render::print_follow_ups(&due);
        }

        Command::Clients => {
            let api = ShopApi::new(&cfg.api.base_url, &cfg.api.api_key)?;
            let clients = api.list_clients().await?;
            let connections = api.list_connections().await?;
            let sales = api.list_sales().await?;
            render::print_clients(&clients, &connections, &sales);
        }

        Command::Watch { interval_secs } => {
            watch::run_watch(&cfg, interval_secs).await?;
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("Config: {}", config_path()?.display());
                println!("  api.base_url = {}", cfg.api.base_url);
                println!(
                    "  api.api_key = {}",
                    if cfg.api.api_key.is_empty() {
                        "<not set>"
                    } else {
                        "<set>"
                    }
                );
                println!("  shop.timezone = {}", cfg.shop.timezone);
                println!(
                    "  notify.upcoming_window_days = {}",
                    cfg.notify.upcoming_window_days
                );
            }
        },
    }

    Ok(())
}
