//! Polling loop: fetch tasks on an interval, surface fresh banners once.

use anyhow::Result;
use std::time::Duration;

use atelier_api::ShopApi;
use atelier_core::{NotificationChecker, today_in};

use crate::config::Config;
use crate::state::{load_ledger, save_ledger};

pub async fn run_watch(cfg: &Config, interval_secs: u64) -> Result<()> {
    let tz = cfg.shop_tz()?;
    let api = ShopApi::new(&cfg.api.base_url, &cfg.api.api_key)?;
    let mut checker =
        NotificationChecker::new(cfg.notify.upcoming_window_days, load_ledger()?);

    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));
    println!(
        "Watching {} every {}s (ctrl-c to stop)",
        cfg.api.base_url, interval_secs
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let today = today_in(tz);
                match api.list_tasks().await {
                    Ok(tasks) => {
                        for banner in checker.tick(&tasks, today) {
                            println!("[{}] {} | {} -> {}", banner.tag, banner.title, banner.body, banner.on_click_url);
                        }
                        save_ledger(checker.ledger())?;
                    }
                    // A failed poll is reported and the loop keeps going;
                    // the next tick retries with fresh state.
                    Err(e) => println!("poll failed: {e:#}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!("\nStopping watch.");
                save_ledger(checker.ledger())?;
                return Ok(());
            }
        }
    }
}
