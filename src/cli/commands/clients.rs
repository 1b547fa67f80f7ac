use crate::cli::commands::common::authenticated;
use crate::config::Config;
use crate::core::aggregator::unique_clients;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_session, data) = authenticated(cfg)?;
    let clients = unique_clients(&data.records);

    if clients.is_empty() {
        info("No client tags found.");
        return Ok(());
    }

    header("Clients");
    for c in clients {
        println!("- {c}");
    }
    Ok(())
}
