use crate::cli::commands::common::range_query;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregator::{available_days, is_weekday, workable_days};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{GREY, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { range } = cmd {
        let query = range_query(range, cfg)?;
        let window = query.resolve_range(date::today())?;

        header(format!("Days {} → {}", window.start, window.end));
        for d in available_days(&window) {
            let label = d.format("%Y-%m-%d %a");
            if is_weekday(&d) {
                println!("{label}");
            } else {
                println!("{GREY}{label}{RESET}");
            }
        }
        println!("\nWorkable days: {}", workable_days(&window));
    }
    Ok(())
}
