use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::sample_dataset;
use crate::ui::messages::{info, success};
use tracing::info as trace_info;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file, with default values
///  - the data file, seeded with sample employees and records
///
/// `cfg` only decides where the data file goes: `--data`/`--session`
/// overrides are never written to the configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let conf_path = Config::config_file();
        if !conf_path.exists() || *force {
            Config::default().save()?;
            success(format!("Config file: {}", conf_path.display()));
        } else {
            info(format!("Config file kept: {}", conf_path.display()));
        }

        let data_path = cfg.data_path();
        if data_path.exists() && !*force {
            info(format!("Data file kept: {}", data_path.display()));
        } else {
            let data = sample_dataset();
            data.save(&data_path)?;
            trace_info!(path = %data_path.display(), records = data.records.len(), "sample data written");
            success(format!(
                "Data file:   {} ({} employees, {} records)",
                data_path.display(),
                data.employees.len(),
                data.records.len()
            ));
        }

        success("timetracker initialization completed!");
    }
    Ok(())
}
