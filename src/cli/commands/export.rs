use crate::cli::commands::common::{authenticated, language, report_query};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;
use crate::utils::path::absolutize;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        format,
        file,
        force,
    } = cmd
    {
        let (session, data) = authenticated(cfg)?;
        let query = report_query(filters, cfg, &session)?;
        let today = date::today();

        let report = Core::build_report(&data, &query, today, language(filters, cfg))?;

        let path = match file {
            Some(f) => absolutize(f)?,
            None => ExportLogic::default_path(&std::env::current_dir()?, today, *format),
        };

        ExportLogic::export(&report.document, *format, &path, *force)?;
    }
    Ok(())
}
