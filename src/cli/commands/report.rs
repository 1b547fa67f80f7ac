use crate::cli::commands::common::{authenticated, language, report_query};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, Report};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_punctuality, color_for_status, colorize_optional};
use crate::utils::date;
use crate::utils::table::Table;

const STATUS_COL: usize = 5;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { filters } = cmd {
        let (session, data) = authenticated(cfg)?;
        let query = report_query(filters, cfg, &session)?;
        let lang = language(filters, cfg);

        let report = Core::build_report(&data, &query, date::today(), lang)?;
        print_report(&report, lang.labels().no_records);
    }
    Ok(())
}

fn print_report(report: &Report, empty_msg: &str) {
    let doc = &report.document;

    header(&doc.title);
    for f in &doc.filters {
        println!("{f}");
    }

    header(&doc.summary_title);
    let punct_color = color_for_punctuality(report.summary.punctuality_percent);
    for (i, s) in doc.summary.iter().enumerate() {
        // third line is punctuality
        if i == 2 {
            println!("- {}: {punct_color}{}{RESET}", s.label, s.value);
        } else {
            println!("- {}: {}", s.label, s.value);
        }
    }

    header(&doc.details_title);
    if doc.rows.is_empty() {
        info(empty_msg);
        return;
    }

    let mut table = Table::new(doc.columns.clone());
    for row in &doc.rows {
        table.add_row(row.cells());
    }

    let rendered = table.render_with(|r, c, cell| {
        if c == STATUS_COL {
            let status = report.records[r].status();
            format!("{}{cell}{RESET}", color_for_status(status))
        } else {
            colorize_optional(cell)
        }
    });
    print!("{rendered}");
}
