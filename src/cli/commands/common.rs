//! Helpers shared by the command handlers.

use crate::auth::{FileSessionStore, Session, SessionStore, resolve_user_filter};
use crate::cli::parser::{FilterArgs, RangeArgs};
use crate::config::Config;
use crate::core::range::parse_range;
use crate::core::{Language, ReportQuery};
use crate::errors::AppResult;
use crate::store::DataSet;
use crate::utils::date::{parse_date_list, parse_date_strict};

pub fn session_store(cfg: &Config) -> FileSessionStore {
    FileSessionStore::new(cfg.session_path())
}

/// Active session plus the data set; every record-reading command starts here.
pub fn authenticated(cfg: &Config) -> AppResult<(Session, DataSet)> {
    let session = session_store(cfg).require()?;
    let data = DataSet::load(&cfg.data_path())?;
    Ok((session, data))
}

pub fn language(filters: &FilterArgs, cfg: &Config) -> Language {
    filters.lang.unwrap_or(cfg.language)
}

/// Window-only query (no user / client / explicit days).
pub fn range_query(args: &RangeArgs, cfg: &Config) -> AppResult<ReportQuery> {
    Ok(ReportQuery {
        period: args.period.unwrap_or(cfg.default_period),
        from: args.from.as_deref().map(parse_date_strict).transpose()?,
        to: args.to.as_deref().map(parse_date_strict).transpose()?,
        range: args.range.as_deref().map(parse_range).transpose()?,
        ..ReportQuery::default()
    })
}

/// Full query for `report` / `export`, with the user filter checked
/// against the session's role.
pub fn report_query(filters: &FilterArgs, cfg: &Config, session: &Session) -> AppResult<ReportQuery> {
    let mut query = range_query(&filters.range, cfg)?;
    query.days = parse_date_list(&filters.days)?;
    query.user_id = resolve_user_filter(session, filters.user.as_deref())?;
    query.client = filters.client.clone().filter(|c| !c.is_empty());
    Ok(query)
}
