use crate::auth::access::ensure_can_view_employee;
use crate::cli::commands::common::{authenticated, range_query};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::profile::{EmployeeProfile, build_profile};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, header};
use crate::utils::date;
use crate::utils::formatting::{minutes_to_hm, percent};

const W: usize = 18;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { id, range } = cmd {
        let (session, data) = authenticated(cfg)?;
        ensure_can_view_employee(&session, id)?;

        let employee = data
            .employee(id)
            .ok_or_else(|| AppError::EmployeeNotFound(id.clone()))?;

        let window = range_query(range, cfg)?.resolve_range(date::today())?;
        let profile = build_profile(employee, &data.records, window);

        print_profile(&profile);
    }
    Ok(())
}

fn print_profile(p: &EmployeeProfile) {
    let e = &p.employee;

    header(format!("{} ({})", e.name, e.id));
    field("Email", &e.email, W);
    if let Some(phone) = &e.phone {
        field("Phone", phone, W);
    }
    field("Department", &e.department, W);
    field("Position", &e.position, W);
    field("Location", &e.location, W);
    field("Joined", e.join_date, W);
    field("Schedule", &e.work_schedule, W);
    if let Some(m) = &e.manager {
        field("Manager", m, W);
    }
    if !e.tags.is_empty() {
        field("Tags", e.tags.join(", "), W);
    }

    header(format!("Statistics {} → {}", p.range.start, p.range.end));
    let s = &p.summary;
    field("Hours worked", minutes_to_hm(s.total_minutes), W);
    field(
        "Days worked",
        format!("{} / {}", s.unique_days_worked, s.total_workable_days),
        W,
    );
    field("Punctuality", percent(s.punctuality_percent), W);
    field("Late arrivals", s.late_arrival_count, W);
    field("Overtime", minutes_to_hm(s.overtime_minutes), W);
    if p.principal_clients.is_empty() {
        field("Main clients", "-", W);
    } else {
        field("Main clients", p.principal_clients.join(", "), W);
    }
}
