use crate::core::aggregator::aggregate;
use crate::models::{DateRange, Employee, FilterSpec, Summary, TimeRecord};
use std::collections::BTreeMap;

/// How many clients are listed as "principal" on a profile.
pub const PRINCIPAL_CLIENTS: usize = 2;

#[derive(Debug, Clone)]
pub struct EmployeeProfile {
    pub employee: Employee,
    pub range: DateRange,
    pub summary: Summary,
    pub principal_clients: Vec<String>,
}

pub fn build_profile(employee: &Employee, records: &[TimeRecord], range: DateRange) -> EmployeeProfile {
    let spec = FilterSpec::for_range(range).with_user(employee.id.clone());
    let (filtered, summary) = aggregate(records, &spec);

    EmployeeProfile {
        employee: employee.clone(),
        range,
        summary,
        principal_clients: top_clients(&filtered, PRINCIPAL_CLIENTS),
    }
}

/// Client tags ranked by worked minutes (ties by name), at most `n`.
pub fn top_clients(records: &[TimeRecord], n: usize) -> Vec<String> {
    let mut minutes: BTreeMap<&str, u64> = BTreeMap::new();
    for r in records {
        if let Some(tag) = r.client_tag.as_deref().filter(|t| !t.is_empty()) {
            *minutes.entry(tag).or_default() += r.worked_minutes();
        }
    }

    let mut ranked: Vec<(&str, u64)> = minutes.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.into_iter().take(n).map(|(t, _)| t.to_string()).collect()
}
