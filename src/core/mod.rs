pub mod aggregator;
pub mod labels;
pub mod logic;
pub mod profile;
pub mod range;
pub mod report;

pub use aggregator::{aggregate, filter_records, summarize};
pub use labels::Language;
pub use logic::{Core, Report, ReportQuery};
pub use report::{ReportContext, ReportDocument};
