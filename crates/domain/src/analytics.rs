pub mod report;
pub mod tally;

pub use report::StatsReport;
pub use tally::ExtensionTally;
