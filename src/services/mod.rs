pub mod report;
pub mod resolution;

pub use report::ReportService;
pub use resolution::{ResolutionReport, ResolutionService};

#[cfg(test)]
pub(crate) mod testing;
