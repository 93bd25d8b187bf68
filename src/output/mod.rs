//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::ReportFormatter;
pub use report::AnalysisReport;
