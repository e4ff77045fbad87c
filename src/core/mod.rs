pub mod filter;
pub mod projector;
pub mod report;

pub use report::{ReportSession, ReportWindow};
