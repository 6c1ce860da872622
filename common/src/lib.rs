pub mod applications;
pub mod report;
