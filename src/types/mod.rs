pub mod config;
pub mod fields;
pub mod number;
pub mod record;
pub mod report;
pub mod scoring;
