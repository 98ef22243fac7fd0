// common helpers
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod signs;

// algorithms
pub mod regula_falsi;
