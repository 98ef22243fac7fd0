pub mod config;
pub mod errors;
pub mod report;

pub mod trapezoidal;
pub mod romberg;
