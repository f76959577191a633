pub mod logger;
pub mod skin_analysis;
