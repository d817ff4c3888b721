pub mod git;
pub mod logger;
pub mod output;
