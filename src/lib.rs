pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod report;
pub mod util;
