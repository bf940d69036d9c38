pub mod exec;
pub mod group;
pub mod output;
pub mod parse;

pub use exec::exec;
pub use group::{business_days, grouped_messages, reconcile};
pub use output::{output_json, output_ndjson, output_table};
pub use parse::LogParser;
