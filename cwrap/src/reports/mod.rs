//! Report rendering for command output.

mod output;
mod pair;

pub use output::{Output, Report, TerminalOutput};
pub use pair::PairReport;
