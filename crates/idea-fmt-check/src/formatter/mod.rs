mod args;
mod invoke;
mod report;

pub use args::*;
pub use invoke::*;
pub use report::*;
