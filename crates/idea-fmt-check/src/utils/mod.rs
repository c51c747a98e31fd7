mod command;
mod file_path_utils;
mod logging;

pub use command::*;
pub use file_path_utils::*;
pub use logging::*;
