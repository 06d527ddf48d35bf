//! External command execution.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{
    display_command, execute, CommandOptions, CommandResult, CommandRunner, SystemRunner,
};
pub use mock::{MockRunner, RecordedCommand};
pub use platform::{is_ci, is_elevated};
