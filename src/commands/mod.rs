//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! One submodule per `cloudwatch` subcommand. Each handler takes the
//! invocation's [`CloudWatchSession`](crate::session::CloudWatchSession)
//! and reports a [`CommandOutcome`].

pub mod list;
pub mod register;
pub mod release;
pub mod retention;

pub use list::execute_list;
pub use register::execute_register;
pub use release::execute_release;
pub use retention::execute_retention;

/// What a command achieved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Completed,
    /// The command exists but has no behavior yet
    NotImplemented(&'static str),
}

impl CommandOutcome {
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Completed)
    }
}
