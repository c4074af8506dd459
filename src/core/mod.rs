pub mod aliases;
pub mod commands;
pub mod env;
pub mod state;

pub use aliases::AliasTable;
pub use env::EnvironmentTable;
pub use state::{Console, ExecutionContext};
