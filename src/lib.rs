//! A tiny interactive command interpreter.
//!
//! Lines are split on whitespace; the first word names either a builtin
//! implemented in Rust (`cd`, `help`, `exit`, `quit`, `prompt`, `history`) or
//! an external program that is launched and waited for. Every line is kept in
//! a bounded history so it can be listed and replayed with `history N`.
//!
//! The main entry point is [`Interpreter`]. The public module [`command`]
//! exposes the [`Builtin`] and [`Launcher`] traits for plugging in your own
//! commands or process handling through a [`Dispatcher`].

mod builtin;
pub mod command;
pub mod config;
mod external;
pub mod history;
mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod logging;
pub mod session;
#[cfg(test)]
mod test_support;

pub use builtin::{MAX_REPLAY_DEPTH, default_builtins};
pub use command::{Builtin, Context, Flow, Launcher};
pub use config::Config;
pub use external::{ProcessLauncher, find_command_path};
/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Dispatcher, Interpreter, Stop};
pub use session::Session;
