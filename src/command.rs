use crate::interpreter::Dispatcher;
use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Outcome of a dispatched line.
///
/// This only decides whether the read-eval loop keeps going. It is not the
/// exit code of an external program; those are never surfaced to the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Leave the read-eval loop.
    Terminate,
}

/// Everything a builtin may touch while it runs.
///
/// The session is lent mutably for the duration of one invocation, and the
/// dispatcher is reachable so that a builtin can run another line through
/// the same pipeline (see the `history` builtin).
pub struct Context<'a> {
    pub session: &'a mut Session,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
    dispatcher: &'a Dispatcher,
}

impl<'a> Context<'a> {
    pub fn new(
        session: &'a mut Session,
        dispatcher: &'a Dispatcher,
        stdout: &'a mut dyn Write,
        stderr: &'a mut dyn Write,
    ) -> Self {
        Self {
            session,
            stdout,
            stderr,
            dispatcher,
        }
    }

    /// Dispatches already tokenized input as if it had just been typed.
    pub fn dispatch(&mut self, tokens: &[&str]) -> Flow {
        let dispatcher = self.dispatcher;
        dispatcher.execute(tokens, self)
    }

    /// The builtin table in lookup order.
    pub fn builtins(&self) -> &'a [Box<dyn Builtin>] {
        self.dispatcher.builtins()
    }
}

/// A command implemented inside the interpreter process.
///
/// Errors returned from [`Builtin::invoke`] are printed to standard error by
/// the dispatcher and the loop continues.
pub trait Builtin {
    /// Name the command is looked up by. Matching is exact and case-sensitive.
    fn name(&self) -> &'static str;

    /// One-line description shown by `help`.
    fn help(&self) -> &'static str;

    /// Runs the command. `args[0]` is the command name itself.
    fn invoke(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<Flow>;
}

/// Runs a command that is not a builtin.
///
/// Implementations block until the program has finished. A failure to start
/// the program is returned as an error; the program's own exit status is not.
pub trait Launcher {
    fn launch(&self, argv: &[&str]) -> Result<()>;
}
