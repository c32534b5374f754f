use crate::builtin::default_builtins;
use crate::command::{Builtin, Context, Flow, Launcher};
use crate::config::Config;
use crate::external::ProcessLauncher;
use crate::io_adapters::{LineSource, ReadOutcome};
use crate::lexer::split_line;
use crate::session::Session;
use std::io::Write;

/// Resolves a token list to a builtin or an external program.
///
/// Builtins are matched by exact name in table order; the first match wins.
/// Anything else goes to the [`Launcher`].
pub struct Dispatcher {
    builtins: Vec<Box<dyn Builtin>>,
    launcher: Box<dyn Launcher>,
}

impl Dispatcher {
    pub fn new(builtins: Vec<Box<dyn Builtin>>, launcher: Box<dyn Launcher>) -> Self {
        Self { builtins, launcher }
    }

    pub fn builtins(&self) -> &[Box<dyn Builtin>] {
        &self.builtins
    }

    /// Runs one tokenized line.
    ///
    /// An empty token list does nothing. Errors from builtins and launch
    /// failures are printed to `ctx.stderr` and never stop the loop; only a
    /// builtin returning [`Flow::Terminate`] does.
    pub fn execute(&self, tokens: &[&str], ctx: &mut Context<'_>) -> Flow {
        let Some(&name) = tokens.first() else {
            return Flow::Continue;
        };

        if let Some(builtin) = self.builtins.iter().find(|b| b.name() == name) {
            log::debug!("builtin {name}: {tokens:?}");
            return match builtin.invoke(tokens, ctx) {
                Ok(flow) => flow,
                Err(err) => {
                    report(ctx.stderr, &err);
                    Flow::Continue
                }
            };
        }

        // Builtin output is buffered by the caller; keep it ahead of the child's.
        if let Err(err) = ctx.stdout.flush() {
            report(ctx.stderr, &anyhow::Error::new(err).context("flushing output"));
        }
        if let Err(err) = self.launcher.launch(tokens) {
            report(ctx.stderr, &err);
        }
        Flow::Continue
    }
}

impl Default for Dispatcher {
    /// The builtin table from [`default_builtins`] and a [`ProcessLauncher`].
    fn default() -> Self {
        Self::new(default_builtins(), Box::new(ProcessLauncher))
    }
}

fn report(stderr: &mut dyn Write, err: &anyhow::Error) {
    let _ = writeln!(stderr, "lsh: {err:#}");
    let _ = stderr.flush();
}

/// Why [`Interpreter::repl`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// A builtin asked to leave (`exit`, `quit`).
    Exit,
    /// The line source ran dry.
    EndOfInput,
}

/// The read-eval loop and the session it works on.
///
/// Example
/// ```
/// use lsh::{Flow, Interpreter};
/// let mut sh = Interpreter::default();
/// let (mut out, mut err) = (Vec::<u8>::new(), Vec::<u8>::new());
/// assert_eq!(sh.execute_line("prompt $", &mut out, &mut err), Flow::Continue);
/// assert_eq!(sh.session().prompt, "$");
/// assert_eq!(sh.execute_line("quit", &mut out, &mut err), Flow::Terminate);
/// ```
pub struct Interpreter {
    session: Session,
    dispatcher: Dispatcher,
}

impl Interpreter {
    /// Create an interpreter with a custom dispatcher and a default session.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            session: Session::new(),
            dispatcher,
        }
    }

    /// Create an interpreter with the default dispatcher and a session
    /// configured from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            session: Session::from_config(config),
            dispatcher: Dispatcher::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Records `line` into history, tokenizes it and dispatches it.
    pub fn execute_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Flow {
        self.session.history.record(line);
        let tokens = split_line(line);
        log::debug!("tokens = {tokens:?}");

        let mut ctx = Context::new(&mut self.session, &self.dispatcher, stdout, stderr);
        ctx.dispatch(&tokens)
    }

    /// Reads and runs lines from `source` until a builtin terminates the
    /// loop or input ends.
    ///
    /// The prompt is shown followed by a space. On end of input a newline
    /// is printed so the caller's terminal starts on a fresh line. Errors
    /// from the line source end the loop and are returned.
    pub fn repl(
        &mut self,
        source: &mut dyn LineSource,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> anyhow::Result<Stop> {
        loop {
            let prompt = format!("{} ", self.session.prompt);
            let line = match source.read_line(&prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    writeln!(stdout)?;
                    stdout.flush()?;
                    return Ok(Stop::EndOfInput);
                }
            };

            let flow = self.execute_line(&line, stdout, stderr);
            stdout.flush()?;
            if flow == Flow::Terminate {
                log::debug!("leaving after {} lines", self.session.history.next_index());
                return Ok(Stop::Exit);
            }
        }
    }
}

impl Default for Interpreter {
    /// Default prompt and history capacity, default builtins, real processes.
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}
