use crate::command::{Builtin, Context, Flow};
use crate::history::HistoryError;
use crate::lexer::split_line;
use anyhow::{Context as _, Result, bail};
use std::env;
use std::io::Write;

/// How many `history N` replays may be nested inside each other.
///
/// A stored line can replay another stored line, so entries can form a
/// cycle (`2: history 3`, `3: history 2`).
pub const MAX_REPLAY_DEPTH: usize = 64;

/// The builtin table, in lookup and `help` order.
pub fn default_builtins() -> Vec<Box<dyn Builtin>> {
    vec![
        Box::new(Cd),
        Box::new(Help),
        Box::new(Exit::named("exit", "exits the shell")),
        Box::new(Exit::named("quit", "alias of exit")),
        Box::new(Prompt),
        Box::new(History),
    ]
}

/// Change the process working directory to `args[1]`.
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn help(&self) -> &'static str {
        "changes directory"
    }

    fn invoke(&self, args: &[&str], _ctx: &mut Context<'_>) -> Result<Flow> {
        let Some(target) = args.get(1) else {
            bail!("expected argument to \"cd\"");
        };
        env::set_current_dir(target).with_context(|| format!("cd: {target}"))?;
        log::debug!("working directory is now {target}");
        Ok(Flow::Continue)
    }
}

/// Print a banner and every builtin with its description.
pub struct Help;

impl Builtin for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn help(&self) -> &'static str {
        "displays this help text"
    }

    fn invoke(&self, _args: &[&str], ctx: &mut Context<'_>) -> Result<Flow> {
        writeln!(ctx.stdout, "LSH, a minimal command interpreter")?;
        writeln!(ctx.stdout, "Type program names and arguments, and hit enter.")?;
        writeln!(ctx.stdout, "The following are built in:")?;
        for builtin in ctx.builtins() {
            writeln!(ctx.stdout, "\t{}: {}", builtin.name(), builtin.help())?;
        }
        writeln!(ctx.stdout, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

/// Leave the read-eval loop. Arguments are ignored.
///
/// Registered once per name so that `exit` and `quit` share the behavior
/// but keep their own help text.
pub struct Exit {
    name: &'static str,
    help: &'static str,
}

impl Exit {
    pub fn named(name: &'static str, help: &'static str) -> Self {
        Self { name, help }
    }
}

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        self.name
    }

    fn help(&self) -> &'static str {
        self.help
    }

    fn invoke(&self, _args: &[&str], _ctx: &mut Context<'_>) -> Result<Flow> {
        Ok(Flow::Terminate)
    }
}

/// Replace the session prompt with `args[1]`.
pub struct Prompt;

impl Builtin for Prompt {
    fn name(&self) -> &'static str {
        "prompt"
    }

    fn help(&self) -> &'static str {
        "changes the prompt"
    }

    fn invoke(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<Flow> {
        let Some(prompt) = args.get(1) else {
            bail!("expected argument for prompt");
        };
        ctx.session.set_prompt(prompt);
        Ok(Flow::Continue)
    }
}

/// `history` lists the recorded lines; `history N` runs line N again.
///
/// A replayed line goes through the same tokenize and dispatch path as
/// fresh input, so builtins and external programs replay alike. The
/// replayed line is not recorded a second time.
pub struct History;

impl Builtin for History {
    fn name(&self) -> &'static str {
        "history"
    }

    fn help(&self) -> &'static str {
        "displays, or runs specified index"
    }

    fn invoke(&self, args: &[&str], ctx: &mut Context<'_>) -> Result<Flow> {
        match args {
            [_] => {
                for (index, line) in ctx.session.history.iter() {
                    writeln!(ctx.stdout, "{index}: {line}")?;
                }
                Ok(Flow::Continue)
            }
            [_, index] => {
                if ctx.session.replay_depth >= MAX_REPLAY_DEPTH {
                    return Err(HistoryError::TooDeep.into());
                }
                let line = ctx.session.history.lookup(index)?.to_owned();
                let tokens = split_line(&line);
                log::debug!("replaying entry {index}: {tokens:?}");

                ctx.session.replay_depth += 1;
                let flow = ctx.dispatch(&tokens);
                ctx.session.replay_depth -= 1;
                Ok(flow)
            }
            _ => bail!("too many arguments"),
        }
    }
}
