//! Shared helpers for unit tests.

use crate::command::{Context, Flow, Launcher};
use crate::interpreter::Dispatcher;
use crate::session::Session;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

/// Serializes tests that read or change the process working directory.
pub fn lock_current_dir() -> MutexGuard<'static, ()> {
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}

pub fn make_unique_temp_dir(tag: &str) -> io::Result<PathBuf> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let dir = std::env::temp_dir().join(format!("lsh_{tag}_{}_{nanos}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Launcher double that remembers argv instead of spawning anything.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub launched: Rc<RefCell<Vec<Vec<String>>>>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, argv: &[&str]) -> anyhow::Result<()> {
        self.launched
            .borrow_mut()
            .push(argv.iter().map(|s| s.to_string()).collect());
        Ok(())
    }
}

/// Default builtins with a recording launcher; returns the launch log too.
pub fn recording_dispatcher() -> (Dispatcher, Rc<RefCell<Vec<Vec<String>>>>) {
    let launcher = RecordingLauncher::default();
    let launched = launcher.launched.clone();
    let dispatcher = Dispatcher::new(crate::builtin::default_builtins(), Box::new(launcher));
    (dispatcher, launched)
}

pub struct Outcome {
    pub flow: Flow,
    pub stdout: String,
    pub stderr: String,
}

/// Dispatches `tokens` once and captures what was printed.
pub fn dispatch(dispatcher: &Dispatcher, session: &mut Session, tokens: &[&str]) -> Outcome {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let flow = {
        let mut ctx = Context::new(session, dispatcher, &mut stdout, &mut stderr);
        ctx.dispatch(tokens)
    };
    Outcome {
        flow,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    }
}
