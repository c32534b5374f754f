use crate::config::Config;
use crate::history::History;

/// Prompt shown until the user changes it with `prompt`.
pub const DEFAULT_PROMPT: &str = "lsh>";

/// Mutable state of one interactive session, visible to every builtin.
///
/// The session contains:
/// - `prompt`: text displayed (followed by a space) before each read.
/// - `history`: raw lines entered so far, for listing and replay.
/// - `replay_depth`: how many `history N` replays are currently nested.
#[derive(Debug, Clone)]
pub struct Session {
    pub prompt: String,
    pub history: History,
    pub replay_depth: usize,
}

impl Session {
    /// Creates a session with the default prompt and history capacity.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a session using the prompt and history capacity from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            prompt: config.prompt.clone(),
            history: History::with_capacity(config.history_capacity),
            replay_depth: 0,
        }
    }

    /// Replaces the prompt with a copy of `prompt`.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt.clear();
        self.prompt.push_str(prompt);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
