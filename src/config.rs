use crate::history::DEFAULT_CAPACITY;
use crate::session::DEFAULT_PROMPT;
use argh::FromArgs;

#[derive(FromArgs, Debug, Clone, PartialEq, Eq)]
/// A minimal interactive command interpreter.
/// Type program names and arguments, and hit enter.
pub struct Config {
    #[argh(option, default = "String::from(DEFAULT_PROMPT)")]
    /// text shown before each line is read.
    pub prompt: String,

    #[argh(option, default = "DEFAULT_CAPACITY", from_str_fn(parse_capacity))]
    /// number of lines kept for `history`; the oldest is dropped when full.
    pub history_capacity: usize,

    #[argh(switch, short = 'v')]
    /// print debug logs to standard error.
    pub verbose: bool,
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("history capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid history capacity '{value}': {e}")),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            history_capacity: DEFAULT_CAPACITY,
            verbose: false,
        }
    }
}
