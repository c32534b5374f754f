use std::collections::VecDeque;
use thiserror::Error;

/// Number of lines remembered when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 256;

/// Errors reported by the `history` builtin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// The argument to `history` is not a non-negative integer.
    #[error("invalid history index: {0}")]
    InvalidIndex(String),
    /// Nothing was recorded at this index, or it has been evicted.
    #[error("no such history entry: {0}")]
    NoSuchEntry(usize),
    /// Replays that replay other lines nested past the limit.
    #[error("history replay nested too deeply")]
    TooDeep,
}

/// Bounded log of raw input lines.
///
/// Every recorded line gets an absolute index, starting at 0 and increasing
/// by one per line. When the log is full the oldest line is dropped; the
/// indexes of the remaining lines never change.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    /// Absolute index of `entries[0]`.
    first: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` lines.
    ///
    /// A capacity of zero is bumped to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
            first: 0,
        }
    }

    /// Stores a copy of `line` and returns the index it was recorded at.
    pub fn record(&mut self, line: &str) -> usize {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
            self.first += 1;
            log::debug!("history full, evicted entry {}", self.first - 1);
        }
        self.entries.push_back(line.to_owned());
        self.next_index() - 1
    }

    /// Looks up the line recorded at absolute `index`.
    pub fn get(&self, index: usize) -> Result<&str, HistoryError> {
        index
            .checked_sub(self.first)
            .and_then(|offset| self.entries.get(offset))
            .map(String::as_str)
            .ok_or(HistoryError::NoSuchEntry(index))
    }

    /// Parses a user-supplied index and looks it up.
    pub fn lookup(&self, index: &str) -> Result<&str, HistoryError> {
        let index = index
            .parse::<usize>()
            .map_err(|_| HistoryError::InvalidIndex(index.to_owned()))?;
        self.get(index)
    }

    /// Remembered lines in insertion order, paired with their indexes.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(offset, line)| (self.first + offset, line.as_str()))
    }

    /// Number of remembered lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index the next recorded line will get.
    pub fn next_index(&self) -> usize {
        self.first + self.entries.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
