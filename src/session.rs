use std::collections::VecDeque;

use log::{info, warn};

use crate::{
    breach::{self, BreachResult, RangeClient},
    clipboard::ClipboardSink,
    generator::{self, GeneratorConfig, Password},
    strength::{self, Strength},
};

pub use crate::error::{Error, Result};

/// How many generated passwords the history keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// The most recently generated passwords, newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<Password>,
}

impl History {
    pub fn new() -> History {
        History {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Adds a password to the front, evicting the oldest entry past the capacity.
    pub fn push(&mut self, password: Password) {
        self.entries.push_front(password);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn get(&self, index: usize) -> Option<&Password> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Password> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifies one started breach check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckTicket(u64);

/// What happened to the outcome of a breach check handed to `Session::finish_check`.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The check completed and its result is now the session's breach result.
    Completed(BreachResult),
    /// The check failed, the breach result stays unset.
    Failed(Error),
    /// The ticket was cancelled or is stale, nothing was changed.
    Discarded,
}

/// All state of one interactive session: the current password, its strength, the history of
/// generated passwords and the outcome of the last breach check.
///
/// Only one breach check may be pending at a time, starting a second one fails with
/// `Error::CheckInFlight` until the first is finished or cancelled.
#[derive(Debug)]
pub struct Session {
    config: GeneratorConfig,
    password: Option<Password>,
    strength: Option<Strength>,
    history: History,
    breach: Option<BreachResult>,
    pending: Option<CheckTicket>,
    next_ticket: u64,
}

impl Session {
    /// Starts a session and generates the first password with `config`.
    pub fn new(config: GeneratorConfig) -> Result<Session> {
        let mut session = Session {
            config,
            password: None,
            strength: None,
            history: History::new(),
            breach: None,
            pending: None,
            next_ticket: 0,
        };
        session.generate()?;

        Ok(session)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Generates a new current password. On failure nothing in the session changes.
    pub fn generate(&mut self) -> Result<&Password> {
        let password = generator::generate(&self.config)?;

        self.strength = strength::classify(password.as_str());
        self.history.push(password.clone());
        info!(
            "generated a {} character password, history holds {}",
            password.len(),
            self.history.len()
        );

        Ok(&*self.password.insert(password))
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn breach(&self) -> Option<BreachResult> {
        self.breach
    }

    pub fn is_checking(&self) -> bool {
        self.pending.is_some()
    }

    /// Marks a breach check as started and clears the previous result.
    ///
    /// Validation happens here so an empty candidate never leaves the session in the checking
    /// state.
    pub fn begin_check(&mut self, candidate: &str) -> Result<CheckTicket> {
        if candidate.is_empty() {
            return Err(Error::EmptyCandidate);
        }
        if self.pending.is_some() {
            return Err(Error::CheckInFlight);
        }

        let ticket = CheckTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.breach = None;

        Ok(ticket)
    }

    /// Records the outcome of the check identified by `ticket`.
    pub fn finish_check(
        &mut self,
        ticket: CheckTicket,
        outcome: Result<BreachResult>,
    ) -> CheckOutcome {
        if self.pending != Some(ticket) {
            info!("discarding the outcome of a cancelled breach check");
            return CheckOutcome::Discarded;
        }
        self.pending = None;

        match outcome {
            Ok(result) => {
                self.breach = Some(result);
                CheckOutcome::Completed(result)
            }
            Err(err) => {
                warn!("breach check failed: {}", err);
                CheckOutcome::Failed(err)
            }
        }
    }

    /// Forgets the pending check, its outcome will be discarded when it arrives.
    pub fn cancel_check(&mut self) {
        self.pending = None;
    }

    /// Runs a whole breach check on the calling thread.
    pub fn check_breach<C: RangeClient + ?Sized>(
        &mut self,
        client: &C,
        candidate: &str,
    ) -> Result<BreachResult> {
        let ticket = self.begin_check(candidate)?;
        let outcome = breach::check(client, candidate);

        match self.finish_check(ticket, outcome) {
            CheckOutcome::Completed(result) => Ok(result),
            CheckOutcome::Failed(err) => Err(err),
            CheckOutcome::Discarded => Err(Error::Generic("breach check was cancelled")),
        }
    }

    /// Copies the current password.
    pub fn copy_current<S: ClipboardSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let password = self.password.as_ref().ok_or(Error::NoPassword)?;
        sink.set_text(password.as_str())
    }

    /// Copies the history entry at `index`, 0 being the newest.
    pub fn copy_history<S: ClipboardSink + ?Sized>(
        &self,
        index: usize,
        sink: &mut S,
    ) -> Result<()> {
        let password = self.history.get(index).ok_or(Error::HistoryIndex(index))?;
        sink.set_text(password.as_str())
    }
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod session_tests;
