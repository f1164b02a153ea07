//! Interactive study loop and operator line interface.

use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use log::debug;

use crate::{
    card::CardDraft,
    engine::{
        outcome::{self, ResponseCheck},
        scheduler::{self, SchedulerConfig},
    },
    store::{CardStore, StoreError},
    types::CardId,
};

/// Errors surfaced by interactive flows.
#[derive(Debug)]
pub enum SessionError {
    /// Store failure during the loop.
    Store(StoreError),
    /// Terminal I/O failure.
    Io(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Store(err) => write!(f, "store: {err}"),
            SessionError::Io(err) => write!(f, "io: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Store(err) => Some(err),
            SessionError::Io(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<io::Error> for SessionError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Line-oriented operator interface.
///
/// `Ok(None)` from [`LineInterface::prompt`] means the input stream is
/// closed. Callers treat that as a clean, immediate end of the
/// interaction, never as an error.
pub trait LineInterface {
    /// Shows `text` and reads one line, without its trailing newline.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Writes one line of feedback to the operator.
    fn notify(&mut self, text: &str) -> io::Result<()>;

    /// Yes/no question. Empty input picks `default`; anything else loops
    /// until a case-insensitive `y` or `n` arrives.
    fn confirm(&mut self, text: &str, default: bool) -> io::Result<Option<bool>> {
        let tag = if default { "[Yn]" } else { "[yN]" };
        let question = format!("{text} {tag}?");
        loop {
            let Some(line) = self.prompt(&question)? else {
                return Ok(None);
            };
            match line.to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                _ => {}
            }
        }
    }
}

/// Terminal implementation over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdioLine;

impl LineInterface for StdioLine {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{text} => ")?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            // Closed input: finish the pending prompt line.
            writeln!(stdout)?;
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn notify(&mut self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{text}")
    }
}

/// Terminal states of an interactive flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// No more cards are due today.
    Done,
    /// The operator closed the input stream.
    InputClosed,
}

/// One synchronous review session over a store.
///
/// Each iteration captures "today" exactly once and uses that same value
/// for the due-query and the reschedule.
pub struct StudySession<'a, S, L, C> {
    store: &'a mut S,
    line: &'a mut L,
    clock: C,
    config: SchedulerConfig,
}

impl<'a, S, L, C> StudySession<'a, S, L, C>
where
    S: CardStore,
    L: LineInterface,
    C: Fn() -> NaiveDate,
{
    /// Builds a session over `store` and `line`. `clock` supplies "today".
    pub fn new(store: &'a mut S, line: &'a mut L, clock: C, config: SchedulerConfig) -> Self {
        Self {
            store,
            line,
            clock,
            config,
        }
    }

    /// Reviews due cards until the pool is exhausted or input closes.
    ///
    /// A failed card under the default relapse policy stays due today and
    /// comes straight back; the drill ends only once every card has been
    /// answered (or advanced) out of the day.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        loop {
            let today = (self.clock)();
            let Some(card) = self.store.next_due(today)? else {
                self.line.notify("Done for today!")?;
                return Ok(SessionEnd::Done);
            };

            let Some(response) = self.line.prompt(&card.front)? else {
                return Ok(SessionEnd::InputClosed);
            };

            let correct = match outcome::check_response(&card.back, &response) {
                ResponseCheck::Match => {
                    self.line.notify("Correct!")?;
                    true
                }
                ResponseCheck::Mismatch => {
                    self.line.notify(&format!("Wanted: {}", card.back))?;
                    match self.line.confirm("Advance", false)? {
                        Some(advance) => advance,
                        None => return Ok(SessionEnd::InputClosed),
                    }
                }
            };

            let transition = scheduler::review(card.box_level, correct, &self.config);
            let due = scheduler::next_due(today, transition.interval_days);
            debug!(
                "card {}: box {} -> {}, due {due}",
                card.id, card.box_level, transition.box_level
            );
            self.store.update_schedule(card.id, transition.box_level, due)?;
        }
    }
}

/// Prompts for one front/back pair and inserts it at box 0.
///
/// Returns the new id, or `None` when the operator closed the input
/// before both fields were supplied (nothing is inserted in that case).
pub fn add_card<S, L>(
    store: &mut S,
    line: &mut L,
    today: NaiveDate,
    config: &SchedulerConfig,
) -> Result<Option<CardId>, SessionError>
where
    S: CardStore,
    L: LineInterface,
{
    let Some(front) = line.prompt("Front")? else {
        return Ok(None);
    };
    let Some(back) = line.prompt("Back")? else {
        return Ok(None);
    };
    let due = scheduler::initial_due(today, config);
    let id = store.insert(CardDraft { front, back }, due)?;
    Ok(Some(id))
}
