//! The calendar state machine.
//!
//! A controller lives for one page load: it captures today's [`DateKey`] once,
//! projects the store into a [`View`] and runs the user-triggered operations.
//! Gift opening moves through `Closed -> Opening -> Opened | Error`.

use crate::date_key::DateKey;
use crate::errors::CalendarError;
use crate::pool::{EXHAUSTED_MESSAGE, SentenceSource};
use crate::reveal::{
    RevealState, clear_reveal, load_used_indices, save_reveal, save_used_indices,
};
use crate::store::KeyValueStore;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::{error, info, warn};

pub const STATUS_OPENING: &str = "Opening...";
pub const STATUS_OPENED: &str = "See you tomorrow!";
pub const STATUS_ERROR: &str = "Error!";
pub const ALERT_OPEN_FAILED: &str = "Oops! Something went wrong. Please try again.";
pub const ALERT_NOT_OPENED_TODAY: &str = "You haven't opened a gift today yet!";
pub const ALERT_NOTHING_USED: &str = "No gifts opened yet.";
pub const ALERT_USED_UNAVAILABLE: &str = "Could not load sentences.";
pub const VIBRATE_MS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Closed,
    Opening,
    Opened,
    Error,
}

/// What the page shows for the current controller state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub phase: Phase,
    pub date_key: String,
    pub status: String,
    pub message: Option<String>,
    pub trigger_enabled: bool,
    /// Whether a click on the trigger starts opening a gift.
    pub trigger_armed: bool,
    pub done_style: bool,
    pub alert: Option<String>,
    /// Best-effort haptic pulse; the page ignores it without `navigator.vibrate`.
    pub vibrate_ms: Option<u32>,
}

impl View {
    fn closed(today: &DateKey) -> Self {
        Self {
            phase: Phase::Closed,
            date_key: today.to_string(),
            status: today.to_string(),
            message: None,
            trigger_enabled: true,
            trigger_armed: true,
            done_style: false,
            alert: None,
            vibrate_ms: None,
        }
    }

    fn opening(today: &DateKey) -> Self {
        Self {
            phase: Phase::Opening,
            status: STATUS_OPENING.to_string(),
            trigger_enabled: false,
            ..Self::closed(today)
        }
    }

    fn opened(today: &DateKey, message: &str, vibrate_ms: Option<u32>) -> Self {
        Self {
            phase: Phase::Opened,
            date_key: today.to_string(),
            status: STATUS_OPENED.to_string(),
            message: Some(message.to_string()),
            trigger_enabled: false,
            trigger_armed: false,
            done_style: true,
            alert: None,
            vibrate_ms,
        }
    }

    fn failed(today: &DateKey) -> Self {
        Self {
            phase: Phase::Error,
            status: STATUS_ERROR.to_string(),
            alert: Some(ALERT_OPEN_FAILED.to_string()),
            ..Self::closed(today)
        }
    }

    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }
}

/// Result of a successful open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    pub message: String,
    /// `None` when the stored message was reused or the pool was exhausted.
    pub index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetOutcome {
    Cancelled,
    NothingToReset,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsedListing {
    Empty,
    Entries(Vec<String>),
    Unavailable,
}

impl UsedListing {
    pub fn alert_text(&self) -> String {
        match self {
            UsedListing::Empty => ALERT_NOTHING_USED.to_string(),
            UsedListing::Unavailable => ALERT_USED_UNAVAILABLE.to_string(),
            UsedListing::Entries(entries) => {
                let lines: Vec<String> = entries.iter().map(|entry| format!("- {entry}")).collect();
                format!("Used Sentences:\n\n{}", lines.join("\n"))
            }
        }
    }
}

pub struct CalendarController<'a, K: KeyValueStore> {
    store: &'a mut K,
    today: DateKey,
    view: View,
}

impl<'a, K: KeyValueStore> CalendarController<'a, K> {
    /// Projects the store for `today` without touching the sentence pool.
    pub fn init(store: &'a mut K, today: DateKey) -> Self {
        let view = project(&*store, &today);
        Self { store, today, view }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn into_view(self) -> View {
        self.view
    }

    pub async fn open_gift<S, R>(&mut self, source: &S, rng: &mut R) -> Result<Reveal, CalendarError>
    where
        S: SentenceSource,
        R: Rng,
    {
        if let Some(message) = RevealState::load(&*self.store).message_for(&self.today) {
            info!(date = %self.today, "gift already opened today");
            let message = message.to_string();
            self.view = View::opened(&self.today, &message, None);
            return Ok(Reveal { message, index: None });
        }

        self.view = View::opening(&self.today);
        match self.draw(source, rng).await {
            Ok(reveal) => {
                info!(date = %self.today, index = ?reveal.index, "gift opened");
                self.view = View::opened(&self.today, &reveal.message, Some(VIBRATE_MS));
                Ok(reveal)
            }
            Err(err) => {
                error!("error opening gift: {err}");
                self.view = View::failed(&self.today);
                Err(err)
            }
        }
    }

    async fn draw<S, R>(&mut self, source: &S, rng: &mut R) -> Result<Reveal, CalendarError>
    where
        S: SentenceSource,
        R: Rng,
    {
        let pool = source.load().await?;
        let mut used = load_used_indices(&*self.store)?;

        let reveal = match pool.available_indices(&used).choose(rng) {
            None => {
                warn!(pool = pool.len(), "sentence pool exhausted");
                Reveal {
                    message: EXHAUSTED_MESSAGE.to_string(),
                    index: None,
                }
            }
            Some(&index) => {
                let message = pool.get(index).unwrap_or_default().to_string();
                used.push(index);
                save_used_indices(&mut *self.store, &used);
                Reveal {
                    message,
                    index: Some(index),
                }
            }
        };

        save_reveal(&mut *self.store, &self.today, &reveal.message);
        Ok(reveal)
    }

    /// Wipes every key, then reloads.
    pub fn reset_calendar(&mut self, confirmed: bool) -> ResetOutcome {
        if !confirmed {
            return ResetOutcome::Cancelled;
        }
        self.store.clear();
        info!("calendar reset");
        self.reload();
        ResetOutcome::Reset
    }

    /// Puts today's gift back: clears the reveal and drops the last used index.
    ///
    /// The dropped index is assumed to be today's by position only.
    pub fn reset_today(&mut self, confirmed: bool) -> Result<ResetOutcome, CalendarError> {
        if !RevealState::load(&*self.store).opened_on(&self.today) {
            self.view = self.view.clone().with_alert(ALERT_NOT_OPENED_TODAY);
            return Ok(ResetOutcome::NothingToReset);
        }
        if !confirmed {
            return Ok(ResetOutcome::Cancelled);
        }

        let mut used = load_used_indices(&*self.store)?;
        clear_reveal(&mut *self.store);
        if used.pop().is_some() {
            save_used_indices(&mut *self.store, &used);
        }
        info!(date = %self.today, "today's gift put back");
        self.reload();
        Ok(ResetOutcome::Reset)
    }

    /// Clears today's reveal but keeps the used indices.
    pub fn reset_today_state(&mut self) {
        clear_reveal(&mut *self.store);
        info!("Advent calendar state for today reset!");
        self.reload();
    }

    pub async fn list_used<S: SentenceSource>(&mut self, source: &S) -> UsedListing {
        let listing = match self.used_entries(source).await {
            Ok(entries) if entries.is_empty() => UsedListing::Empty,
            Ok(entries) => UsedListing::Entries(entries),
            Err(err) => {
                error!("error fetching sentences for listing: {err}");
                UsedListing::Unavailable
            }
        };
        self.view = self.view.clone().with_alert(listing.alert_text());
        listing
    }

    async fn used_entries<S: SentenceSource>(&self, source: &S) -> Result<Vec<String>, CalendarError> {
        let pool = source.load().await?;
        let used = load_used_indices(&*self.store)?;
        Ok(used
            .into_iter()
            .map(|index| match pool.get(index) {
                Some(sentence) => sentence.to_string(),
                None => format!("<unknown #{index}>"),
            })
            .collect())
    }

    fn reload(&mut self) {
        self.view = project(&*self.store, &self.today);
    }
}

fn project(store: &impl KeyValueStore, today: &DateKey) -> View {
    match RevealState::load(store).message_for(today) {
        Some(message) => View::opened(today, message, None),
        None => View::closed(today),
    }
}
