use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::constants::*;

/// One face of a reel. Serialized as the emoji shown on screen.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
pub enum Symbol {
    #[serde(rename = "🍒")]
    #[strum(serialize = "🍒")]
    Cherry,
    #[serde(rename = "🍋")]
    #[strum(serialize = "🍋")]
    Lemon,
    #[serde(rename = "🔔")]
    #[strum(serialize = "🔔")]
    Bell,
    #[serde(rename = "💎")]
    #[strum(serialize = "💎")]
    Diamond,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::Cherry, Symbol::Lemon, Symbol::Bell, Symbol::Diamond];

    /// Uniform draw over the alphabet.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let idx = rng.gen_range(0..Self::ALL.len() as u32) as usize;
        Self::ALL[idx]
    }
}

/// The three visible reel positions.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Reels(pub [Symbol; 3]);

impl Reels {
    /// What the machine shows before the first spin and after a reset.
    pub const INITIAL: Reels = Reels([Symbol::Cherry, Symbol::Lemon, Symbol::Bell]);

    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Reels([Symbol::random(rng), Symbol::random(rng), Symbol::random(rng)])
    }

    pub fn symbols(&self) -> &[Symbol; 3] {
        &self.0
    }

    pub fn all_match(&self) -> bool {
        let [a, b, c] = self.0;
        a == b && b == c
    }
}

impl Default for Reels {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Reels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{} {} {}", a, b, c)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SpinResult {
    Win,
    Lose,
}

/// A settled spin. Never modified after it is recorded.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub symbols: Reels,
    pub result: SpinResult,
    pub delta: i64,
    pub time: String,
}

impl HistoryEntry {
    pub fn new(symbols: Reels, result: SpinResult, delta: i64, at: DateTime<Utc>) -> Self {
        Self {
            symbols,
            result,
            delta,
            time: format_timestamp(at),
        }
    }

    pub fn is_win(&self) -> bool {
        self.result == SpinResult::Win
    }

    pub fn signed_delta(&self) -> String {
        format_delta(self.delta)
    }
}

/// Most recent spins, newest first.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct History(Vec<HistoryEntry>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a history from entries already ordered newest first, keeping at most `limit`.
    pub fn from_entries(mut entries: Vec<HistoryEntry>, limit: usize) -> Self {
        entries.truncate(limit);
        Self(entries)
    }

    pub fn record(&mut self, entry: HistoryEntry, limit: usize) {
        self.0.insert(0, entry);
        self.0.truncate(limit);
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Tunables for one machine instance.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    pub storage_key: String,
    pub starting_balance: i64,
    pub win_delta: i64,
    pub loss_delta: i64,
    pub history_limit: usize,
    pub flicker_frames: usize,
    pub flicker_interval_ms: u32,
    pub settle_delay_ms: u32,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            starting_balance: STARTING_BALANCE,
            win_delta: WIN_DELTA,
            loss_delta: LOSS_DELTA,
            history_limit: HISTORY_LIMIT,
            flicker_frames: FLICKER_FRAMES,
            flicker_interval_ms: FLICKER_INTERVAL_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
        }
    }
}

impl SlotConfig {
    /// Three of a kind wins, anything else loses.
    pub fn evaluate(&self, reels: &Reels) -> (SpinResult, i64) {
        if reels.all_match() {
            (SpinResult::Win, self.win_delta)
        } else {
            (SpinResult::Lose, self.loss_delta)
        }
    }
}

/// `+100` for gains, `-10` for losses.
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-14T09:30:00.123Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
