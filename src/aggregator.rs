//! Per-player aggregation of settled hands over a date window.

use crate::player::{PlayerRecord, PlayerSummary};
use crate::record::{DateStamp, Hand};
use crate::settlement::Settlement;
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Start of the window when none is configured.
pub const DEFAULT_START_DATE: u32 = 0;

/// End of the window when none is configured.
pub const DEFAULT_END_DATE: u32 = 100_000_000;

/// Report view of every player seen so far, keyed by player name.
pub type Snapshot = BTreeMap<String, PlayerSummary>;

/// Inclusive range of session dates that count towards a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateStamp,
    pub end: DateStamp,
}

impl DateWindow {
    pub fn new(start: DateStamp, end: DateStamp) -> Self {
        DateWindow { start, end }
    }

    /// Returns `true` if a hand on `date` counts. Undated hands always count.
    pub fn contains(&self, date: Option<DateStamp>) -> bool {
        match date {
            Some(date) => self.start <= date && date <= self.end,
            None => true,
        }
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        DateWindow::new(
            DateStamp::new(DEFAULT_START_DATE),
            DateStamp::new(DEFAULT_END_DATE),
        )
    }
}

/// Running per-player totals for one report.
///
/// Players appear once they sit in a hand inside the window. `ingest` and
/// `snapshot` may be interleaved freely.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    window: DateWindow,
    players: HashMap<String, PlayerRecord>,
}

impl Aggregator {
    /// Creates an empty aggregator counting hands dated `start..=end`.
    pub fn new(start: DateStamp, end: DateStamp) -> Self {
        Self::with_window(DateWindow::new(start, end))
    }

    pub fn with_window(window: DateWindow) -> Self {
        Aggregator {
            window,
            players: HashMap::new(),
        }
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Folds one settled hand into the totals.
    ///
    /// Returns `false`, changing nothing, if the hand is outside the window.
    pub fn ingest(&mut self, hand: &Hand, settlement: &Settlement) -> bool {
        if !self.window.contains(hand.date()) {
            debug!(
                "Skipping hand dated {:?} outside {}..={}",
                hand.date(),
                self.window.start,
                self.window.end
            );
            return false;
        }

        debug_assert_eq!(hand.roster().seats(), settlement.deltas().len());

        for (seat, (player, outcome)) in hand
            .roster()
            .players()
            .iter()
            .zip(hand.outcomes())
            .enumerate()
        {
            self.players
                .entry(player.clone())
                .or_default()
                .record(outcome.is_win(), settlement.delta(seat));
        }

        true
    }

    /// Totals for one player, if they have played inside the window.
    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.get(name)
    }

    /// Number of players seen so far.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Current totals and rates for every player.
    pub fn snapshot(&self) -> Snapshot {
        self.players
            .iter()
            .map(|(name, record)| (name.clone(), record.summary(name)))
            .collect()
    }
}
