//! Typed ledger records: date stamps, rosters and hands.

use crate::error::RecordError;
use crate::settlement::{self, Settlement};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Fewest seats at a table.
pub const MIN_SEATS: usize = 3;

/// Most seats at a table.
pub const MAX_SEATS: usize = 4;

/// Number of leading digits of a date line that are significant (`yyyymmdd`).
const DATE_DIGITS: usize = 8;

/// A session date stamp, compared as a plain `yyyymmdd` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DateStamp(u32);

impl DateStamp {
    pub const fn new(value: u32) -> Self {
        DateStamp(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for DateStamp {
    type Err = RecordError;

    /// Parses a run of ASCII digits; digits beyond the eighth are ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordError::InvalidDate(trimmed.to_string()));
        }

        let significant = &trimmed[..trimmed.len().min(DATE_DIGITS)];
        significant
            .parse()
            .map(DateStamp)
            .map_err(|_| RecordError::InvalidDate(trimmed.to_string()))
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` if `name` is usable as a player name.
///
/// Names are non-empty, do not start with a digit and contain no
/// whitespace, commas or hyphens.
pub fn is_valid_player_name(name: &str) -> bool {
    match name.chars().next() {
        Some(first) if !first.is_ascii_digit() => name
            .chars()
            .all(|c| !c.is_whitespace() && c != ',' && c != '-'),
        _ => false,
    }
}

/// The players at the table, one per seat, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Builds a roster of 3 or 4 unique, well-formed player names.
    pub fn new<I, S>(names: I) -> std::result::Result<Self, RecordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players: Vec<String> = names.into_iter().map(Into::into).collect();

        if !(MIN_SEATS..=MAX_SEATS).contains(&players.len()) {
            return Err(RecordError::InvalidRoster(format!(
                "{} players given, expected {} or {}",
                players.len(),
                MIN_SEATS,
                MAX_SEATS
            )));
        }

        if let Some(bad) = players.iter().find(|p| !is_valid_player_name(p)) {
            return Err(RecordError::InvalidRoster(format!(
                "malformed player name `{}`",
                bad
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(p.as_str())) {
            return Err(RecordError::InvalidRoster(format!(
                "duplicate player `{}`",
                dup
            )));
        }

        Ok(Roster { players })
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Number of seats at the table.
    pub fn seats(&self) -> usize {
        self.players.len()
    }
}

/// What a single seat did in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Won the hand with the declared number of faan (`<digits>`).
    Win(u32),

    /// Discarded the winning tile (`d`).
    Discard,

    /// Takes on all losses for a self-drawn win elsewhere (`t`).
    Liable,

    /// Declared a win wrongly (`f`).
    FalseWin,

    /// No special role in the hand (`-`).
    Bystander,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win(_))
    }
}

impl FromStr for Outcome {
    type Err = RecordError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "d" => Ok(Outcome::Discard),
            "t" => Ok(Outcome::Liable),
            "f" => Ok(Outcome::FalseWin),
            "-" => Ok(Outcome::Bystander),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                // Anything past u32 is far above any faan ceiling anyway
                Ok(Outcome::Win(digits.parse().unwrap_or(u32::MAX)))
            }
            other => Err(RecordError::InvalidOutcome(other.to_string())),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(faan) => write!(f, "{}", faan),
            Outcome::Discard => f.write_str("d"),
            Outcome::Liable => f.write_str("t"),
            Outcome::FalseWin => f.write_str("f"),
            Outcome::Bystander => f.write_str("-"),
        }
    }
}

/// One played hand: who sat where, what each seat did, and when.
///
/// Hands read before any date line carry no date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    date: Option<DateStamp>,
    roster: Roster,
    outcomes: Vec<Outcome>,
}

impl Hand {
    /// Pairs a roster with one outcome per seat.
    pub fn new(
        date: Option<DateStamp>,
        roster: Roster,
        outcomes: Vec<Outcome>,
    ) -> std::result::Result<Self, RecordError> {
        if outcomes.len() != roster.seats() {
            return Err(RecordError::InvalidHand(format!(
                "{} outcomes given for {} players",
                outcomes.len(),
                roster.seats()
            )));
        }

        Ok(Hand {
            date,
            roster,
            outcomes,
        })
    }

    pub fn date(&self) -> Option<DateStamp> {
        self.date
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Settles this hand under the given faan ceiling.
    pub fn settle(&self, max_faan: u32) -> std::result::Result<Settlement, RecordError> {
        settlement::settle(&self.roster, &self.outcomes, max_faan)
    }
}
