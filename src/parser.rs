//! Line reader for the plain-text ledger format.
//!
//! ```text
//! 20191214          # date line: digits, first 8 significant
//! w x y z           # roster: 3 or 4 player names
//! 6 - - -           # hand: <faan>, d, t, f or - per seat
//! ```
//!
//! `#` comments out the rest of a line and blank lines are ignored. Dates and
//! rosters stay in effect until replaced.

use crate::error::{LedgerError, RecordError, Result};
use crate::record::{is_valid_player_name, DateStamp, Hand, Outcome, Roster, MAX_SEATS, MIN_SEATS};
use std::io::{BufRead, Lines};

/// One meaningful ledger line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Date(DateStamp),
    Roster(Roster),
    Outcomes(Vec<Outcome>),
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn is_outcome_token(token: &str) -> bool {
    token.parse::<Outcome>().is_ok()
}

/// Classifies one raw line. Returns `None` for blank and comment-only lines.
///
/// A line that reads as both a roster and a hand (e.g. `d t f`) is a roster.
pub fn classify_line(raw: &str) -> std::result::Result<Option<Entry>, RecordError> {
    let line = strip_comment(raw).trim();
    if line.is_empty() {
        return Ok(None);
    }

    if line.bytes().all(|b| b.is_ascii_digit()) {
        return line.parse().map(|date| Some(Entry::Date(date)));
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(MIN_SEATS..=MAX_SEATS).contains(&tokens.len()) {
        return Err(RecordError::UnrecognizedLine);
    }

    if tokens.iter().all(|t| is_valid_player_name(t)) {
        return Roster::new(tokens).map(|roster| Some(Entry::Roster(roster)));
    }

    if tokens.iter().all(|t| is_outcome_token(t)) {
        return tokens
            .iter()
            .map(|t| t.parse())
            .collect::<std::result::Result<Vec<Outcome>, _>>()
            .map(|outcomes| Some(Entry::Outcomes(outcomes)));
    }

    Err(RecordError::UnrecognizedLine)
}

/// Streams the hands of a ledger, each with its 1-based line number.
///
/// The first malformed line ends the stream with an error.
pub struct LedgerReader<R> {
    lines: Lines<R>,
    line_num: usize,
    date: Option<DateStamp>,
    roster: Option<Roster>,
    failed: bool,
}

impl<R: BufRead> LedgerReader<R> {
    pub fn new(reader: R) -> Self {
        LedgerReader {
            lines: reader.lines(),
            line_num: 0,
            date: None,
            roster: None,
            failed: false,
        }
    }

    fn fail(&mut self, source: RecordError) -> Option<Result<(usize, Hand)>> {
        self.failed = true;
        Some(Err(LedgerError::InvalidLine {
            line: self.line_num,
            source,
        }))
    }
}

impl<R: BufRead> Iterator for LedgerReader<R> {
    type Item = Result<(usize, Hand)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let next = self.lines.next()?;
            self.line_num += 1;
            let line = match next {
                Ok(line) => line,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(LedgerError::UnreadableLine {
                        line: self.line_num,
                        source,
                    }));
                }
            };

            match classify_line(&line) {
                Ok(None) => {}
                Ok(Some(Entry::Date(date))) => self.date = Some(date),
                Ok(Some(Entry::Roster(roster))) => self.roster = Some(roster),
                Ok(Some(Entry::Outcomes(outcomes))) => {
                    let Some(roster) = self.roster.clone() else {
                        return self.fail(RecordError::MissingRoster);
                    };
                    return match Hand::new(self.date, roster, outcomes) {
                        Ok(hand) => Some(Ok((self.line_num, hand))),
                        Err(e) => self.fail(e),
                    };
                }
                Err(e) => return self.fail(e),
            }
        }
    }
}
