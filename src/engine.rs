//! Report engine: replays a ledger through settlement and aggregation.
//!
//! The whole ledger is processed before any output is written, so an invalid
//! file never produces a partial report.

use crate::aggregator::{Aggregator, DateWindow, Snapshot};
use crate::error::{LedgerError, RecordError, Result};
use crate::parser::LedgerReader;
use crate::player::{PlayerRecord, PlayerSummary};
use crate::record::Outcome;
use crate::settlement::{self, FAAN_CEILING_LIMIT};
use log::{debug, info};
use std::io::{BufRead, Write};

/// Settles hands under one faan ceiling and totals them over one date window.
pub struct Scorebook {
    max_faan: u32,
    aggregator: Aggregator,
}

impl Scorebook {
    /// Creates an empty scorebook. Fails if `max_faan` is outside `1..=64`.
    pub fn new(max_faan: u32, window: DateWindow) -> Result<Self> {
        if max_faan == 0 || max_faan > FAAN_CEILING_LIMIT {
            return Err(RecordError::InvalidMaxFaan {
                value: max_faan,
                max: FAAN_CEILING_LIMIT,
            }
            .into());
        }

        Ok(Scorebook {
            max_faan,
            aggregator: Aggregator::with_window(window),
        })
    }

    pub fn max_faan(&self) -> u32 {
        self.max_faan
    }

    /// Reads, settles and totals every hand of a ledger.
    ///
    /// Stops at the first invalid line. Returns the number of hands counted
    /// inside the window.
    pub fn process_ledger<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut read = 0;
        let mut counted = 0;

        for item in LedgerReader::new(reader) {
            let (line, hand) = item?;
            read += 1;

            let settlement = settlement::settle(hand.roster(), hand.outcomes(), self.max_faan)
                .map_err(|source| LedgerError::InvalidLine { line, source })?;

            debug!(
                "Line {}: `{}` settled as {:?} {:?}",
                line,
                outcome_codes(hand.outcomes()),
                settlement.kind(),
                settlement.deltas()
            );

            if self.aggregator.ingest(&hand, &settlement) {
                counted += 1;
            }
        }

        info!(
            "Read {} hands, {} inside {}..={}, {} players",
            read,
            counted,
            self.aggregator.window().start,
            self.aggregator.window().end,
            self.aggregator.len()
        );

        Ok(counted)
    }

    /// Current totals for every player.
    pub fn snapshot(&self) -> Snapshot {
        self.aggregator.snapshot()
    }

    pub fn player(&self, name: &str) -> Option<&PlayerRecord> {
        self.aggregator.player(name)
    }

    /// Writes the report as CSV.
    ///
    /// Rows are sorted by net score, highest first, with ties broken by
    /// player name.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        write_report(&self.snapshot(), writer)
    }
}

/// Outcome codes as they are written in a ledger, e.g. `- 3 d -`.
pub fn outcome_codes(outcomes: &[Outcome]) -> String {
    outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Report rows in output order: net score descending, then name.
pub fn ranked(snapshot: &Snapshot) -> Vec<&PlayerSummary> {
    let mut rows: Vec<_> = snapshot.values().collect();
    rows.sort_by(|a, b| {
        b.net_score
            .cmp(&a.net_score)
            .then_with(|| a.player.cmp(&b.player))
    });
    rows
}

/// Writes a snapshot as CSV with a header row.
///
/// The header is written explicitly so that an empty report still has one.
pub fn write_report<W: Write>(snapshot: &Snapshot, writer: W) -> Result<()> {
    // Player names never contain commas, so fields are written bare
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record([
        "player",
        "games_played",
        "games_won",
        "net_score",
        "games_won_pc",
        "net_score_avg",
    ])?;

    for row in ranked(snapshot) {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}
