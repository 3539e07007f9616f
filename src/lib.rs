//! # Mahjong Ledger
//!
//! Settles hands of Kwong-tung Mahjong recorded in a plain-text ledger and
//! totals games played, games won and net score per player.
//!
//! ## Design Principles
//!
//! - **Typed outcomes**: each seat's role is an [`Outcome`], never a raw symbol
//! - **Pure settlement**: [`settle`] has no side effects and is always zero-sum
//! - **Owned aggregation**: one [`Aggregator`] per report, filtered by date
//! - **All or nothing**: the first invalid line aborts the whole report
//!
//! ## Example
//!
//! ```
//! use mahjong_ledger::{DateWindow, Scorebook};
//! use std::io::Cursor;
//!
//! let ledger = "20191214\nA B C\nd 3 -\n";
//! let mut book = Scorebook::new(8, DateWindow::default()).unwrap();
//! book.process_ledger(Cursor::new(ledger)).unwrap();
//! assert_eq!(book.player("B").unwrap().net_score, 24);
//! ```

pub mod aggregator;
pub mod config;
pub mod engine;
pub mod error;
pub mod parser;
pub mod player;
pub mod rate;
pub mod record;
pub mod settlement;

pub use aggregator::{Aggregator, DateWindow, Snapshot};
pub use config::{Cli, OutputTarget};
pub use engine::Scorebook;
pub use error::{LedgerError, RecordError, Result};
pub use player::{PlayerRecord, PlayerSummary};
pub use rate::{Average, Percentage, Rate};
pub use record::{DateStamp, Hand, Outcome, Roster};
pub use settlement::{base_amount, settle, HandKind, Settlement};
