//! Command-line configuration.

use crate::aggregator::{DateWindow, DEFAULT_END_DATE, DEFAULT_START_DATE};
use crate::record::DateStamp;
use crate::settlement::DEFAULT_MAX_FAAN;
use clap::Parser;
use std::path::PathBuf;

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mahjong-ledger")]
#[command(about = "Generates Mahjong statistics from a plain-text ledger of hands")]
pub struct Cli {
    /// Ledger file; a trailing `.` or `.txt` is optional
    #[arg(value_name = "file_name[.[txt]]")]
    pub file_name: String,

    /// Maximum number of faan
    #[arg(short = 'm', long = "max", default_value_t = DEFAULT_MAX_FAAN,
          value_parser = clap::value_parser!(u32).range(1..=64))]
    pub max_faan: u32,

    /// Start date (yyyymmdd, inclusive)
    #[arg(short = 's', long = "start", default_value_t = DEFAULT_START_DATE)]
    pub start_date: u32,

    /// End date (yyyymmdd, inclusive)
    #[arg(short = 'e', long = "end", default_value_t = DEFAULT_END_DATE)]
    pub end_date: u32,

    /// Write the CSV here instead of next to the ledger (`-` for stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,
}

impl Cli {
    /// Ledger name without any trailing `.` or `.txt`.
    pub fn stem(&self) -> &str {
        let name = self.file_name.as_str();
        name.strip_suffix(".txt")
            .or_else(|| name.strip_suffix('.'))
            .unwrap_or(name)
    }

    /// Path of the ledger to read.
    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.txt", self.stem()))
    }

    /// Default report path: the ledger name, tagged with every non-default
    /// option, with a `.csv` extension.
    pub fn report_path(&self) -> PathBuf {
        let mut name = self.stem().to_string();
        if self.max_faan != DEFAULT_MAX_FAAN {
            name.push_str(&format!("-m_{}", self.max_faan));
        }
        if self.start_date != DEFAULT_START_DATE {
            name.push_str(&format!("-s_{}", self.start_date));
        }
        if self.end_date != DEFAULT_END_DATE {
            name.push_str(&format!("-e_{}", self.end_date));
        }
        name.push_str(".csv");
        PathBuf::from(name)
    }

    pub fn output_target(&self) -> OutputTarget {
        match self.output.as_deref() {
            Some("-") => OutputTarget::Stdout,
            Some(path) => OutputTarget::File(PathBuf::from(path)),
            None => OutputTarget::File(self.report_path()),
        }
    }

    pub fn window(&self) -> DateWindow {
        DateWindow::new(
            DateStamp::new(self.start_date),
            DateStamp::new(self.end_date),
        )
    }
}
