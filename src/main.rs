//! Mahjong Ledger CLI
//!
//! Reads a ledger of Mahjong hands and writes per-player statistics as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- scores -m 10 -s 20190101 -e 20191231   # writes scores-m_10-s_20190101-e_20191231.csv
//! cargo run -- scores.txt -o -                        # writes to stdout
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use clap::Parser;
use log::info;
use mahjong_ledger::{Cli, LedgerError, OutputTarget, Result, Scorebook};
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input_path = cli.input_path();
    let file = File::open(&input_path).map_err(|source| LedgerError::Open {
        path: input_path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut book = Scorebook::new(cli.max_faan, cli.window())?;
    book.process_ledger(reader)?;

    match cli.output_target() {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let handle = stdout.lock();
            book.write_output(handle)?;
        }
        OutputTarget::File(path) => {
            let file = File::create(&path).map_err(|source| LedgerError::Open {
                path: path.clone(),
                source,
            })?;
            book.write_output(file)?;
            info!("Wrote {}", path.display());
        }
    }

    Ok(())
}
