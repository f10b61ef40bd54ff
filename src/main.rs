// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use xorshare::process_record::{process_record, Options};
use xorshare::record::parse_record;
use xorshare::search::SearchOptions;

/// Finds minimum-XOR-gate realizations of the packed basis-change matrix
/// pairs read from the input, one record per line.
#[derive(Parser, Debug)]
struct Args {
    /// Suppress the per-record text report.
    #[arg(long)]
    quiet: bool,

    /// Emit one JSON summary object per record instead of the text report.
    #[arg(long)]
    json: bool,

    /// Node budget per pair search; when it expires the best candidate
    /// found so far is reported and the record is flagged non-exact.
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Input file with one record per line; reads stdin when omitted.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let options = Options {
        quiet: args.quiet || args.json,
        search: SearchOptions {
            prune_reordered: true,
            max_nodes: args.max_nodes,
        },
    };

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read input line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(&line) {
            Ok(record) => {
                let summary = process_record(&record, &options);
                if args.json {
                    let text = serde_json::to_string(&summary)
                        .context("failed to serialize record summary")?;
                    println!("{}", text);
                }
            }
            Err(err) => {
                log::warn!("skipping malformed line {}: {}", line_no, err);
                eprintln!("line {}: {}", line_no, err);
            }
        }
    }
    Ok(())
}
