//! `coalition-inspect` — Prints what is known about one group of justices.
//!
//! With no ids, prints the size group summaries of the chosen variant
//! (and the pair matrix for the restricted variant).
//!
//! **Usage:**
//! ```
//! coalition-inspect [--variant full|restricted] [--size <k>] [<id>...]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::Parser;
use coalition_clients::init_logging;
use coalition_roster::{Cell, Occurrences, Session, SizeFilter, Variant};

/// Inspect combinations of justices.
#[derive(Parser)]
#[command(name = "coalition-inspect", about = "Inspect combinations of justices")]
struct Args {
    /// Browser variant.
    #[arg(long, default_value = "full")]
    variant: Variant,

    /// Only summarize this size (`all` or a number).
    #[arg(long, default_value = "all")]
    size: SizeFilter,

    /// Justice ids of one combination, in any order.
    ids: Vec<usize>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let mut session = Session::new(args.variant)?;

    if args.ids.is_empty() {
        session.select_size(args.size)?;
        print_summary(&session);
        return Ok(());
    }

    let detail = session.detail(&args.ids)?;
    println!("{} [{}]", detail.title, detail.key);
    for member in &detail.members {
        println!("  {member}");
    }
    match &detail.occurrences {
        Occurrences::Recorded { cases } => {
            println!("Cases ({}):", cases.len());
            for case in cases {
                let kind = case.opinion.map(|t| format!(" [{}]", t.label())).unwrap_or_default();
                println!("  {} ({}, {}){}", case.case_name, case.citation, case.date, kind);
            }
        }
        Occurrences::NotYetOccurred { message } => {
            for paragraph in message {
                println!("{paragraph}");
            }
        }
    }
    Ok(())
}

fn print_summary(session: &Session) {
    let stats = session.statistics();
    println!(
        "{} variant: {} combinations, {} occurred",
        session.variant().as_str(),
        stats.total_combinations,
        stats.occurred_count
    );
    for group in session.visible_groups() {
        println!("{}", group.summary.header());
    }

    let Some(matrix) = session.pair_matrix() else {
        return;
    };
    for row in matrix.rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Pair { occurred: true, .. } => '#',
                Cell::Pair { .. } => 'o',
            })
            .collect();
        println!("  {line}");
    }
}
