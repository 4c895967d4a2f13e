//! The `share` subcommands: encode a position into a token, decode one back.

use chrono::Utc;

use super::{output, position::PositionFile, ShareDecodeArgs, ShareEncodeArgs};
use crate::domain::settle;
use crate::error::Result;
use crate::share::{share_url, ShareSnapshot};

pub fn encode(args: &ShareEncodeArgs) -> Result<()> {
    let outcomes = PositionFile::load(&args.file)?.outcomes();
    let result = settle(&outcomes);

    let snapshot = ShareSnapshot::capture(&outcomes, &result, Utc::now());
    let token = snapshot.encode()?;

    match &args.base {
        Some(base) => println!("{}", share_url(base, &token)),
        None => println!("{token}"),
    }

    Ok(())
}

pub fn decode(args: &ShareDecodeArgs) -> Result<()> {
    let snapshot = ShareSnapshot::decode(&args.token)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    output::section("Shared position");
    output::key_value("Captured at", snapshot.timestamp.to_rfc3339());
    output::key_value("Outcomes", snapshot.outcome_count);
    for (index, outcome) in snapshot.outcomes.iter().enumerate() {
        let kind = if outcome.lay {
            format!("lay {}%", outcome.commission)
        } else if outcome.freebet {
            "freebet".into()
        } else {
            "back".into()
        };
        output::key_value(&format!("  outcome {}", index + 1), format!("odd {} ({kind})", outcome.odd));
    }

    output::section("Shared results");
    output::key_value("Arbitrage percentage", format!("{}%", snapshot.results.arbitrage_percentage));
    output::key_value("Total investment", snapshot.results.total_investment);
    output::key_value("Profit", snapshot.results.profit);
    if snapshot.results.is_arbitrage {
        output::ok("the shared position was a guaranteed profit");
    } else {
        output::warn("the shared position was not an arbitrage");
    }

    Ok(())
}
