//! The `solve` subcommand: distribute stakes and settle each scenario.

use chrono::Utc;
use owo_colors::OwoColorize;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::debug;

use super::{output, position::PositionFile, SolveArgs};
use crate::config::Config;
use crate::domain::{leg_investments, solve, ArbitrageResult, BetKind, Outcome};
use crate::error::Result;
use crate::ledger::LedgerEntry;
use crate::numeric::safe_parse;

pub fn execute(args: &SolveArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.init_logging();

    let outcomes = load_outcomes(args)?;
    debug!(outcomes = outcomes.len(), "position loaded");

    let mut solver = config.solver.clone();
    if let Some(investment) = args.investment {
        solver.target_investment = investment;
    }

    let result = solve(&outcomes, &solver);

    if args.json {
        print_json(args, &outcomes, &result)?;
    } else {
        print_table(&outcomes, &result);
        if let Some(label) = &args.label {
            output::note(&format!("Recorded as \"{label}\"."));
        }
    }

    Ok(())
}

fn load_outcomes(args: &SolveArgs) -> Result<Vec<Outcome>> {
    if let Some(path) = &args.file {
        return Ok(PositionFile::load(path)?.outcomes());
    }

    // Inline odds follow the same silent-fallback policy as the UI text
    // fields: a malformed entry becomes "no odd entered" and the engine
    // reports the neutral result instead of failing.
    let inline = args.odds.as_deref().unwrap_or_default();
    Ok(inline
        .split(',')
        .map(|odd| Outcome::back(safe_parse(odd)))
        .collect())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    result: &'a ArbitrageResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    ledger: Option<LedgerEntry>,
}

fn print_json(args: &SolveArgs, outcomes: &[Outcome], result: &ArbitrageResult) -> Result<()> {
    let ledger = args
        .label
        .as_ref()
        .map(|label| LedgerEntry::from_computation(label, Utc::now(), outcomes, result));

    let report = JsonReport { result, ledger };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Tabled)]
struct LegRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Odd")]
    odd: String,
    #[tabled(rename = "Final")]
    final_odd: String,
    #[tabled(rename = "Bet")]
    bet: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "At risk")]
    at_risk: String,
    #[tabled(rename = "If it wins")]
    net: String,
}

fn bet_label(outcome: &Outcome) -> String {
    match outcome.kind() {
        BetKind::Lay { commission } => format!("lay {commission}%"),
        BetKind::Back if outcome.is_freebet() => "freebet".into(),
        BetKind::Back => "back".into(),
    }
}

fn print_table(outcomes: &[Outcome], result: &ArbitrageResult) {
    if result.distributed_stakes.is_empty() {
        output::warn("position is not computable: every outcome needs a usable odd");
        return;
    }

    let investments = leg_investments(outcomes, &result.distributed_stakes);

    let rows: Vec<LegRow> = outcomes
        .iter()
        .enumerate()
        .map(|(index, outcome)| LegRow {
            index: index + 1,
            odd: format!("{:.2}", outcome.raw_odd()),
            final_odd: format!("{:.2}", outcome.final_odd()),
            bet: bet_label(outcome),
            stake: format!("{:.2}", result.distributed_stakes[index]),
            at_risk: format!("{:.2}", investments[index]),
            net: signed_amount(result.returns[index]),
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::rounded()));

    output::section("Settlement");
    output::key_value("Arbitrage percentage", format!("{}%", result.arbitrage_percentage));
    output::key_value("Total investment", format!("{:.2}", result.total_investment));
    output::key_value("Worst-case profit", colored_amount(result.profit));
    output::key_value("Return on investment", format!("{}%", result.profit_percentage));

    if result.is_arbitrage {
        output::ok("guaranteed profit: stakes hedge every outcome");
    } else {
        output::warn("not an arbitrage at these odds");
    }
}

fn signed_amount(amount: Decimal) -> String {
    if amount >= Decimal::ZERO {
        format!("+{amount:.2}")
    } else {
        format!("{amount:.2}")
    }
}

fn colored_amount(amount: Decimal) -> String {
    let text = format!("{amount:.2}");
    if amount > Decimal::ZERO {
        text.green().to_string()
    } else if amount < Decimal::ZERO {
        text.red().to_string()
    } else {
        text
    }
}
