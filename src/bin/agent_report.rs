// src/bin/agent_report.rs

//! Runs the agent pod on one synthetic scenario and prints the risk and
//! return matrix, either as a text table or as JSON.

use clap::Parser;
use forex_alpha_agents::portfolio::{best_by_drawdown, best_by_return, leader};
use forex_alpha_agents::{
    ForexPair, PodSummary, SimulationOptions, SimulationResult, optimize_agent_configs,
    random_scenario_seed, simulate_agents,
};
use serde::Serialize;
use std::error::Error;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Forex Alpha Agents - simulate and score the FX agent pod
#[derive(Parser, Debug)]
#[command(name = "agent-report")]
#[command(about = "Simulate the FX agent pod on a synthetic scenario and report its metrics")]
#[command(version)]
struct Args {
    /// Currency pair: EURUSD, GBPUSD, USDJPY, AUDUSD or USDCAD
    #[arg(long, env = "FXA_PAIR", default_value = "EURUSD")]
    pair: ForexPair,

    /// Number of trading days in the synthetic path
    #[arg(long, env = "FXA_DAYS", default_value_t = 520)]
    days: usize,

    /// Scenario seed; the same seed always replays the same market
    #[arg(long, env = "FXA_SEED", default_value = "institutional")]
    seed: String,

    /// Ignore --seed and pick a fresh scenario seed
    #[arg(long)]
    randomize_seed: bool,

    /// Initial capital per agent (USD)
    #[arg(long, env = "FXA_CAPITAL", default_value_t = 150_000.0)]
    capital: f64,

    /// Global risk multiplier
    #[arg(long, env = "FXA_RISK_MULTIPLIER", default_value_t = 1.1)]
    risk_multiplier: f64,

    /// Largest fraction of equity a single day is sized to lose
    #[arg(long, env = "FXA_DRAWDOWN_TARGET", default_value_t = 0.1)]
    drawdown_target: f64,

    /// Tune every agent for risk score before reporting
    #[arg(long)]
    optimize: bool,

    /// Optimizer candidates per agent
    #[arg(long, env = "FXA_ITERATIONS", default_value_t = 36)]
    iterations: usize,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    pair: ForexPair,
    length: usize,
    seed: &'a str,
    options: SimulationOptions,
    optimized: bool,
    summary: Option<PodSummary>,
    results: &'a [SimulationResult],
}

fn format_percent(value: f64, digits: usize) -> String {
    format!("{:.*}%", digits, value * 100.0)
}

/// Appends `*` to the column winner.
fn mark(text: String, highlighted: bool) -> String {
    if highlighted { format!("{}*", text) } else { text }
}

fn print_table(results: &[SimulationResult]) {
    let top_return = best_by_return(results).map(|r| r.agent.id.as_str());
    let top_drawdown = best_by_drawdown(results).map(|r| r.agent.id.as_str());
    let top_score = leader(results).map(|r| r.agent.id.as_str());

    println!(
        "{:<18} {:<22} {:>12} {:>12} {:>8} {:>9} {:>10} {:>11}",
        "Agent", "Strategy", "Ann. Return", "Max DD", "Sharpe", "Win Rate", "Profit F.", "Risk Score"
    );
    for result in results {
        let id = Some(result.agent.id.as_str());
        let m = &result.metrics;
        println!(
            "{:<18} {:<22} {:>12} {:>12} {:>8.2} {:>9} {:>10.2} {:>11}",
            result.agent.name,
            result.agent.archetype_label,
            mark(format_percent(m.annualized_return, 1), id == top_return),
            mark(format_percent(m.max_drawdown, 2), id == top_drawdown),
            m.sharpe,
            format_percent(m.win_rate, 1),
            m.profit_factor,
            mark(format!("{:.2}", m.risk_score), id == top_score),
        );
    }
}

fn print_summary(results: &[SimulationResult], summary: &PodSummary) {
    if let Some(lead) = leader(results) {
        println!();
        println!("Optimal profile: {} ({})", lead.agent.name, lead.agent.positioning);
        println!(
            "  return {}  drawdown {}  sharpe {:.2}",
            format_percent(lead.metrics.annualized_return, 1),
            format_percent(lead.metrics.max_drawdown, 2),
            lead.metrics.sharpe
        );
    }
    println!(
        "Blended pod: return {}  drawdown {}  sharpe {:.2}",
        format_percent(summary.blended.blended_return, 1),
        format_percent(summary.blended.blended_drawdown, 2),
        summary.blended.blended_sharpe
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = if args.randomize_seed {
        random_scenario_seed(&mut rand::thread_rng())
    } else {
        args.seed.clone()
    };
    let options = SimulationOptions::new(args.capital, args.risk_multiplier, args.drawdown_target);

    let started = Instant::now();
    let results = if args.optimize {
        optimize_agent_configs(args.pair, args.days, &seed, &options, args.iterations)?
    } else {
        simulate_agents(args.pair, args.days, &seed, &options)?
    };
    info!(
        seed = %seed,
        agents = results.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scenario complete"
    );

    let summary = PodSummary::from_results(&results);

    if args.json {
        let report = Report {
            pair: args.pair,
            length: args.days,
            seed: &seed,
            options,
            optimized: args.optimize,
            summary,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} | {} trading days | seed \"{}\"{}",
        args.pair,
        args.days,
        seed,
        if args.optimize { " | optimized risk budget" } else { "" }
    );
    println!();
    print_table(&results);
    if let Some(summary) = summary {
        print_summary(&results, &summary);
    }
    Ok(())
}
