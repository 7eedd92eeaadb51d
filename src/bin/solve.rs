//! Fantasyland Solver Binary
//!
//! Solves the hand given as arguments, or one hand per line of stdin.
use clap::Parser;
use colored::Colorize;
use fantasyland::cards::Card;
use fantasyland::*;
use rayon::prelude::*;
use std::io::BufRead;

#[derive(Parser)]
#[command(about = "Set a Fantasyland deal for the most royalties")]
struct Args {
    /// print each solution as one line of JSON
    #[arg(long)]
    json: bool,
    /// value of repeating Fantasyland
    #[arg(long, default_value_t = REPEAT_BONUS)]
    bonus: Utility,
    /// log search counters
    #[arg(short, long)]
    verbose: bool,
    /// cards like `As Kd 7h`; reads stdin when empty
    cards: Vec<String>,
}

impl Args {
    fn report(&self, solution: &Solution) -> anyhow::Result<String> {
        if self.json {
            return Ok(serde_json::to_string(solution)?);
        }
        let mut report = solution.to_string();
        if solution.repeat {
            report.push_str(&format!("\n{}", "repeats fantasyland".green().bold()));
        }
        if self.verbose {
            report.push_str(&format!("\n{}", solution.stats.to_string().dimmed()));
        }
        Ok(report)
    }

    fn solve(&self, solver: &Solver, hand: &str) -> anyhow::Result<String> {
        let cards = Card::parse(hand).map_err(anyhow::Error::msg)?;
        let solution = solver.solve(&cards)?;
        self.report(&solution)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    let solver = Solver::with_bonus(args.bonus);
    if !args.cards.is_empty() {
        println!("{}", args.solve(&solver, &args.cards.join(" "))?);
        return Ok(());
    }
    let hands = std::io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<String>, _>>()?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<String>>();
    log::info!("{:<32}{:<32}", "solving hands", hands.len());
    let reports = hands
        .par_iter()
        .map(|hand| args.solve(&solver, hand))
        .collect::<Vec<anyhow::Result<String>>>();
    let mut failures = 0;
    for (hand, report) in hands.iter().zip(reports) {
        match report {
            Ok(report) => println!("{}", report),
            Err(e) => {
                failures += 1;
                eprintln!("{} {}: {}", "error".red(), hand.trim(), e);
            }
        }
        if !args.json {
            println!();
        }
    }
    match failures {
        0 => Ok(()),
        n => Err(anyhow::anyhow!("{} of {} hands failed", n, hands.len())),
    }
}
