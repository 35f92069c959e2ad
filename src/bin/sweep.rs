use clap::Parser;
use knights_tour::search::walk::{sweep, SweepReport};
use knights_tour::telemetry;
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "sweep",
    about = "Follow Warnsdorff hints from every start square and report how often the tour completes"
)]
struct Args {
    /// Board sizes to sweep
    #[arg(long, value_delimiter = ',', default_value = "5,6,7,8")]
    sizes: Vec<usize>,

    /// Emit the reports as TOML instead of a table
    #[arg(long)]
    toml: bool,
}

#[derive(Serialize)]
struct Reports {
    sweep: Vec<SweepReport>,
}

fn main() {
    telemetry::init("info");
    let args = Args::parse();

    if args.sizes.iter().any(|&n| n == 0) {
        eprintln!("board sizes must be at least 1");
        std::process::exit(2);
    }

    let reports: Vec<SweepReport> = args.sizes.iter().map(|&n| sweep(n)).collect();

    if args.toml {
        match toml::to_string(&Reports { sweep: reports }) {
            Ok(text) => print!("{text}"),
            Err(e) => {
                eprintln!("Failed to serialize reports: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("size  starts  completed  rate     shortest stuck");
    for r in &reports {
        println!(
            "{:>4}  {:>6}  {:>9}  {:>6.1}%  {}",
            r.size,
            r.starts,
            r.completed,
            r.completion_rate() * 100.0,
            r.shortest_stuck
                .map_or_else(|| "-".to_string(), |m| m.to_string()),
        );
    }
}
