use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use knights_tour::config::TourConfig;
use knights_tour::game::Tour;
use knights_tour::input::{parse_command, parse_square, Command, HELP};
use knights_tour::render::{
    hint_message, progress_line, rejection_message, render_board, status_message,
};
use knights_tour::state::MoveOutcome;
use knights_tour::telemetry;

#[derive(Debug, Parser)]
#[command(name = "play", about = "Play a knight's tour in the terminal")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board size (overrides the configuration)
    #[arg(short, long)]
    size: Option<usize>,

    /// Start square, 1-based `row,col` (overrides the configuration)
    #[arg(long)]
    start: Option<String>,

    /// Do not show the Warnsdorff hint after each move
    #[arg(long)]
    no_hints: bool,
}

fn main() {
    telemetry::init("warn");
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match TourConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => TourConfig::default(),
    };
    if let Some(size) = args.size {
        config = config.with_board_size(size);
    }
    if let Some(start) = &args.start {
        match parse_square(start, config.board_size) {
            Ok(p) => config = config.with_start(p),
            Err(e) => {
                eprintln!("invalid --start {start}: {e}");
                std::process::exit(2);
            }
        }
    }
    if args.no_hints {
        config = config.with_show_hints(false);
    }
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        std::process::exit(2);
    }

    let mut tour = Tour::from_config(&config);
    println!("{HELP}\n");
    show(&tour, config.show_hints);

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let cmd = match parse_command(&line, tour.size()) {
            Ok(cmd) => cmd,
            Err(knights_tour::input::InputError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match cmd {
            Command::Move(target) => match tour.attempt_move(target) {
                MoveOutcome::Accepted => show(&tour, config.show_hints),
                MoveOutcome::Rejected(_) => {
                    println!("{}", rejection_message(tour.state(), target));
                }
            },
            Command::Hint => {
                let ranked = tour.state().ranked_moves();
                if ranked.is_empty() {
                    println!("No moves available.");
                }
                for m in &ranked {
                    println!("  {} -> {} onward moves", m.position, m.accessibility);
                }
                if let Some(h) = tour.hint() {
                    println!("{}", hint_message(&h));
                }
            }
            Command::Auto => {
                let steps = tour.play_hints();
                println!("Played {steps} hinted moves.");
                show(&tour, false);
            }
            Command::Reset => {
                tour.reset();
                show(&tour, config.show_hints);
            }
            Command::Resize(n) => {
                if config.is_size_allowed(n) {
                    tour.resize(n);
                    show(&tour, config.show_hints);
                } else {
                    println!("Board size must be one of {:?}.", config.allowed_sizes);
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }
    }
}

fn show(tour: &Tour, show_hints: bool) {
    let state = tour.state();
    let hint = if show_hints { tour.hint() } else { None };
    println!("{}", render_board(state, hint.as_ref()));
    println!("{}", status_message(state));
    println!("{}", progress_line(state));
    if let Some(h) = hint {
        if !state.status().is_terminal() {
            println!("{}", hint_message(&h));
        }
    }
}
