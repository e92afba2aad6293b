mod config;
mod output;
mod roster;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use teamsplit_core::{
    GroupingEngine, GroupingOptions, InMemoryRoster, Rank, SideLabels, choose_featured,
};
use tracing::{debug, warn};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "teamsplit",
    version,
    about = "Split ten ranked players into two balanced teams of five"
)]
struct Cli {
    /// Show debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Group the active players of a roster into balanced 5v5 splits
    Group(GroupArgs),
    /// Print the skill score for a rank label (e.g. "Gold 2")
    Score(ScoreArgs),
    /// Create a default config file at ~/.config/teamsplit/config.toml
    Init,
}

#[derive(Parser)]
struct GroupArgs {
    /// Roster file: JSON array, or one "name#tag, Rank, LP[, inactive]" per line
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Number of alternative splits to show
    #[arg(long)]
    top_k: Option<usize>,

    /// Seed for the member shuffle, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Also feature one of the shown splits, picked at random
    #[arg(long)]
    pick_one: bool,

    /// Output JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Path to config file (default: ~/.config/teamsplit/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct ScoreArgs {
    /// Rank label, e.g. "Emerald 3" or "Master"
    label: String,

    /// League points
    #[arg(long, default_value_t = 0)]
    lp: u32,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "teamsplit_core=debug,teamsplit=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Group(args) => run_group(args),
        Commands::Score(args) => run_score(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default roster, top-k, and team labels.");
        }
    }
}

fn run_score(args: ScoreArgs) {
    let rank = Rank::parse_label(&args.label, args.lp).unwrap_or_else(|e| bail(e));
    println!("{rank} -> {}", rank.score());
}

fn run_group(args: GroupArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    debug!(path = %config_path.display(), ?cfg, "loaded config");

    let roster_path = args.roster.clone().or(cfg.roster).unwrap_or_else(|| {
        bail(format!("No roster specified. Pass --roster or set it in {}", config_path.display()));
    });
    let defaults = GroupingOptions::default();
    let options = GroupingOptions {
        top_k: args.top_k.or(cfg.top_k).unwrap_or(defaults.top_k),
        labels: SideLabels {
            primary: cfg.primary_label.unwrap_or(defaults.labels.primary),
            secondary: cfg.secondary_label.unwrap_or(defaults.labels.secondary),
        },
    };
    if options.top_k == 0 {
        bail("--top-k must be at least 1");
    }

    let participants = roster::load_roster(&roster_path);
    let store = InMemoryRoster::from_participants(participants)
        .unwrap_or_else(|e| bail(format!("Invalid roster file {}: {e}", roster_path.display())));

    let inactive = store.len() - store.active_count();
    if inactive > 0 {
        warn!(inactive, "skipping inactive participants");
    }
    debug!(
        path = %roster_path.display(),
        total = store.len(),
        active = store.active_count(),
        "loaded roster"
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let engine = GroupingEngine::new(options);
    let result = engine.group(&store, &mut rng).unwrap_or_else(|e| bail(e));

    let featured = if args.pick_one {
        choose_featured(&result.splits, &mut rng)
    } else {
        None
    };

    if args.json {
        output::print_json(&result, featured);
    } else {
        output::print_report(&result, featured);
    }
}
