use clap::Parser;
use kairo::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Runs a blueprint graph and prints its output
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the blueprint JSON file
    blueprint_path: Option<String>,

    /// Optional JSON file with run limits (`max_steps`, `max_loop_iterations`, `seed`)
    #[arg(short, long)]
    config: Option<String>,

    /// Total node dispatches allowed before the run is aborted
    #[arg(long)]
    max_steps: Option<usize>,

    /// Iterations a single loop may perform before it is abandoned
    #[arg(long)]
    max_loop_iterations: Option<u32>,

    /// Seed for random integer nodes
    #[arg(long)]
    seed: Option<u64>,

    /// List every node kind with its default title and exit
    #[arg(long)]
    list_kinds: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_kinds {
        list_kinds();
        return;
    }

    let blueprint_path = cli.blueprint_path.clone().unwrap_or_else(|| {
        exit_with_error("A blueprint path is required unless --list-kinds is given.");
    });
    let config = resolve_config(&cli);
    run(&blueprint_path, config);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merges the optional config file with command-line overrides.
fn resolve_config(cli: &Cli) -> RunConfig {
    let mut config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
            });
            serde_json::from_str(&content)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)))
        }
        None => RunConfig::default(),
    };
    if let Some(max_steps) = cli.max_steps {
        config.max_steps = max_steps;
    }
    if let Some(max_loop_iterations) = cli.max_loop_iterations {
        config.max_loop_iterations = max_loop_iterations;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config
}

fn run(blueprint_path: &str, config: RunConfig) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let load_start = Instant::now();
    let blueprint = Blueprint::from_file(blueprint_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load blueprint: {}", e)));
    let load_duration = load_start.elapsed();

    // --- 2. Execution ---
    let interpreter = Interpreter::builder().with_config(config).build();
    let run_start = Instant::now();
    let report = interpreter.run_blueprint(&blueprint);
    let run_duration = run_start.elapsed();

    // --- 3. Output ---
    for line in report.lines() {
        println!("{}", line);
    }

    println!("\n--- Run Summary ---");
    println!("Nodes:                {}", blueprint.nodes.len());
    println!("Wires:                {}", blueprint.wires.len());
    println!("Outcome:              {:?}", report.outcome);
    println!("Steps:                {}", report.steps);
    println!("Trace lines:          {}", report.entries().len());
    println!("Warnings:             {}", report.warnings().len());
    println!("Errors:               {}", report.errors().len());
    println!("\n--- Performance Summary ---");
    println!("Blueprint Loading:    {:?}", load_duration);
    println!("Execution:            {:?}", run_duration);
    println!("-----------------------------");
    println!("Total:                {:?}", total_start.elapsed());
}

fn list_kinds() {
    for kind in NodeKind::ALL {
        let role = if kind.is_exec_bearing() && kind.produces_data() {
            "exec+data"
        } else if kind.is_exec_bearing() {
            "exec"
        } else {
            "data"
        };
        println!("{:<20} {:<10} {}", kind.name(), role, kind.default_title());
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
