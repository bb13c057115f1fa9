//! qgate - quantum gate simulator
//! Command-line interface for composing X/H/CNOT circuits and inspecting the state

mod command;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use command::{HELP, SessionCommand};
use qgate_core::{Gate, MAX_QUBITS, SimulatorConfig};
use serde_json::json;
use session::Session;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qgate")]
#[command(version)]
#[command(about = "qgate - statevector simulator for X, H and CNOT gates", long_about = None)]
struct Cli {
    /// Number of qubits in the register (overrides the config file)
    #[arg(short = 'n', long, global = true, value_name = "N")]
    qubits: Option<usize>,

    /// TOML config file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for measurement sampling (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply gates in order and print the resulting state
    Run {
        /// Gates such as "h:0", "x 1" or "cnot:0,1"
        #[arg(value_name = "GATE", required = true)]
        gates: Vec<String>,

        /// Sample this many measurements after the circuit
        #[arg(short, long)]
        shots: Option<usize>,

        /// Measure the register once after the circuit (collapses the state)
        #[arg(short, long)]
        measure: bool,

        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive session reading commands from stdin
    Session,

    /// Walk through the X, H and CNOT examples
    Demo,

    /// Show information about qgate
    Info,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qgate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = load_config(&cli).and_then(|config| match cli.command {
        Commands::Run {
            gates,
            shots,
            measure,
            json,
        } => run_command(config, &gates, shots, measure, json),
        Commands::Session => session_command(config),
        Commands::Demo => demo_command(config),
        Commands::Info => {
            print_info();
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Config file first, then command-line overrides
fn load_config(cli: &Cli) -> Result<SimulatorConfig> {
    let mut config = match &cli.config {
        Some(path) => SimulatorConfig::from_file(path)?,
        None => SimulatorConfig::default(),
    };

    if let Some(qubits) = cli.qubits {
        config.num_qubits = qubits;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

// ============================================================================
// Commands
// ============================================================================

fn run_command(
    config: SimulatorConfig,
    gates: &[String],
    shots: Option<usize>,
    measure: bool,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(config)?;

    let parsed = gates
        .iter()
        .enumerate()
        .map(|(i, text)| {
            text.parse::<Gate>()
                .with_context(|| format!("gate #{} '{}'", i + 1, text))
        })
        .collect::<Result<Vec<Gate>>>()?;

    for (i, gate) in parsed.iter().enumerate() {
        session
            .apply(*gate)
            .with_context(|| format!("gate #{} {}", i + 1, gate))?;
    }

    let counts = shots.map(|n| session.counts(Some(n)));
    let outcome = measure.then(|| session.measure());

    if json {
        let state = session.state();
        let summary = json!({
            "num_qubits": state.num_qubits(),
            "gates": parsed,
            "history": session.history(),
            "ket": state.to_string(),
            "amplitudes": state.amplitudes().iter().map(|a| [a.re, a.im]).collect::<Vec<_>>(),
            "probabilities": state.probabilities(),
            "bloch": session.bloch(),
            "counts": counts,
            "measurement": outcome,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let precision = session.config().precision;
    render::print_history(session.history());
    println!();
    render::print_state(session.state(), precision);
    println!();
    render::print_bloch(&session.bloch(), precision, session.config().tolerance);

    if let Some(counts) = &counts {
        println!();
        render::print_counts(counts);
    }
    if let Some(label) = outcome {
        println!();
        println!("{} |{}⟩", "Measured:".bold(), label.cyan());
    }

    Ok(())
}

fn session_command(config: SimulatorConfig) -> Result<()> {
    let mut session = Session::new(config)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!(
            "{} {}-qubit register. Type 'help' for commands.",
            "qgate".green().bold(),
            session.state().num_qubits()
        );
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", "qgate>".cyan());
            io::stdout().flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{} {:#}", "error:".red().bold(), e);
                continue;
            }
        };

        if !execute(&mut session, command) {
            break;
        }
    }

    Ok(())
}

/// Runs one session command. Returns false when the session should end.
fn execute(session: &mut Session, command: SessionCommand) -> bool {
    let precision = session.config().precision;

    match command {
        SessionCommand::Apply(gate) => match session.apply(gate) {
            Ok(()) => println!("{} {}", "✓".green(), gate.describe()),
            Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
        },
        SessionCommand::Reset => {
            session.reset();
            println!("{} {}", "✓".green(), session::RESET_ENTRY);
        }
        SessionCommand::State => render::print_state(session.state(), precision),
        SessionCommand::Bloch => {
            render::print_bloch(&session.bloch(), precision, session.config().tolerance)
        }
        SessionCommand::Measure => {
            let label = session.measure();
            println!("{} |{}⟩", "Measured:".bold(), label.cyan());
        }
        SessionCommand::Counts(shots) => render::print_counts(&session.counts(shots)),
        SessionCommand::History => render::print_history(session.history()),
        SessionCommand::Help => println!("{HELP}"),
        SessionCommand::Quit => return false,
    }

    true
}

fn demo_command(config: SimulatorConfig) -> Result<()> {
    let mut session = Session::new(config)?;
    let precision = session.config().precision;

    let examples: [(&str, &[Gate]); 3] = [
        ("X Gate", &[Gate::X(0)]),
        ("Hadamard Gate", &[Gate::H(0)]),
        ("CNOT Gate", &[Gate::X(0), Gate::Cnot { control: 0, target: 1 }]),
    ];

    for (i, (title, gates)) in examples.iter().enumerate() {
        if i > 0 {
            session.reset();
            println!();
        }

        println!("{}", format!("Example {}: {}", i + 1, title).bold().underline());
        for gate in gates.iter() {
            session.apply(*gate)?;
            println!("  {} {}", "→".cyan(), gate.describe());
        }
        println!();
        render::print_state(session.state(), precision);
        println!();
        render::print_bloch(&session.bloch(), precision, session.config().tolerance);
    }

    Ok(())
}

fn print_info() {
    println!("{}", "qgate - quantum gate simulator".bold());
    println!();
    println!("Dense statevector engine with per-qubit Bloch projection.");
    println!();
    println!("{}", "Gates:".bold());
    println!("  • {} X     NOT on one qubit", "✓".green());
    println!("  • {} H     Hadamard on one qubit", "✓".green());
    println!("  • {} CNOT  controlled NOT on two distinct qubits", "✓".green());
    println!();
    println!("{}", "Limits:".bold());
    println!("  register size     1..={MAX_QUBITS} qubits (default 2)");
    println!("  basis ordering    qubit 0 is the rightmost bit of |…⟩");
    println!();
    println!("{}", "Examples:".bold());
    println!("  qgate run h:0 cnot:0,1           # Bell pair");
    println!("  qgate run h:0 --shots 1000       # Sample counts");
    println!("  qgate -n 3 session               # Interactive 3-qubit session");
    println!("  qgate demo                       # Guided walkthrough");
}
