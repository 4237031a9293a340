//! MIPS-subset assembler and simulator CLI.
//!
//! This binary provides a single entry point for the software flow. It
//! performs:
//! 1. **Assemble:** Translate a source file to machine words and emit
//!    the Verilog instruction-memory image.
//! 2. **Run:** Assemble a source file (or recover words from an
//!    existing memory image), simulate it cycle-by-cycle, and report
//!    the trace, the analysis summary, and the final register state.

use clap::{Parser, Subcommand};
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

use mips_core::asm::{assemble, memory_init_block};
use mips_core::isa::disasm::disassemble;
use mips_core::sim::loader;
use mips_core::stats;
use mips_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "masm",
    author,
    version,
    about = "MIPS-subset assembler and cycle-level simulator",
    long_about = "Assemble a MIPS-subset source file, or simulate one and inspect the\nper-cycle trace.\n\nExamples:\n  masm asm programs/fib.s -o InstructionMemory_init.v\n  masm run programs/fib.s --max-cycles 100 --trace\n  masm run InstructionMemory_init.v --hex --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a source file and emit the Verilog memory image.
    Asm {
        /// Assembly source file.
        file: String,

        /// Write the Verilog memory block to this file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Print only the machine-code listing, no Verilog block.
        #[arg(long)]
        bare: bool,
    },

    /// Assemble (or load) a program and simulate it.
    Run {
        /// Assembly source file, or memory-image text with --hex.
        file: String,

        /// Treat the input as memory-image text and extract hex words.
        #[arg(long)]
        hex: bool,

        /// Hard cap on executed cycles (overrides the config value).
        #[arg(long)]
        max_cycles: Option<u64>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<String>,

        /// Export the trace and summary as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Print the per-cycle trace lines (also enabled by the config).
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Asm { file, output, bare } => cmd_asm(&file, output.as_deref(), bare),
        Commands::Run {
            file,
            hex,
            max_cycles,
            config,
            json,
            trace,
        } => cmd_run(&file, hex, max_cycles, config.as_deref(), json, trace),
    }
}

/// Reads a text file, exiting with a report when it cannot be read.
fn read_text(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: Could not read file '{path}': {e}");
        process::exit(1);
    })
}

/// Assembles a source file, exiting with the failing line on error.
fn assemble_or_exit(path: &str) -> Vec<u32> {
    let source = read_text(path);
    assemble(&source).unwrap_or_else(|e| {
        eprintln!("\n[!] Assembly failed: {e}");
        process::exit(1);
    })
}

/// Loads the run configuration, exiting on unreadable or invalid JSON.
fn load_config(path: Option<&str>) -> Config {
    path.map_or_else(Config::default, |p| {
        Config::from_json(&read_text(p)).unwrap_or_else(|e| {
            eprintln!("\n[!] FATAL: Invalid config '{p}': {e}");
            process::exit(1);
        })
    })
}

fn cmd_asm(file: &str, output: Option<&str>, bare: bool) {
    let words = assemble_or_exit(file);
    let config = Config::default();

    println!("Assembled {} instruction(s)", words.len());
    for (i, word) in words.iter().enumerate() {
        println!("  [{i:2}] 0x{word:08X}  {}", disassemble(*word));
    }

    if bare {
        return;
    }

    let block = memory_init_block(&words, config.memory_slots);
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &block) {
                eprintln!("\n[!] FATAL: Could not write '{path}': {e}");
                process::exit(1);
            }
            println!("Memory image written to {path}");
        }
        None => println!("\n{block}"),
    }
}

fn cmd_run(
    file: &str,
    hex: bool,
    max_cycles: Option<u64>,
    config_path: Option<&str>,
    json: bool,
    trace: bool,
) {
    let config = load_config(config_path);
    let cap = max_cycles.unwrap_or(config.max_cycles);
    let show_trace = trace || config.trace;

    let words = if hex {
        loader::extract_words(&read_text(file))
    } else {
        assemble_or_exit(file)
    };

    let mut sim = Simulator::new(words);
    let steps = sim.run(cap);
    let summary = stats::analyze(&steps);

    if json {
        let report = serde_json::json!({ "trace": steps, "summary": summary });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("\n[!] FATAL: Could not serialize report: {e}");
                process::exit(1);
            }
        }
        return;
    }

    if show_trace {
        for step in &steps {
            println!(
                "cycle {:>4}: pc={:04X} {:08X}  {}",
                step.cycle,
                step.pc,
                step.word,
                disassemble(step.word)
            );
        }
    }

    summary.print();

    println!("\nFinal register state:");
    sim.cpu.regs.dump();
}
