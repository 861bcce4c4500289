//! Lisp-to-C Compiler CLI
//!
//! Main entry point for the `lc` command.

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "lc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A minimal Lisp-to-C compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a source file to C
    Compile {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Write the generated C to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print an intermediate artifact instead of the generated C
        #[arg(long, value_enum)]
        emit: Option<EmitType>,
    },

    /// Compile expressions interactively, line by line
    Repl,

    /// Show information about the compiler
    Info,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum EmitType {
    /// Token stream (JSON)
    Tokens,
    /// Abstract Syntax Tree (JSON)
    Ast,
    /// Intermediate representation (JSON)
    Ir,
    /// Generated C source
    C,
    /// Step-by-step pipeline log
    Log,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Compile {
            input,
            output,
            emit,
        } => compile(&input, output.as_deref(), emit),

        Commands::Repl => repl(),

        Commands::Info => info(),
    }
}

fn compile(
    input: &std::path::Path,
    output: Option<&std::path::Path>,
    emit: Option<EmitType>,
) -> Result<()> {
    tracing::info!("Compiling {:?}", input);

    let source = std::fs::read_to_string(input)
        .map_err(|e| miette::miette!("Failed to read input file: {}", e))?;

    let lispc::Compilation { artifacts, log } = lispc::compile(&source);
    let artifacts = artifacts?;

    if let Some(emit_type) = emit {
        match emit_type {
            EmitType::Tokens => println!("{}", to_json(&artifacts.tokens)?),
            EmitType::Ast => println!("{}", to_json(&artifacts.ast)?),
            EmitType::Ir => println!("{}", to_json(&artifacts.ir)?),
            EmitType::C => print!("{}", artifacts.c_code),
            EmitType::Log => println!("{log}"),
        }
        return Ok(());
    }

    match output {
        Some(path) => {
            std::fs::write(path, &artifacts.c_code)
                .map_err(|e| miette::miette!("Failed to write output file: {}", e))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", artifacts.c_code),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("Failed to serialize artifact: {}", e))
}

fn repl() -> Result<()> {
    println!("Lisp-to-C REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let stdin = std::io::stdin();
    let mut line = String::new();
    let mut last_log = lispc::StepLog::new();

    loop {
        print!("lc> ");
        use std::io::Write;
        std::io::stdout().flush().ok();

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            ":quit" | ":q" => break,
            ":help" | ":h" => {
                println!("Commands:");
                println!("  :help, :h    Show this help");
                println!("  :log, :l     Show the step log of the last compile");
                println!("  :quit, :q    Exit the REPL");
                println!();
            }
            ":log" | ":l" => {
                println!("{last_log}");
            }
            _ => {
                let compilation = lispc::compile(trimmed);
                match compilation.artifacts {
                    Ok(artifacts) => print!("{}", artifacts.c_code),
                    Err(e) => eprintln!("{:?}", miette::Report::new(e)),
                }
                last_log = compilation.log;
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn info() -> Result<()> {
    println!("Lisp-to-C Compiler");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Pipeline: lex -> parse -> transform -> C codegen");
    println!();
    println!("Built-in operators (arity 2):");
    println!("  add, +        =>  +");
    println!("  subtract, -   =>  -");
    println!("  multiply, *   =>  *");
    println!("  divide, /     =>  /");
    println!();
    println!("Any other name compiles to a C function call.");

    Ok(())
}
