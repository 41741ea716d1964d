//! CLI surface, modeled on `wasmtime-cli-flags`' single parsed-options
//! struct threaded through every subcommand.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clarityc", version, about = "Clarity compiler and host runtime")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log every host import call (name, duration) at debug level,
    /// independent of the guest-visible audit log.
    #[arg(long, global = true)]
    pub trace_imports: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lower a resolved IR module (JSON) to a WASM binary.
    Compile {
        /// Path to a JSON-serialized `clarity_ir::Module`.
        ir: PathBuf,
        #[arg(short, long, default_value = "out.wasm")]
        output: PathBuf,
    },
    /// Instantiate a compiled module and call an exported entry point.
    Run {
        wasm: PathBuf,
        #[arg(long, default_value = "main")]
        entry: String,
    },
    /// Disassemble a compiled module back to WAT text.
    Explore { wasm: PathBuf },
}

pub fn run(cli: Cli) -> Result<()> {
    if cli.trace_imports {
        tracing::debug!("host import tracing enabled");
    }
    match cli.command {
        Command::Compile { ir, output } => {
            crate::compile_file(&ir, &output)?;
            println!("wrote {}", output.display());
            Ok(())
        }
        Command::Run { wasm, entry } => {
            let result = crate::run_module(&wasm, &entry)?;
            println!("{result}");
            Ok(())
        }
        Command::Explore { wasm } => {
            let wat = crate::explore_module(&wasm)?;
            println!("{wat}");
            Ok(())
        }
    }
}
