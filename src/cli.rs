//! Command-line interface for the dlprobe harness.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dlprobe")]
#[command(about = "Probe dynamic-library symbol resolution and calling conventions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the decorated name for a declaration
    Mangle {
        /// Declaration path, e.g. `my::ns::C::g_int_int`
        name: String,

        /// What kind of declaration this is
        #[arg(long, value_enum, default_value_t = KindArg::Free)]
        kind: KindArg,

        /// Parameter types, repeatable: int, uint64, cstr, wcstr, str, ...
        #[arg(long = "param")]
        params: Vec<String>,

        /// Return type
        #[arg(long, default_value = "int")]
        ret: String,

        /// Character set resolving the `str` pseudo-type
        #[arg(long, value_enum, default_value_t = CharsetArg::Unicode)]
        charset: CharsetArg,

        /// Target triple the name scheme applies to
        #[arg(long, default_value = "x86_64-pc-windows-msvc")]
        target: String,
    },

    /// Print the fixture's expected export table
    Exports {
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a fixture library and verify every export against its contract
    Check {
        /// Path to the built fixture (.so / .dll / .dylib)
        library: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Free,
    Static,
    Instance,
    ConstInstance,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CharsetArg {
    Ansi,
    Unicode,
}
