// SPDX-FileCopyrightText: 2025 Nomadic Labs <contact@nomadic-labs.com>
// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

use std::path::Path;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Debug, Clone, Subcommand)]
pub enum Mode {
    /// Run the conformance suites against the selected backend
    Run(RunOptions),
}

/// Operation suite selector
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum Op {
    Divw,
    Divuw,
    Remw,
    Remuw,
}

/// Backend executing the operations under test
#[derive(Clone, Copy, ValueEnum, Debug)]
pub enum Backend {
    /// Software oracle backed by the reference model
    Oracle,
}

#[derive(Debug, Clone, Parser)]
pub struct Cli {
    /// Configure the log level
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,

    /// Log to a JSON file
    #[arg(long)]
    pub log_json_file: Option<Box<Path>>,

    #[command(subcommand)]
    pub command: Mode,
}

#[derive(Debug, Clone, Parser)]
pub struct RunOptions {
    /// Suites to run; defaults to all of them, in the fixed order
    #[arg(long = "op", value_enum, num_args = 1..)]
    pub ops: Vec<Op>,

    /// Number of additional random operand pairs per operation
    #[arg(long, default_value_t = 10_000)]
    pub random_cases: usize,

    /// Seed for the random operand generator
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Backend to execute the operations on
    #[arg(long, value_enum, default_value_t = Backend::Oracle)]
    pub backend: Backend,

    /// Name of the file to save the run report
    #[arg(long)]
    pub output: Option<Box<Path>>,
}

/// Parse the command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
