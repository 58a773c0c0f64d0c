// SPDX-FileCopyrightText: 2025 Nomadic Labs <contact@nomadic-labs.com>
// SPDX-FileCopyrightText: 2025 TriliTech <contact@trili.tech>
//
// SPDX-License-Identifier: MIT

mod cli;
mod commands;

use std::error::Error;

use rv64_conformance::dut::WordOp;

use self::commands::run;

/// Convert the CLI suite selector.
pub fn word_op(op: &cli::Op) -> WordOp {
    match op {
        cli::Op::Divw => WordOp::Divw,
        cli::Op::Divuw => WordOp::Divuw,
        cli::Op::Remw => WordOp::Remw,
        cli::Op::Remuw => WordOp::Remuw,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = cli::parse();

    let subscriber_builder = tracing_subscriber::fmt()
        .without_time()
        .with_max_level(cli.log_level);

    match cli.log_json_file {
        Some(log_json_file) => {
            let file = std::fs::File::create(log_json_file)?;
            let subscriber = subscriber_builder.json().with_writer(file).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }

        None => {
            let subscriber = subscriber_builder.with_writer(std::io::stderr).finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    match cli.command {
        cli::Mode::Run(opts) => Ok(run(opts)?),
    }
}
