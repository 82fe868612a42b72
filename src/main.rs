// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

mod apperr;
mod generate;
mod shaping;
mod table;

use std::io::{self, Write as IoWrite};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, bail};

use crate::generate::{Language, Output};
use crate::table::DEFAULT_MIN_OCCUPANCY;

const HELP: &str = "\
Usage: joining-table-gen [options...] <ArabicShaping.txt>
  -h, --help                Prints help information
  --lang=<c|rust>           Output language (default: c)
  --min-occupancy=<PCT>     Reject tables less dense than PCT percent (default: 40)

Download ArabicShaping.txt at:
  https://www.unicode.org/Public/UCD/latest/ucd/ArabicShaping.txt
";

#[derive(Debug)]
struct Config {
    help: bool,
    lang: Language,
    min_occupancy: Option<u32>,
    input: Option<PathBuf>,
}

fn parse_args(mut args: pico_args::Arguments) -> anyhow::Result<Config> {
    let config = Config {
        help: args.contains(["-h", "--help"]),
        lang: args
            .opt_value_from_fn("--lang", |arg| match arg {
                "c" => Ok(Language::C),
                "rust" => Ok(Language::Rust),
                l => bail!("invalid language: \"{}\"", l),
            })?
            .unwrap_or_default(),
        min_occupancy: args.opt_value_from_fn("--min-occupancy", |arg| match arg.parse::<u32>() {
            Ok(pct @ 0..=100) => Ok(pct),
            _ => bail!("invalid occupancy percentage: \"{}\"", arg),
        })?,
        input: args.opt_free_from_os_str(|s| -> Result<PathBuf, &'static str> { Ok(s.into()) })?,
    };

    let arg_remaining = args.finish();
    if !arg_remaining.is_empty() {
        bail!("unrecognized arguments: {:?}", arg_remaining);
    }

    Ok(config)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = parse_args(pico_args::Arguments::from_env())?;
    let status = run(config, &mut io::stdout().lock(), &mut io::stderr())?;
    Ok(ExitCode::from(status))
}

/// Generates the table described by `config` into `stdout`.
///
/// Returns the process exit status. Nothing is written to `stdout` unless the table is valid.
fn run(config: Config, stdout: &mut dyn IoWrite, stderr: &mut dyn IoWrite) -> anyhow::Result<u8> {
    if config.help {
        stderr.write_all(HELP.as_bytes())?;
        return Ok(0);
    }
    let Some(path) = config.input else {
        stderr.write_all(HELP.as_bytes())?;
        return Ok(1);
    };

    let input = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let table = table::build_table(&input, config.min_occupancy.unwrap_or(DEFAULT_MIN_OCCUPANCY))
        .with_context(|| format!("failed to generate table from {}", path.display()))?;
    log::info!(
        "{} entries for U+{:04X}..=U+{:04X}, {} records, {}% occupancy",
        table.len(),
        table.first(),
        table.last(),
        table.records(),
        table.occupancy(),
    );

    let out = Output {
        arg_lang: config.lang,
        arg_min_occupancy: config.min_occupancy,
        arg_input: path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
        table,
    };
    let buf = generate::generate(&out);

    stdout.write_all(buf.as_bytes())?;
    Ok(0)
}
