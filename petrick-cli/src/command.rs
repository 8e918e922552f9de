// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use log::{info, LevelFilter};
use petrick_min::{try_solve, two_line_fields, InputPolicy, Report, SearchLimit, SolveConfig};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, Write};

/// Finds minimum prime implicant covers for multi-output boolean functions.
#[derive(Debug, Parser)]
#[clap(name = "petrick")]
pub struct PetrickApp {
    /// Log more (-v for debug, -vv for trace)
    #[clap(long, short, parse(from_occurrences), global = true)]
    verbose: u64,

    #[clap(subcommand)]
    command: PetrickCommand,
}

#[derive(Debug, Subcommand)]
pub enum PetrickCommand {
    /// Solve prime implicant and minterm text given on the command line.
    Solve {
        /// Prime implicant groups, separated by `;`
        #[clap(long, default_value = "A'B, AB; A'C")]
        pi: String,

        /// Minterm groups, separated by `;`
        #[clap(long, default_value = "1,3; 2,6")]
        minterms: String,

        #[clap(flatten)]
        opts: SolveOpts,
    },

    /// Solve a file whose first line is the prime implicant text and second line the minterms.
    SolveFile {
        path: Utf8PathBuf,

        #[clap(flatten)]
        opts: SolveOpts,
    },
}

#[derive(Debug, Args)]
pub struct SolveOpts {
    /// Reject unsupported variables, bad minterms and unpaired groups instead of skipping them
    #[clap(long)]
    strict: bool,

    /// Give up after examining this many combinations for one output
    #[clap(long)]
    search_limit: Option<u64>,

    /// Print each output's covering chart before its result
    #[clap(long)]
    chart: bool,
}

impl PetrickApp {
    pub fn exec(self) -> Result<()> {
        init_logger(self.verbose)?;
        self.command.exec()
    }
}

impl PetrickCommand {
    pub fn exec(self) -> Result<()> {
        match self {
            Self::Solve { pi, minterms, opts } => opts.run(&pi, &minterms),
            Self::SolveFile { path, opts } => {
                let content = std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read {}", path))?;
                let (pi, minterms) = match two_line_fields(&content) {
                    Some(fields) => fields,
                    None => bail!(
                        "{}: expected prime implicants on line 1 and minterms on line 2",
                        path
                    ),
                };
                info!("read input from {}", path);
                opts.run(pi, minterms)
            }
        }
    }
}

impl SolveOpts {
    fn config(&self) -> SolveConfig {
        let policy = if self.strict {
            InputPolicy::Strict
        } else {
            InputPolicy::Lenient
        };
        let config = SolveConfig::new().with_policy(policy);
        match self.search_limit {
            Some(limit) => config.with_search_limit(SearchLimit::new(limit)),
            None => config,
        }
    }

    fn run(&self, pi: &str, minterms: &str) -> Result<()> {
        let report = try_solve(pi, minterms, &self.config())?;
        let stdout = io::stdout();
        self.write_report(&report, &mut stdout.lock())?;
        Ok(())
    }

    fn write_report(&self, report: &Report, out: &mut impl Write) -> io::Result<()> {
        if !self.chart {
            return writeln!(out, "{}", report);
        }
        for output in report.outputs() {
            write!(
                out,
                "{}",
                output.chart_display().with_row_separator("\n", true)
            )?;
            writeln!(out, "{}", output)?;
        }
        Ok(())
    }
}

fn init_logger(verbose: u64) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(opts: &SolveOpts, pi: &str, minterms: &str) -> String {
        let report = try_solve(pi, minterms, &opts.config()).unwrap();
        let mut out = Vec::new();
        opts.write_report(&report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_args() {
        let app = PetrickApp::parse_from(["petrick", "-vv", "solve", "--strict", "--chart"]);
        assert_eq!(app.verbose, 2);
        match app.command {
            PetrickCommand::Solve { pi, minterms, opts } => {
                assert_eq!(pi, "A'B, AB; A'C");
                assert_eq!(minterms, "1,3; 2,6");
                assert!(opts.strict);
                assert!(opts.chart);
                assert_eq!(opts.search_limit, None);
                assert_eq!(opts.config().policy, InputPolicy::Strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_write_report() {
        let opts = SolveOpts {
            strict: false,
            search_limit: None,
            chart: false,
        };
        assert_eq!(
            render(&opts, "A'C", "2, 6"),
            "F0(Minterms: [2, 6]) → Minimum SOP: A'C\n"
        );

        let opts = SolveOpts {
            chart: true,
            ..opts
        };
        assert_eq!(
            render(&opts, "A'C, AB", "2, 6"),
            " 2 | 0:A'C\n 6 | 0:A'C\nF0(Minterms: [2, 6]) → Minimum SOP: A'C\n"
        );
    }

    #[test]
    fn test_search_limit_flag() {
        let app = PetrickApp::parse_from(["petrick", "solve-file", "in.txt", "--search-limit", "8"]);
        match app.command {
            PetrickCommand::SolveFile { path, opts } => {
                assert_eq!(path.as_str(), "in.txt");
                assert_eq!(
                    opts.config().search_limit,
                    Some(SearchLimit::new(8)),
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
