// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use fixture_details::AllFixtures;

#[derive(Debug, Parser)]
pub struct FixtureManagerApp {
    #[clap(subcommand)]
    command: FixtureManagerCommand,
}

#[derive(Debug, Parser)]
pub enum FixtureManagerCommand {
    /// Generate random input batches, replacing any existing ones.
    GenerateInputs {
        #[clap(long, short, default_value_t = 64)]
        count: usize,
    },
    /// Solve every input batch and write the reports.
    GenerateOutputs,
}

impl FixtureManagerApp {
    pub fn exec(self) -> Result<()> {
        self.command.exec()
    }
}

impl FixtureManagerCommand {
    pub fn exec(self) -> Result<()> {
        let fixtures = AllFixtures::get();
        match self {
            Self::GenerateInputs { count } => {
                fixtures.generate_inputs(count)?;
                println!("generated {} inputs in {}", count, fixtures.inputs_dir());
                Ok(())
            }
            Self::GenerateOutputs => {
                fixtures.generate_outputs()?;
                println!("generated outputs in {}", fixtures.outputs_dir());
                Ok(())
            }
        }
    }
}
