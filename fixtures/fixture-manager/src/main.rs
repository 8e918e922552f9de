// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use fixture_manager::FixtureManagerApp;

fn main() -> Result<()> {
    color_eyre::install()?;
    FixtureManagerApp::parse().exec()
}
