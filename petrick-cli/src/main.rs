// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use petrick_cli::PetrickApp;

fn main() -> Result<()> {
    color_eyre::install()?;
    let app = PetrickApp::parse();
    app.exec()
}
