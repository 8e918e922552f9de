// Copyright (c) The petrick-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{details::FixtureBatch, value_generator::ValueGenerator};
use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::{
    eyre::{bail, WrapErr},
    Result,
};
use log::info;
use once_cell::sync::Lazy;
use petrick_min::{solve, two_line_fields};
use std::fs;

pub struct AllFixtures {
    dir: Utf8PathBuf,
}

static ALL_FIXTURES_STATIC: Lazy<AllFixtures> = Lazy::new(AllFixtures::init);

impl AllFixtures {
    pub fn get() -> &'static Self {
        &*ALL_FIXTURES_STATIC
    }

    fn init() -> Self {
        let dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
        Self { dir }
    }

    pub fn inputs_dir(&self) -> Utf8PathBuf {
        self.dir.join("inputs")
    }

    pub fn outputs_dir(&self) -> Utf8PathBuf {
        self.dir.join("outputs")
    }

    /// Generates `count` batches from a fixed seed. The same count always gives the same batches.
    pub fn generate_batches(count: usize) -> Result<Vec<FixtureBatch>> {
        let mut value_gen = ValueGenerator::from_seed("petrick-min_4");
        (0..count)
            .map(|_| {
                let mut gen = value_gen.partial_clone();
                gen.generate(FixtureBatch::strategy(3, 6, 6))
            })
            .collect()
    }

    /// Writes `count` generated batches to the inputs directory, replacing existing inputs.
    pub fn generate_inputs(&self, count: usize) -> Result<()> {
        let inputs_dir = self.inputs_dir();
        if inputs_dir.exists() {
            fs::remove_dir_all(&inputs_dir)
                .wrap_err_with(|| format!("failed to clear {}", inputs_dir))?;
        }
        fs::create_dir_all(&inputs_dir)
            .wrap_err_with(|| format!("failed to create {}", inputs_dir))?;

        for (ix, batch) in Self::generate_batches(count)?.iter().enumerate() {
            let path = inputs_dir.join(fixture_file_name(ix));
            fs::write(&path, batch.to_string())
                .wrap_err_with(|| format!("failed to write {}", path))?;
        }

        info!("wrote {} inputs to {}", count, inputs_dir);
        Ok(())
    }

    /// Solves every input and writes its report to the outputs directory.
    pub fn generate_outputs(&self) -> Result<()> {
        let outputs_dir = self.outputs_dir();
        fs::create_dir_all(&outputs_dir)
            .wrap_err_with(|| format!("failed to create {}", outputs_dir))?;

        let inputs = self.input_paths()?;
        for input in &inputs {
            let content = fs::read_to_string(input)
                .wrap_err_with(|| format!("failed to read {}", input))?;
            let (pi_text, minterms_text) = match two_line_fields(&content) {
                Some(fields) => fields,
                None => bail!("{}: fixture inputs must have two lines", input),
            };

            let file_name = match input.file_name() {
                Some(file_name) => file_name,
                None => bail!("{}: input path has no file name", input),
            };
            let output = outputs_dir.join(file_name);
            let mut report = solve(pi_text, minterms_text);
            report.push('\n');
            fs::write(&output, report).wrap_err_with(|| format!("failed to write {}", output))?;
        }

        info!("wrote {} outputs to {}", inputs.len(), outputs_dir);
        Ok(())
    }

    fn input_paths(&self) -> Result<Vec<Utf8PathBuf>> {
        let inputs_dir = self.inputs_dir();
        let mut paths = Vec::new();
        for entry in
            fs::read_dir(&inputs_dir).wrap_err_with(|| format!("failed to read {}", inputs_dir))?
        {
            let path = Utf8PathBuf::try_from(entry?.path())?;
            if path.extension() == Some("txt") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn fixture_file_name(ix: usize) -> String {
    format!("{:04}.txt", ix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_deterministic() {
        let first = AllFixtures::generate_batches(8).unwrap();
        let second = AllFixtures::generate_batches(8).unwrap();
        let first: Vec<_> = first.iter().map(|batch| batch.to_string()).collect();
        let second: Vec<_> = second.iter().map(|batch| batch.to_string()).collect();
        assert_eq!(first, second, "same seed gives the same batches");
    }

    #[test]
    fn test_generated_batches_solve() {
        for batch in AllFixtures::generate_batches(16).unwrap() {
            let text = batch.to_string();
            let (pi_text, minterms_text) =
                two_line_fields(&text).expect("generated batches have two lines");
            let report = solve(pi_text, minterms_text);
            assert_eq!(
                report.lines().count(),
                batch.problems().len(),
                "one report line per output for:\n{}",
                text
            );
        }
    }

    #[test]
    fn test_fixture_file_name() {
        assert_eq!(fixture_file_name(7), "0007.txt");
    }
}
