use std::fs;
use std::path::Path;

use crate::prelude::*;
use microbench::{MicroBenchmarkDetails, Release};

/// Read a JSON array of measurements.
pub fn read_measurements(path: &Path) -> Result<Vec<MicroBenchmarkDetails>> {
    let content =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let measurements: Vec<MicroBenchmarkDetails> = serde_json::from_slice(&content)
        .with_context(|| format!("Failed to parse measurements from {}", path.display()))?;
    debug!(
        "Loaded {} measurements from {}",
        measurements.len(),
        path.display()
    );
    Ok(measurements)
}

/// Parse the output of `git ls-remote --tags <repository>` into releases.
///
/// Only `vMAJOR.MINOR.PATCH` tags are kept. For annotated tags the peeled
/// `^{}` entry replaces the tag object hash with the tagged commit hash.
pub fn parse_ls_remote_tags(output: &str) -> Result<Vec<Release>> {
    let mut releases: Vec<Release> = Vec::new();

    for (line_no, line) in output.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(hash), Some(tag_ref), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Unexpected ls-remote output on line {}: {line}", line_no + 1);
        };

        match tag_ref.strip_suffix("^{}") {
            Some(tag_ref) => {
                if let Some(peeled) = Release::from_tag_ref(tag_ref, hash) {
                    match releases.iter_mut().find(|r| r.name == peeled.name) {
                        Some(release) => release.commit_hash = peeled.commit_hash,
                        None => releases.push(peeled),
                    }
                }
            }
            None => {
                if let Some(release) = Release::from_tag_ref(tag_ref, hash) {
                    releases.push(release);
                }
            }
        }
    }

    debug!("Found {} release tags", releases.len());
    Ok(releases)
}
