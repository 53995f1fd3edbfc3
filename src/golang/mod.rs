use crate::prelude::*;
use microbench::{BenchmarkId, MicroBenchmarkDetails};

mod parser;

/// Turn the output of `go test -json -bench . -benchmem` into raw
/// measurements attributed to `git_ref`.
pub fn parse_go_test_json(stdout: &str, git_ref: &str) -> Result<Vec<MicroBenchmarkDetails>> {
    let measurements = parser::RawOutput::parse(stdout)?
        .into_iter()
        .map(|(package, raw)| {
            MicroBenchmarkDetails::new(BenchmarkId::new(package, raw.name), git_ref, raw.result)
        })
        .collect::<Vec<_>>();
    debug!("Parsed {} benchmark measurements", measurements.len());

    Ok(measurements)
}
