use crate::prelude::*;
use lazy_static::lazy_static;
use microbench::MicroBenchmarkResult;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// One event of `go test -json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestOutput {
    #[serde(rename = "Time")]
    pub time: Option<String>,
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Package")]
    pub package: String,
    #[serde(rename = "Test")]
    pub test: Option<String>,
    #[serde(rename = "Output")]
    pub output: Option<String>,
    #[serde(rename = "Elapsed")]
    pub elapsed: Option<f64>,
}

/// A benchmark result line as printed by `go test -bench -benchmem`.
#[derive(Debug, PartialEq)]
pub struct RawOutput {
    pub name: String,
    pub result: MicroBenchmarkResult,
}

impl RawOutput {
    fn parse_output(line: &str) -> Result<Option<RawOutput>> {
        lazy_static! {
            static ref BENCHMARK_REGEX: Regex = Regex::new(
                r"^(Benchmark\S+?)(?:-\d+)?\s+(\d+)\s+([0-9.]+)\s*ns/op(?:\s+([0-9.]+)\s*MB/s)?(?:\s+([0-9.]+)\s*B/op)?(?:\s+([0-9.]+)\s*allocs/op)?"
            )
            .unwrap();
        }

        let Some(captures) = BENCHMARK_REGEX.captures(line.trim()) else {
            return Ok(None);
        };

        let name = captures
            .get(1)
            .context("Failed to get benchmark name")?
            .as_str()
            .to_string();
        let ops: u64 = captures
            .get(2)
            .context("Failed to get iterations")?
            .as_str()
            .parse()?;
        let ns_per_op: f64 = captures
            .get(3)
            .context("Failed to get time")?
            .as_str()
            .parse()?;

        Ok(Some(RawOutput {
            name,
            result: MicroBenchmarkResult {
                ops,
                ns_per_op,
                mb_per_sec: optional_metric(&captures, 4)?,
                bytes_per_op: optional_metric(&captures, 5)?,
                allocs_per_op: optional_metric(&captures, 6)?,
            },
        }))
    }

    /// Extract every benchmark result line out of a `go test -json` stream,
    /// paired with the package that produced it.
    pub fn parse(output: &str) -> Result<Vec<(String, Self)>> {
        let mut results = Vec::new();
        for (line_no, line) in output.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let event: RawTestOutput = serde_json::from_str(line)
                .with_context(|| format!("Invalid go test event on line {}", line_no + 1))?;

            if event.action != "output" {
                continue;
            }
            let Some(output_text) = &event.output else {
                continue;
            };
            let Some(measurement) = Self::parse_output(output_text)? else {
                continue;
            };

            results.push((event.package, measurement));
        }

        Ok(results)
    }
}

/// Metrics only reported with `-benchmem` or `b.SetBytes` default to zero.
fn optional_metric(captures: &Captures, index: usize) -> Result<f64> {
    match captures.get(index) {
        Some(value) => Ok(value.as_str().parse()?),
        None => Ok(0.0),
    }
}
