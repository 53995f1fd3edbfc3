use serde::{Deserialize, Serialize};

/// Identifies "the same" benchmark across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BenchmarkId {
    pub package_name: String,
    pub name: String,
}

impl BenchmarkId {
    pub fn new(package_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            name: name.into(),
        }
    }
}

/// All the metrics measured by one microbenchmark execution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MicroBenchmarkResult {
    pub ops: u64,
    pub ns_per_op: f64,
    #[serde(default)]
    pub mb_per_sec: f64,
    #[serde(default)]
    pub bytes_per_op: f64,
    #[serde(default)]
    pub allocs_per_op: f64,
}

impl MicroBenchmarkResult {
    pub fn new(
        ops: u64,
        ns_per_op: f64,
        mb_per_sec: f64,
        bytes_per_op: f64,
        allocs_per_op: f64,
    ) -> Self {
        Self {
            ops,
            ns_per_op,
            mb_per_sec,
            bytes_per_op,
            allocs_per_op,
        }
    }
}

/// A single microbenchmark result at a given git reference.
///
/// Raw measurements and reduced results share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroBenchmarkDetails {
    #[serde(flatten)]
    pub id: BenchmarkId,
    pub git_ref: String,
    pub result: MicroBenchmarkResult,
}

impl MicroBenchmarkDetails {
    pub fn new(id: BenchmarkId, git_ref: impl Into<String>, result: MicroBenchmarkResult) -> Self {
        Self {
            id,
            git_ref: git_ref.into(),
            result,
        }
    }
}

/// Two results sharing the same [`BenchmarkId`], one from the current set
/// and one from the baseline set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroBenchmarkComparison {
    #[serde(flatten)]
    pub id: BenchmarkId,
    pub current: MicroBenchmarkResult,
    /// `None` when the baseline has no result for this benchmark.
    pub baseline: Option<MicroBenchmarkResult>,
    /// `baseline.ns_per_op / current.ns_per_op`, above 1 when current is faster.
    ///
    /// `1.0` when there is no baseline, `None` when the current time per
    /// operation is zero and the ratio is undefined.
    pub ratio: Option<f64>,
}

/// How measurements are grouped together before being reduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupingKey {
    /// Group by benchmark name only: same-named benchmarks of different
    /// packages end up merged when they are adjacent after sorting.
    #[default]
    Name,
    /// Group by the full `(package_name, name)` identity.
    Identity,
}

impl GroupingKey {
    pub(super) fn same_group(&self, a: &MicroBenchmarkDetails, b: &MicroBenchmarkDetails) -> bool {
        match self {
            GroupingKey::Name => a.id.name == b.id.name,
            GroupingKey::Identity => a.id == b.id,
        }
    }
}
