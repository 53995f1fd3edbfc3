use log::{debug, warn};

use super::{GroupingKey, MicroBenchmarkDetails, MicroBenchmarkResult};
use crate::stats::{median, median_u64};

/// Collapses repeated measurements of a benchmark into a single result.
#[derive(Debug, Default, Clone, Copy)]
pub struct Reducer {
    grouping: GroupingKey,
}

impl Reducer {
    pub fn new(grouping: GroupingKey) -> Self {
        Self { grouping }
    }

    pub fn grouping(&self) -> GroupingKey {
        self.grouping
    }

    /// Merge every run of samples sharing the grouping key into one result
    /// whose metrics are the per-metric medians of the run.
    ///
    /// Samples are ordered by package name, then by name. Each metric median
    /// is computed independently, so the values of a reduced result may come
    /// from different samples. The package, name and git ref of the first
    /// sample of each group are kept.
    pub fn reduce(&self, mut samples: Vec<MicroBenchmarkDetails>) -> Vec<MicroBenchmarkDetails> {
        samples.sort_by(|a, b| a.id.name.cmp(&b.id.name));
        samples.sort_by(|a, b| a.id.package_name.cmp(&b.id.package_name));

        let reduced = samples
            .chunk_by(|a, b| self.grouping.same_group(a, b))
            .filter_map(reduce_group)
            .collect::<Vec<_>>();
        debug!(
            "Reduced {} samples into {} results (grouping by {:?})",
            samples.len(),
            reduced.len(),
            self.grouping
        );
        reduced
    }
}

fn reduce_group(group: &[MicroBenchmarkDetails]) -> Option<MicroBenchmarkDetails> {
    let first = group.first()?;
    if group.iter().any(|s| s.git_ref != first.git_ref) {
        warn!(
            "Benchmark {} mixes samples from several git refs, keeping {}",
            first.id.name, first.git_ref
        );
    }

    let result = MicroBenchmarkResult {
        ops: median_u64(group.iter().map(|s| s.result.ops))?,
        ns_per_op: median(group.iter().map(|s| s.result.ns_per_op))?,
        mb_per_sec: median(group.iter().map(|s| s.result.mb_per_sec))?,
        bytes_per_op: median(group.iter().map(|s| s.result.bytes_per_op))?,
        allocs_per_op: median(group.iter().map(|s| s.result.allocs_per_op))?,
    };

    Some(MicroBenchmarkDetails::new(
        first.id.clone(),
        first.git_ref.clone(),
        result,
    ))
}
