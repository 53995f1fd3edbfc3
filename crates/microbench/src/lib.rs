//! Reduction and comparison of microbenchmark results.
//!
//! Raw measurements are collapsed into one median result per benchmark with
//! [`Reducer`], two reduced sets are merged with [`Comparator`], and the
//! baseline release is picked with [`ReleaseSelector`].

mod error;
pub mod release;
pub mod results;
pub mod stats;
pub mod version;

pub use error::{Error, Result};
pub use release::{Release, ReleaseSelector};
pub use results::{
    BenchmarkId, Comparator, GroupingKey, MicroBenchmarkComparison, MicroBenchmarkDetails,
    MicroBenchmarkResult, Reducer,
};
pub use version::Version;
