//! Pipeline transformations: structural normalization, row cleaning,
//! type inference, and dataset merging.

mod clean;
mod infer;
mod merge;
mod unmerge;

pub use clean::{RowCleanStats, RowCleaner};
pub use infer::{ColumnInference, InferenceConfig, ParseNumberError, TypeInferencer, parse_number};
pub use merge::merge_datasets;
pub use unmerge::resolve_merges;
