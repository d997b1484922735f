//! Metadata forest: loading from disk and merging attributes from each leaf
//! up through its ancestors.

pub mod error;
pub mod load;
pub mod merge;

pub use error::{Result, TreeError};
pub use load::{METADATA_FILE, compare_ids, load_tree};
pub use merge::{MergedRecord, resolve};
