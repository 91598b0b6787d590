//! Locating, loading and memoizing the ACL specification document.

pub mod cache;
pub mod resolver;

pub use cache::SpecificationCache;
pub use resolver::find_up;

/// File name searched for in the start directory and its ancestors.
pub const SPEC_FILE_NAME: &str = "ACL.md";

/// MIME type the document is served with.
pub const SPEC_MIME_TYPE: &str = "text/markdown";
