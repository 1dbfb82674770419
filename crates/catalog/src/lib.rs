//! Static symbol catalog: the closed category set and the per-category
//! symbol identifier lists. Read-only, process-wide data with no lifecycle
//! beyond process start.

/// Category variants and display labels.
pub mod category;
/// Per-category symbol identifier data.
pub mod symbols;

pub use category::Category;
pub use symbols::symbols;
