//! Pure derivation of the displayed symbol list. Both operations are
//! total; there is no failure path at this layer.

use sigil_catalog::{Category, symbols};

/// The ordered identifier list for a category.
///
/// The sentinel concatenates every concrete category's list in catalog
/// enumeration order, unsorted and undeduplicated. Concrete categories
/// return exactly their catalog entry.
pub fn compute_list(category: Category) -> Vec<&'static str> {
	match category {
		Category::All => Category::concrete().flat_map(|category| symbols(category).iter().copied()).collect(),
		concrete => symbols(concrete).to_vec(),
	}
}

/// Order-preserving, case-insensitive substring filter.
///
/// An empty query is the identity; the input passes through untouched.
pub fn apply_search(list: Vec<&'static str>, query: &str) -> Vec<&'static str> {
	if query.is_empty() {
		return list;
	}

	let needle = query.to_lowercase();
	list.into_iter().filter(|symbol| symbol.to_lowercase().contains(&needle)).collect()
}
