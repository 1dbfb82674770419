use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// A named grouping of symbol identifiers.
///
/// `All` is the sentinel meaning "no filter" and owns no catalog entry of
/// its own. The declaration order of the concrete variants is the catalog
/// enumeration order; adding a category is a data change, not a structural
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
	All,
	Communication,
	Weather,
	Devices,
	Transportation,
	Human,
	Nature,
	Editing,
	Media,
	Commerce,
	Time,
	Health,
	Shapes,
	Arrows,
	Math,
}

impl Category {
	/// Chip text for this category. The sentinel reads "All"; concrete
	/// categories display their lowercase name.
	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All",
			other => other.into(),
		}
	}

	/// Concrete categories in catalog enumeration order, sentinel excluded.
	pub fn concrete() -> impl Iterator<Item = Category> {
		Self::iter().filter(|category| !matches!(category, Self::All))
	}
}
