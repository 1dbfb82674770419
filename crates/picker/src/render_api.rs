use sigil_catalog::Category;

/// Scroll direction for the glyph grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
	#[default]
	Horizontal,
	Vertical,
}

/// Everything a frontend needs to draw one frame of the picker.
///
/// Plans are derived, never stored: the picker rebuilds one per frame from
/// catalog, selection state, and the externally supplied search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRenderPlan {
	/// Category chip row; `None` when category switching is disabled.
	pub chips: Option<Vec<ChipRenderItem>>,
	pub grid: GridRenderPlan,
}

/// One tappable category chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRenderItem {
	pub category: Category,
	pub label: &'static str,
	/// Whether this chip's category is the current selection.
	pub active: bool,
}

/// The filtered glyph grid and its layout directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRenderPlan {
	pub cells: Vec<GlyphCell>,
	pub axis: Axis,
	/// Whether the grid is wrapped in a scroll container along `axis`.
	pub scrollable: bool,
}

/// One glyph cell; `selected` drives the highlight tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
	pub symbol: &'static str,
	pub selected: bool,
}
