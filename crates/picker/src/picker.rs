use std::rc::Rc;

use sigil_catalog::Category;

use crate::binding::Binding;
use crate::filter;
use crate::haptics::{HapticIntensity, Haptics};
use crate::render_api::{Axis, ChipRenderItem, GlyphCell, GridRenderPlan, PickerRenderPlan};

/// Construction-time configuration. Consumed once; immutable for the
/// widget's lifetime.
#[derive(Debug, Clone, Copy)]
pub struct PickerOptions {
	/// Seed for the widget-owned category selection state.
	pub initial_category: Category,
	pub axis: Axis,
	pub haptic_enabled: bool,
	/// Gates rendering and activation of the category chip row.
	pub allow_category_switch: bool,
	pub scrollable: bool,
}

impl Default for PickerOptions {
	fn default() -> Self {
		Self {
			initial_category: Category::All,
			axis: Axis::Horizontal,
			haptic_enabled: true,
			allow_category_switch: false,
			scrollable: false,
		}
	}
}

/// User interactions dispatched back from a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
	SelectCategory(Category),
	SelectSymbol(String),
}

/// Selection state of one picker instance.
///
/// Visibility and the chosen symbol are externally owned through shared
/// bindings; the category is widget-owned state seeded from the options.
/// All mutation flows through [`SymbolPicker::apply`].
pub struct SymbolPicker {
	visible: Binding<bool>,
	symbol: Binding<String>,
	category: Category,
	options: PickerOptions,
	haptics: Rc<dyn Haptics>,
}

impl SymbolPicker {
	pub fn new(visible: Binding<bool>, symbol: Binding<String>, options: PickerOptions, haptics: Rc<dyn Haptics>) -> Self {
		Self {
			visible,
			symbol,
			category: options.initial_category,
			options,
			haptics,
		}
	}

	pub fn category(&self) -> Category {
		self.category
	}

	/// Apply one user interaction.
	///
	/// Category switches are ignored unless enabled by the options. Symbol
	/// selection always reassigns the shared binding and fires the haptic
	/// pulse, even when the identifier is already selected.
	pub fn apply(&mut self, event: PickerEvent) {
		match event {
			PickerEvent::SelectCategory(category) => {
				if !self.options.allow_category_switch {
					return;
				}
				tracing::debug!(category = %category, "picker.category");
				self.category = category;
			}
			PickerEvent::SelectSymbol(symbol) => {
				tracing::debug!(symbol = %symbol, haptic = self.options.haptic_enabled, "picker.select");
				self.symbol.set(symbol);
				if self.options.haptic_enabled {
					self.haptics.pulse(HapticIntensity::Medium);
				}
			}
		}
	}

	/// Derive this frame's render plan, or `None` while hidden.
	///
	/// The displayed list is recomputed on every call; nothing is cached.
	/// `search` is externally owned text the widget only reads.
	pub fn render_plan(&self, search: Option<&str>) -> Option<PickerRenderPlan> {
		if !self.visible.get() {
			return None;
		}

		let list = filter::apply_search(filter::compute_list(self.category), search.unwrap_or(""));
		let cells = self.symbol.with(|selected| {
			list.into_iter()
				.map(|symbol| GlyphCell {
					symbol,
					selected: symbol == selected.as_str(),
				})
				.collect()
		});

		let chips = self.options.allow_category_switch.then(|| {
			std::iter::once(Category::All)
				.chain(Category::concrete())
				.map(|category| ChipRenderItem {
					category,
					label: category.label(),
					active: category == self.category,
				})
				.collect()
		});

		Some(PickerRenderPlan {
			chips,
			grid: GridRenderPlan {
				cells,
				axis: self.options.axis,
				scrollable: self.options.scrollable,
			},
		})
	}
}

#[cfg(test)]
mod tests;
