use std::cell::Cell;

use pretty_assertions::assert_eq;
use sigil_catalog::symbols;

use super::*;

#[derive(Default)]
struct CountingHaptics {
	pulses: Cell<usize>,
	last: Cell<Option<HapticIntensity>>,
}

impl Haptics for CountingHaptics {
	fn pulse(&self, intensity: HapticIntensity) {
		self.pulses.set(self.pulses.get() + 1);
		self.last.set(Some(intensity));
	}
}

fn picker_with(options: PickerOptions) -> (SymbolPicker, Binding<bool>, Binding<String>, Rc<CountingHaptics>) {
	let visible = Binding::new(true);
	let symbol = Binding::new(String::from("pencil"));
	let haptics = Rc::new(CountingHaptics::default());
	let picker = SymbolPicker::new(visible.clone(), symbol.clone(), options, haptics.clone());
	(picker, visible, symbol, haptics)
}

fn listed_symbols(plan: &PickerRenderPlan) -> Vec<&'static str> {
	plan.grid.cells.iter().map(|cell| cell.symbol).collect()
}

#[test]
fn hidden_picker_produces_no_render_plan() {
	let (picker, visible, _symbol, _haptics) = picker_with(PickerOptions::default());

	visible.set(false);
	assert!(picker.render_plan(None).is_none());

	visible.set(true);
	assert!(picker.render_plan(None).is_some());
}

#[test]
fn visible_picker_lists_the_selected_category() {
	let (picker, _visible, _symbol, _haptics) = picker_with(PickerOptions {
		initial_category: Category::Communication,
		..PickerOptions::default()
	});

	let plan = picker.render_plan(None).expect("picker is visible");
	assert_eq!(listed_symbols(&plan), symbols(Category::Communication));
}

#[test]
fn only_the_cell_matching_the_binding_is_highlighted() {
	let (picker, _visible, symbol, _haptics) = picker_with(PickerOptions {
		initial_category: Category::Editing,
		..PickerOptions::default()
	});
	symbol.set(String::from("pencil"));

	let plan = picker.render_plan(None).expect("picker is visible");
	for cell in &plan.grid.cells {
		assert_eq!(cell.selected, cell.symbol == "pencil", "wrong tint for {}", cell.symbol);
	}
}

#[test]
fn tapping_a_glyph_updates_the_shared_binding_and_pulses_once() {
	let (mut picker, _visible, symbol, haptics) = picker_with(PickerOptions::default());

	picker.apply(PickerEvent::SelectSymbol(String::from("phone")));

	assert_eq!(symbol.get(), "phone");
	assert_eq!(haptics.pulses.get(), 1);
	assert_eq!(haptics.last.get(), Some(HapticIntensity::Medium));
}

#[test]
fn reselecting_the_current_symbol_reassigns_and_pulses_again() {
	// Preserved literal behavior: an already-selected tap is idempotent on
	// the binding value but still fires the side effects.
	let (mut picker, _visible, symbol, haptics) = picker_with(PickerOptions::default());

	picker.apply(PickerEvent::SelectSymbol(String::from("phone")));
	picker.apply(PickerEvent::SelectSymbol(String::from("phone")));

	assert_eq!(symbol.get(), "phone");
	assert_eq!(haptics.pulses.get(), 2);
}

#[test]
fn disabled_haptics_never_pulse() {
	let (mut picker, _visible, symbol, haptics) = picker_with(PickerOptions {
		haptic_enabled: false,
		..PickerOptions::default()
	});

	picker.apply(PickerEvent::SelectSymbol(String::from("cart")));

	assert_eq!(symbol.get(), "cart");
	assert_eq!(haptics.pulses.get(), 0);
}

#[test]
fn category_chip_activation_switches_the_grid() {
	let (mut picker, _visible, _symbol, _haptics) = picker_with(PickerOptions {
		initial_category: Category::Commerce,
		allow_category_switch: true,
		..PickerOptions::default()
	});

	picker.apply(PickerEvent::SelectCategory(Category::Communication));

	assert_eq!(picker.category(), Category::Communication);
	let plan = picker.render_plan(None).expect("picker is visible");
	assert_eq!(listed_symbols(&plan), symbols(Category::Communication));
}

#[test]
fn category_switch_is_ignored_when_disabled() {
	let (mut picker, _visible, _symbol, _haptics) = picker_with(PickerOptions::default());

	picker.apply(PickerEvent::SelectCategory(Category::Weather));

	assert_eq!(picker.category(), Category::All);
}

#[test]
fn chips_render_only_when_category_switching_is_enabled() {
	let (picker, _visible, _symbol, _haptics) = picker_with(PickerOptions::default());
	let plan = picker.render_plan(None).expect("picker is visible");
	assert!(plan.chips.is_none());

	let (picker, _visible, _symbol, _haptics) = picker_with(PickerOptions {
		initial_category: Category::Nature,
		allow_category_switch: true,
		..PickerOptions::default()
	});
	let plan = picker.render_plan(None).expect("picker is visible");
	let chips = plan.chips.expect("category switching is enabled");

	assert_eq!(chips[0].category, Category::All);
	assert_eq!(chips[0].label, "All");
	assert_eq!(chips.len(), Category::concrete().count() + 1);

	let expected: Vec<Category> = std::iter::once(Category::All).chain(Category::concrete()).collect();
	let actual: Vec<Category> = chips.iter().map(|chip| chip.category).collect();
	assert_eq!(actual, expected);

	for chip in &chips {
		assert_eq!(chip.active, chip.category == Category::Nature);
	}
}

#[test]
fn search_text_narrows_the_grid() {
	let (picker, _visible, _symbol, _haptics) = picker_with(PickerOptions {
		initial_category: Category::Commerce,
		..PickerOptions::default()
	});

	let plan = picker.render_plan(Some("ca")).expect("picker is visible");
	let listed = listed_symbols(&plan);

	assert!(listed.contains(&"cart"));
	assert!(listed.iter().all(|symbol| symbol.contains("ca")));
}

#[test]
fn layout_directives_pass_through_to_the_plan() {
	let (picker, _visible, _symbol, _haptics) = picker_with(PickerOptions {
		axis: Axis::Vertical,
		scrollable: true,
		..PickerOptions::default()
	});

	let plan = picker.render_plan(None).expect("picker is visible");
	assert_eq!(plan.grid.axis, Axis::Vertical);
	assert!(plan.grid.scrollable);
}
