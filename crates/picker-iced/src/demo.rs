//! Demo application: a small page with the current selection, a toggle
//! for the picker, and a search field feeding its filter.

use std::rc::Rc;

use clap::Parser;
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Element, Length, Task};
use sigil_catalog::Category;
use sigil_picker::{Axis, Binding, HapticIntensity, Haptics, PickerEvent, PickerOptions, SymbolPicker};

use crate::glyphs::{EmojiGlyphs, GlyphResolver, PLACEHOLDER};
use crate::view::{GridMetrics, picker_view};

/// Demo command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "sigil-demo")]
#[command(about = "Browse and pick a symbol from the catalog")]
struct Args {
	/// Scroll the glyph grid vertically instead of horizontally
	#[arg(long)]
	vertical: bool,

	/// Wrap the glyph grid in a scroll container
	#[arg(long)]
	scrollable: bool,

	/// Disable haptic pulses on selection
	#[arg(long)]
	no_haptics: bool,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

/// Logs pulses instead of driving platform hardware.
#[derive(Debug, Clone, Copy, Default)]
struct LogHaptics;

impl Haptics for LogHaptics {
	fn pulse(&self, intensity: HapticIntensity) {
		tracing::debug!(intensity = ?intensity, "haptics.pulse");
	}
}

#[derive(Debug, Clone)]
enum Message {
	TogglePicker,
	QueryChanged(String),
	Picker(PickerEvent),
}

struct DemoApp {
	visible: Binding<bool>,
	symbol: Binding<String>,
	query: String,
	picker: SymbolPicker,
	glyphs: EmojiGlyphs,
	metrics: GridMetrics,
}

impl DemoApp {
	fn new(args: &Args) -> Self {
		let visible = Binding::new(false);
		let symbol = Binding::new(String::from("pencil"));

		let options = PickerOptions {
			initial_category: Category::All,
			axis: if args.vertical { Axis::Vertical } else { Axis::Horizontal },
			haptic_enabled: !args.no_haptics,
			allow_category_switch: true,
			scrollable: args.scrollable,
		};

		let picker = SymbolPicker::new(visible.clone(), symbol.clone(), options, Rc::new(LogHaptics));

		Self {
			visible,
			symbol,
			query: String::new(),
			picker,
			glyphs: EmojiGlyphs,
			metrics: GridMetrics::from_env(),
		}
	}

	fn update(&mut self, message: Message) -> Task<Message> {
		match message {
			Message::TogglePicker => {
				let shown = !self.visible.get();
				tracing::debug!(shown, "demo.toggle");
				self.visible.set(shown);
			}
			Message::QueryChanged(query) => self.query = query,
			Message::Picker(event) => self.picker.apply(event),
		}

		Task::none()
	}

	fn view(&self) -> Element<'_, Message> {
		let selected = self.symbol.get();
		let glyph = self.glyphs.glyph(&selected).unwrap_or(PLACEHOLDER).to_string();

		let header = row![
			button(text(if self.visible.get() { "Hide picker" } else { "Press here" })).on_press(Message::TogglePicker),
			horizontal_space(),
			text(glyph).size(22),
			text(selected),
		]
		.spacing(12)
		.align_y(iced::Alignment::Center);

		let search = text_input("Search symbols", &self.query).on_input(Message::QueryChanged);

		let mut page = column![header, search].spacing(12);
		if let Some(plan) = self.picker.render_plan(Some(&self.query)) {
			page = page.push(picker_view(plan, &self.glyphs, self.metrics, Message::Picker));
		}

		container(page).padding(16).width(Length::Fill).height(Length::Fill).into()
	}
}

pub fn run() -> iced::Result {
	let args = Args::parse();

	let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
	tracing_subscriber::fmt().with_max_level(level).init();

	tracing::info!("starting sigil-demo");

	iced::application("sigil symbol picker", DemoApp::update, DemoApp::view)
		.window_size((640.0, 480.0))
		.run_with(move || (DemoApp::new(&args), Task::none()))
}
