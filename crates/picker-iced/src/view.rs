//! Maps picker render plans onto iced widget trees.
//!
//! The grid is adaptive: the column count derives from the width the
//! layout engine reports, the minimum cell extent, and the inter-item
//! spacing. Tap events flow back to the host through an event mapper so
//! the picker composes into any application message type.

use iced::widget::{button, column, container, mouse_area, responsive, row, scrollable, text};
use iced::{Border, Element, Length, Theme};
use sigil_picker::{Axis, ChipRenderItem, GlyphCell, PickerEvent, PickerRenderPlan};

use crate::glyphs::{GlyphResolver, PLACEHOLDER};

const DEFAULT_MIN_CELL_PX: f32 = 70.0;
const DEFAULT_CELL_SPACING_PX: f32 = 20.0;
const GLYPH_SIZE_PX: f32 = 25.0;
const CHIP_TEXT_SIZE_PX: f32 = 12.0;
const CHIP_CORNER_RADIUS: f32 = 20.0;

/// Fixed grid layout metrics: minimum cell extent and inter-item spacing.
#[derive(Debug, Clone, Copy)]
pub struct GridMetrics {
	min_cell_px: f32,
	spacing_px: f32,
}

impl Default for GridMetrics {
	fn default() -> Self {
		Self {
			min_cell_px: DEFAULT_MIN_CELL_PX,
			spacing_px: DEFAULT_CELL_SPACING_PX,
		}
	}
}

impl GridMetrics {
	pub fn from_env() -> Self {
		Self {
			min_cell_px: parse_px(std::env::var("SIGIL_ICED_MIN_CELL_PX").ok(), DEFAULT_MIN_CELL_PX),
			spacing_px: parse_px(std::env::var("SIGIL_ICED_CELL_SPACING_PX").ok(), DEFAULT_CELL_SPACING_PX),
		}
	}
}

/// One grid cell with its glyph already resolved.
#[derive(Debug, Clone)]
struct CellView {
	glyph: String,
	symbol: &'static str,
	selected: bool,
}

impl CellView {
	fn resolve(cell: &GlyphCell, resolver: &dyn GlyphResolver) -> Self {
		Self {
			glyph: resolver.glyph(cell.symbol).unwrap_or(PLACEHOLDER).to_string(),
			symbol: cell.symbol,
			selected: cell.selected,
		}
	}
}

/// Build the picker's widget tree for one frame.
///
/// `on_event` lifts picker events into the host application's message
/// type. Glyphs are resolved eagerly so the returned element owns all of
/// its data.
pub fn picker_view<'a, Message>(
	plan: PickerRenderPlan,
	resolver: &dyn GlyphResolver,
	metrics: GridMetrics,
	on_event: impl Fn(PickerEvent) -> Message + Clone + 'a,
) -> Element<'a, Message>
where
	Message: Clone + 'a,
{
	let mut content = column![].spacing(8);

	if let Some(chips) = plan.chips {
		content = content.push(chip_row(chips, on_event.clone()));
	}

	let cells: Vec<CellView> = plan.grid.cells.iter().map(|cell| CellView::resolve(cell, resolver)).collect();
	content = content.push(glyph_grid(cells, plan.grid.axis, plan.grid.scrollable, metrics, on_event));

	content.into()
}

fn chip_row<'a, Message>(chips: Vec<ChipRenderItem>, on_event: impl Fn(PickerEvent) -> Message + 'a) -> Element<'a, Message>
where
	Message: Clone + 'a,
{
	let mut chips_row = row![].spacing(8);

	for chip in chips {
		chips_row = chips_row.push(
			button(text(chip.label).size(CHIP_TEXT_SIZE_PX))
				.padding([3.0, 10.0])
				.style(chip_style(chip.active))
				.on_press(on_event(PickerEvent::SelectCategory(chip.category))),
		);
	}

	scrollable(chips_row)
		.direction(scrollable::Direction::Horizontal(scrollable::Scrollbar::new()))
		.width(Length::Fill)
		.into()
}

fn glyph_grid<'a, Message>(
	cells: Vec<CellView>,
	axis: Axis,
	scroll: bool,
	metrics: GridMetrics,
	on_event: impl Fn(PickerEvent) -> Message + Clone + 'a,
) -> Element<'a, Message>
where
	Message: Clone + 'a,
{
	responsive(move |size| {
		let columns = columns_for_width(size.width, metrics);
		let mut grid = column![].spacing(metrics.spacing_px);

		for line in cells.chunks(columns) {
			let mut cells_row = row![].spacing(metrics.spacing_px);
			for cell in line {
				cells_row = cells_row.push(glyph_cell(cell, metrics, &on_event));
			}
			grid = grid.push(cells_row);
		}

		if scroll {
			let direction = match axis {
				Axis::Horizontal => scrollable::Direction::Horizontal(scrollable::Scrollbar::new()),
				Axis::Vertical => scrollable::Direction::Vertical(scrollable::Scrollbar::new()),
			};
			scrollable(grid).direction(direction).width(Length::Fill).into()
		} else {
			grid.into()
		}
	})
	.into()
}

fn glyph_cell<'a, Message>(cell: &CellView, metrics: GridMetrics, on_event: &impl Fn(PickerEvent) -> Message) -> Element<'a, Message>
where
	Message: Clone + 'a,
{
	let selected = cell.selected;
	let tint = move |theme: &Theme| {
		let palette = theme.extended_palette();
		text::Style {
			color: Some(if selected { palette.primary.strong.color } else { palette.background.base.text }),
		}
	};

	let glyph = text(cell.glyph.clone()).size(GLYPH_SIZE_PX).style(tint);

	mouse_area(
		container(glyph)
			.center_x(Length::Fixed(metrics.min_cell_px))
			.center_y(Length::Fixed(metrics.min_cell_px)),
	)
	.on_press(on_event(PickerEvent::SelectSymbol(cell.symbol.to_string())))
	.into()
}

fn chip_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
	move |theme, _status| {
		let palette = theme.extended_palette();
		let accent = palette.primary.strong.color;

		button::Style {
			background: None,
			text_color: if active { accent } else { palette.background.base.text },
			border: Border {
				color: accent,
				width: 1.0,
				radius: CHIP_CORNER_RADIUS.into(),
			},
			..button::Style::default()
		}
	}
}

/// Adaptive column count for the available width: as many minimum-width
/// cells as fit, never fewer than one.
fn columns_for_width(available_px: f32, metrics: GridMetrics) -> usize {
	let slot = metrics.min_cell_px + metrics.spacing_px;
	if !available_px.is_finite() || available_px <= slot {
		return 1;
	}

	((available_px + metrics.spacing_px) / slot).floor().max(1.0) as usize
}

fn parse_px(value: Option<String>, default: f32) -> f32 {
	let Some(value) = value else {
		return default;
	};

	match value.parse::<f32>() {
		Ok(px) if px.is_finite() && px > 0.0 => px,
		_ => default,
	}
}
