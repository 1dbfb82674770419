//! Glyph resolution: mapping symbol identifiers onto something the text
//! renderer can draw.

/// Drawn when a resolver has no glyph for an identifier. Missing symbols
/// are a rendering concern, never an error.
pub const PLACEHOLDER: &str = "▢";

/// Collaborator mapping symbol identifiers to renderable glyphs.
pub trait GlyphResolver {
	fn glyph(&self, symbol: &str) -> Option<&str>;
}

/// Best-effort emoji rendition of the catalog's identifiers.
///
/// Identifiers with no direct entry fall back to their first dot-separated
/// segment, so variants like `cart.badge.plus` share the base `cart`
/// glyph. Anything still unmapped renders as [`PLACEHOLDER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmojiGlyphs;

impl GlyphResolver for EmojiGlyphs {
	fn glyph(&self, symbol: &str) -> Option<&str> {
		lookup(symbol).or_else(|| {
			let base = symbol.split('.').next()?;
			lookup(base)
		})
	}
}

fn lookup(symbol: &str) -> Option<&'static str> {
	let glyph = match symbol {
		"mic" => "\u{1F3A4}",
		"message" => "\u{1F4AC}",
		"bubble" => "\u{1F4AC}",
		"phone" => "\u{1F4DE}",
		"video" => "\u{1F3A5}",
		"envelope" => "\u{2709}",
		"sun" => "\u{2600}",
		"sunrise" => "\u{1F305}",
		"sunset" => "\u{1F307}",
		"moon" => "\u{1F319}",
		"sparkles" => "\u{2728}",
		"cloud" => "\u{2601}",
		"wind" => "\u{1F4A8}",
		"snowflake" => "\u{2744}",
		"keyboard" => "\u{2328}",
		"printer" => "\u{1F5A8}",
		"tv" => "\u{1F4FA}",
		"display" => "\u{1F5A5}",
		"desktopcomputer" => "\u{1F5A5}",
		"laptopcomputer" => "\u{1F4BB}",
		"iphone" => "\u{1F4F1}",
		"ipad" => "\u{1F4F1}",
		"applewatch" => "\u{231A}",
		"airpods" => "\u{1F3A7}",
		"homepod" => "\u{1F508}",
		"hifispeaker" => "\u{1F50A}",
		"gamecontroller" => "\u{1F3AE}",
		"headphones" => "\u{1F3A7}",
		"car" => "\u{1F697}",
		"bus" => "\u{1F68C}",
		"tram" => "\u{1F68A}",
		"bicycle" => "\u{1F6B2}",
		"airplane" => "\u{2708}",
		"ferry" => "\u{26F4}",
		"scooter" => "\u{1F6F4}",
		"fuelpump" => "\u{26FD}",
		"person" => "\u{1F9CD}",
		"figure" => "\u{1F6B6}",
		"eye" => "\u{1F441}",
		"ear" => "\u{1F442}",
		"hand" => "\u{270B}",
		"hand.thumbsup" => "\u{1F44D}",
		"hand.thumbsdown" => "\u{1F44E}",
		"brain" => "\u{1F9E0}",
		"leaf" => "\u{1F343}",
		"flame" => "\u{1F525}",
		"drop" => "\u{1F4A7}",
		"bolt" => "\u{26A1}",
		"hare" => "\u{1F407}",
		"tortoise" => "\u{1F422}",
		"ant" => "\u{1F41C}",
		"ladybug" => "\u{1F41E}",
		"fish" => "\u{1F41F}",
		"pawprint" => "\u{1F43E}",
		"globe" => "\u{1F30E}",
		"pencil" => "\u{270F}",
		"highlighter" => "\u{1F58A}",
		"scissors" => "\u{2702}",
		"paintbrush" => "\u{1F58C}",
		"play" => "\u{25B6}",
		"pause" => "\u{23F8}",
		"stop" => "\u{23F9}",
		"backward" => "\u{23EA}",
		"forward" => "\u{23E9}",
		"shuffle" => "\u{1F500}",
		"repeat" => "\u{1F501}",
		"speaker" => "\u{1F50A}",
		"music" => "\u{1F3B5}",
		"film" => "\u{1F39E}",
		"cart" => "\u{1F6D2}",
		"bag" => "\u{1F45C}",
		"creditcard" => "\u{1F4B3}",
		"banknote" => "\u{1F4B5}",
		"tag" => "\u{1F3F7}",
		"giftcard" => "\u{1F381}",
		"basket" => "\u{1F9FA}",
		"clock" => "\u{1F550}",
		"alarm" => "\u{23F0}",
		"stopwatch" => "\u{23F1}",
		"timer" => "\u{23F2}",
		"hourglass" => "\u{231B}",
		"calendar" => "\u{1F4C5}",
		"deskclock" => "\u{1F570}",
		"heart" => "\u{2764}",
		"bandage" => "\u{1FA79}",
		"stethoscope" => "\u{1FA7A}",
		"pills" => "\u{1F48A}",
		"syringe" => "\u{1F489}",
		"thermometer" => "\u{1F321}",
		"lungs" => "\u{1FAC1}",
		"circle" => "\u{2B55}",
		"square" => "\u{2B1C}",
		"triangle" => "\u{1F53A}",
		"diamond" => "\u{1F537}",
		"arrow.up" => "\u{2B06}",
		"arrow.down" => "\u{2B07}",
		"arrow.left" => "\u{2B05}",
		"arrow.right" => "\u{27A1}",
		"arrow.clockwise" => "\u{1F503}",
		"arrow.counterclockwise" => "\u{1F504}",
		"chevron" => "\u{276F}",
		"plus" => "\u{FF0B}",
		"minus" => "\u{FF0D}",
		"multiply" => "\u{2715}",
		"divide" => "\u{00F7}",
		"equal" => "\u{FF1D}",
		"percent" => "\u{FF05}",
		"function" => "\u{0192}",
		"sum" => "\u{2211}",
		"plusminus" => "\u{00B1}",
		"x.squareroot" => "\u{221A}",
		"number" => "\u{0023}",
		"infinity" => "\u{221E}",
		_ => return None,
	};

	Some(glyph)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_identifiers_resolve_directly() {
		assert_eq!(EmojiGlyphs.glyph("cart"), Some("\u{1F6D2}"));
		assert_eq!(EmojiGlyphs.glyph("phone"), Some("\u{1F4DE}"));
	}

	#[test]
	fn variants_fall_back_to_their_base_segment() {
		assert_eq!(EmojiGlyphs.glyph("cart.badge.plus"), EmojiGlyphs.glyph("cart"));
		assert_eq!(EmojiGlyphs.glyph("moon.fill"), EmojiGlyphs.glyph("moon"));
	}

	#[test]
	fn exact_entries_win_over_the_base_segment() {
		assert_eq!(EmojiGlyphs.glyph("hand.thumbsup"), Some("\u{1F44D}"));
		assert_eq!(EmojiGlyphs.glyph("hand.raised"), Some("\u{270B}"));
	}

	#[test]
	fn unknown_identifiers_resolve_to_nothing() {
		assert_eq!(EmojiGlyphs.glyph("definitely.not.a.symbol"), None);
	}
}
