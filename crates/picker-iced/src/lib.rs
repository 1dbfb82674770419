//! Iced frontend for the symbol picker: maps [`sigil_picker`] render plans
//! onto widget trees and ships the `sigil-demo` binary.

/// Demo application reproducing the package usage example.
pub mod demo;
/// Symbol identifier to renderable glyph mapping.
pub mod glyphs;
/// Render-plan to iced widget mapping.
pub mod view;

pub use glyphs::{EmojiGlyphs, GlyphResolver};
pub use view::{GridMetrics, picker_view};
