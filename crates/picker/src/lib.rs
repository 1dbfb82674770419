//! Presentational core of the symbol picker: selection state, shared
//! two-way bindings, the filter pipeline, and the render-plan API that
//! frontends map onto an actual widget tree.
//!
//! Nothing here touches a UI toolkit. A frontend derives a
//! [`PickerRenderPlan`] each frame, draws it, and feeds user interactions
//! back as [`PickerEvent`]s.

/// Shared two-way state cells between caller and widget.
pub mod binding;
/// Derivation of the displayed symbol list from catalog, category, and search text.
pub mod filter;
/// Tactile feedback capability seam.
pub mod haptics;
/// Frontend-agnostic description of what to draw.
pub mod render_api;

mod picker;

pub use binding::Binding;
pub use haptics::{HapticIntensity, Haptics, NullHaptics};
pub use picker::{PickerEvent, PickerOptions, SymbolPicker};
pub use render_api::{Axis, ChipRenderItem, GlyphCell, GridRenderPlan, PickerRenderPlan};
