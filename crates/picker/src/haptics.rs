/// Strength of a tactile pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticIntensity {
	Light,
	Medium,
	Heavy,
}

/// Platform tactile feedback collaborator.
///
/// Fire-and-forget: no awaited result, no failure propagation.
pub trait Haptics {
	fn pulse(&self, intensity: HapticIntensity);
}

/// Swallows every pulse. Hosts without a tactile engine use this.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHaptics;

impl Haptics for NullHaptics {
	fn pulse(&self, _intensity: HapticIntensity) {}
}
