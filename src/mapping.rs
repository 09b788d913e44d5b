use crate::catalog::CctRange;
use crate::error::ConfigurationError;

/// A raw control position. Meaningless without the range it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SliderPosition(
	/// 0..=1000 (invariant).
	u16,
);

impl SliderPosition {
	pub const MIN: Self = Self(0);
	pub const MAX: Self = Self(1000);

	pub fn new(position: u16) -> Option<Self> {
		(position <= Self::MAX.0).then_some(Self(position))
	}

	/// Rounds to the nearest tick and clamps into range. Returns `None` for NaN.
	pub fn from_raw(raw: f64) -> Option<Self> {
		if raw.is_nan() {
			return None;
		}
		let clamped = raw.round().clamp(f64::from(Self::MIN.0), f64::from(Self::MAX.0));
		// In range after the clamp, so the cast is exact.
		Self::new(clamped as u16)
	}

	pub fn get(self) -> u16 {
		self.0
	}
}

impl std::fmt::Display for SliderPosition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

pub fn slider_to_kelvin(position: SliderPosition, range: &CctRange) -> f64 {
	position_to_kelvin(f64::from(position.get()), range)
}

/// Like [`slider_to_kelvin`], but for arbitrary (even fractional or out-of-bounds) positions.
pub fn position_to_kelvin(position: f64, range: &CctRange) -> f64 {
	range.min_kelvin() + position * range.kelvin_per_slider_unit()
}

/// The result is neither rounded nor clamped.
pub fn kelvin_to_slider(kelvin: f64, range: &CctRange) -> Result<f64, ConfigurationError> {
	let scale = range.kelvin_per_slider_unit();
	if scale == 0.0 {
		return Err(ConfigurationError::ZeroScale(range.id().into()));
	}
	Ok((kelvin - range.min_kelvin()) / scale)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;

	#[test]
	fn slider_position_bounds() {
		assert_eq!(SliderPosition::new(1000), Some(SliderPosition::MAX));
		assert_eq!(SliderPosition::new(1001), None);

		assert_eq!(SliderPosition::from_raw(-3.0), Some(SliderPosition::MIN));
		assert_eq!(SliderPosition::from_raw(1e9), Some(SliderPosition::MAX));
		assert_eq!(SliderPosition::from_raw(f64::INFINITY), Some(SliderPosition::MAX));
		assert_eq!(SliderPosition::from_raw(443.5).map(SliderPosition::get), Some(444));
		assert_eq!(SliderPosition::from_raw(443.49).map(SliderPosition::get), Some(443));
		assert_eq!(SliderPosition::from_raw(f64::NAN), None);
	}

	#[test]
	fn endpoints() {
		let catalog = Catalog::builtin();
		let range = catalog.get("2200K-4000K").unwrap();
		assert_eq!(slider_to_kelvin(SliderPosition::MIN, range), 2200.0);
		assert_eq!(slider_to_kelvin(SliderPosition::MAX, range), 4000.0);
		assert_eq!(kelvin_to_slider(4000.0, range), Ok(1000.0));
	}

	#[test]
	fn no_clamping() {
		let catalog = Catalog::builtin();
		let range = catalog.get("2200K-4000K").unwrap();
		assert_eq!(position_to_kelvin(-100.0, range), 2020.0);
		assert!(kelvin_to_slider(1500.0, range).unwrap() < 0.0);
	}

	#[test]
	fn round_trip_every_position() {
		for range in Catalog::builtin().iter() {
			for position in 0..=1000 {
				let position = SliderPosition::new(position).unwrap();
				let back = kelvin_to_slider(slider_to_kelvin(position, range), range).unwrap();
				assert!(
					(back - f64::from(position.get())).abs() <= 1e-9,
					"{}: {position} came back as {back}",
					range.id(),
				);
			}
		}
	}

	#[test]
	fn presets_land_within_half_a_tick() {
		for range in Catalog::builtin().iter() {
			for &preset in range.presets() {
				let position = kelvin_to_slider(preset, range).unwrap();
				let tick = SliderPosition::from_raw(position).unwrap();
				let drift = (slider_to_kelvin(tick, range) - preset).abs();
				assert!(drift <= range.kelvin_per_slider_unit() / 2.0, "{preset}K drifts by {drift}");
			}
		}
	}
}
