/// Kelvins outside this range are clamped before approximating.
pub const MIN_TEMPERATURE: f64 = 1000.0;
pub const MAX_TEMPERATURE: f64 = 40_000.0;

const GAMMA: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl Rgb {
	/// An approximate display color for white light of the given temperature.
	///
	/// Uses Tanner Helland's curve fit of the black-body locus followed by gamma correction.
	/// This is meant to look right in a swatch, not to be colorimetrically accurate.
	pub fn from_temperature(kelvin: f64) -> Self {
		RawColor::from_temperature(kelvin).gamma_corrected()
	}

	pub fn to_hex(self) -> String {
		format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
	}

	pub fn as_array(self) -> [u8; 3] {
		[self.red, self.green, self.blue]
	}
}

impl serde::Serialize for Rgb {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_array().serialize(serializer)
	}
}

/// Channels in `0.0..=255.0` (invariant), before gamma correction.
#[derive(Debug, Clone, Copy)]
struct RawColor {
	red: f64,
	green: f64,
	blue: f64,
}

#[allow(
	clippy::unreadable_literal, // Matches the published constants.
	clippy::excessive_precision, // Same.
)]
impl RawColor {
	fn from_temperature(kelvin: f64) -> Self {
		// NaN would slip through `clamp`.
		let kelvin = if kelvin.is_nan() { MIN_TEMPERATURE } else { kelvin };
		let t = kelvin.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE) / 100.0;

		let red = if t <= 66.0 {
			255.0
		} else {
			329.698727446 * (t - 60.0).powf(-0.1332047592)
		};

		let green = if t <= 66.0 {
			99.4708025861 * t.ln() - 161.1195681661
		} else {
			288.1221695283 * (t - 60.0).powf(-0.0755148492)
		};

		let blue = if t >= 66.0 {
			255.0
		} else if t <= 19.0 {
			0.0
		} else {
			138.5177312231 * (t - 10.0).ln() - 305.0447927307
		};

		Self {
			red: clamp_channel(red),
			green: clamp_channel(green),
			blue: clamp_channel(blue),
		}
	}

	fn gamma_corrected(self) -> Rgb {
		Rgb {
			red: gamma_correct(self.red),
			green: gamma_correct(self.green),
			blue: gamma_correct(self.blue),
		}
	}
}

fn clamp_channel(value: f64) -> f64 {
	value.clamp(0.0, 255.0)
}

/// `value` must already be in `0.0..=255.0`.
fn gamma_correct(value: f64) -> u8 {
	let corrected = 255.0 * (value / 255.0).powf(1.0 / GAMMA);
	// Within 0.0..=255.0, so the cast only drops the fraction.
	corrected.floor() as u8
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rgb(red: u8, green: u8, blue: u8) -> Rgb {
		Rgb { red, green, blue }
	}

	#[test]
	fn warm_orange_at_2200() {
		let raw = RawColor::from_temperature(2200.0);
		assert_eq!(raw.red, 255.0);
		assert!((raw.green - (99.4708025861 * 22f64.ln() - 161.1195681661)).abs() < 1e-9);
		assert!((raw.blue - (138.5177312231 * 12f64.ln() - 305.0447927307)).abs() < 1e-9);

		assert_eq!(Rgb::from_temperature(2200.0), rgb(255, 198, 108));
	}

	#[test]
	fn known_values() {
		assert_eq!(Rgb::from_temperature(1000.0), rgb(255, 139, 0));
		assert_eq!(Rgb::from_temperature(3000.0), rgb(255, 216, 173));
		assert_eq!(Rgb::from_temperature(4000.0), rgb(255, 231, 209));
		assert_eq!(Rgb::from_temperature(6600.0), rgb(255, 255, 255));
		assert_eq!(Rgb::from_temperature(10_000.0), rgb(229, 237, 255));
	}

	#[test]
	fn clamps_temperature() {
		assert_eq!(Rgb::from_temperature(-5.0), Rgb::from_temperature(1000.0));
		assert_eq!(Rgb::from_temperature(500.0), Rgb::from_temperature(1000.0));
		assert_eq!(Rgb::from_temperature(50_000.0), Rgb::from_temperature(40_000.0));
		assert_eq!(Rgb::from_temperature(f64::INFINITY), Rgb::from_temperature(40_000.0));
		assert_eq!(Rgb::from_temperature(f64::NAN), Rgb::from_temperature(1000.0));
	}

	#[test]
	fn no_blue_below_1900() {
		for kelvin in [1000.0, 1500.0, 1900.0, 1901.0] {
			assert_eq!(Rgb::from_temperature(kelvin).blue, 0);
		}
	}

	fn max_channel_gap(a: Rgb, b: Rgb) -> [u8; 3] {
		let [a, b] = [a.as_array(), b.as_array()];
		[0, 1, 2].map(|i| a[i].abs_diff(b[i]))
	}

	#[test]
	fn continuity_at_branch_boundaries() {
		let [red, green, blue] = max_channel_gap(Rgb::from_temperature(1899.9), Rgb::from_temperature(1900.1));
		assert!(red <= 1 && green <= 1 && blue <= 1);

		// The two fits meet at t = 66 only approximately; green and blue jump by two units there.
		let below = Rgb::from_temperature(6599.9);
		let at = Rgb::from_temperature(6600.0);
		let above = Rgb::from_temperature(6600.1);
		for [red, green, blue] in [max_channel_gap(below, at), max_channel_gap(at, above)] {
			assert!(red <= 1, "red jumps by {red}");
			assert!(green <= 2, "green jumps by {green}");
			assert!(blue <= 2, "blue jumps by {blue}");
		}
	}

	#[test]
	fn hex() {
		assert_eq!(rgb(255, 198, 108).to_hex(), "#FFC66C");
		assert_eq!(rgb(0, 10, 255).to_hex(), "#000AFF");
	}
}
