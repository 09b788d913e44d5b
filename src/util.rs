/// `t` should be in the range `0.0..=1.0` for a typical lerp,
/// but does not strictly have to be.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
	from * (1.0 - t) + to * t
}

/// Strips one trailing `K`/`k` unit suffix, so `3000K` and `3000` parse the same.
pub fn strip_kelvin_suffix(s: &str) -> &str {
	s.strip_suffix(['K', 'k']).unwrap_or(s).trim_end()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lerp_endpoints() {
		assert_eq!(lerp(2200.0, 4000.0, 0.0), 2200.0);
		assert_eq!(lerp(2200.0, 4000.0, 1.0), 4000.0);
		assert_eq!(lerp(2200.0, 4000.0, 0.5), 3100.0);
	}

	#[test]
	fn kelvin_suffix() {
		assert_eq!(strip_kelvin_suffix("3000K"), "3000");
		assert_eq!(strip_kelvin_suffix("3000 k"), "3000");
		assert_eq!(strip_kelvin_suffix("3000"), "3000");
	}
}
