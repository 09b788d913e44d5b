use thiserror::Error;

/// A manual Kelvin entry that the active range cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("CCT value is out of range for the selected range")]
	OutOfRange,
	#[error("slider position is not a number")]
	NotANumber,
}

/// Violations of the catalog invariants. These are programming or setup errors, never user input errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
	#[error("unknown range {0:?}")]
	UnknownRange(String),
	#[error("range {0:?} has a zero or non-finite Kelvin-per-slider-unit factor")]
	ZeroScale(String),
	#[error("range {0:?} has a non-finite upper bound")]
	NonFiniteBounds(String),
	#[error("presets of range {0:?} are not strictly increasing")]
	PresetsNotIncreasing(String),
	#[error("preset {preset}K of range {range:?} is outside {min}K..={max}K")]
	PresetOutOfRange {
		range: String,
		preset: f64,
		min: f64,
		max: f64,
	},
	#[error("invalid range spec {spec:?}: {reason}")]
	InvalidRangeSpec { spec: String, reason: &'static str },
	#[error("range {0:?} is defined more than once")]
	DuplicateRange(String),
	#[error("the range catalog is empty")]
	EmptyCatalog,
}
