use crate::error::ConfigurationError;
use crate::mapping::{slider_to_kelvin, SliderPosition};
use crate::util::strip_kelvin_suffix;

#[derive(Debug, Clone, PartialEq)]
pub struct CctRange {
	/// Stable identifier used for lookups, e.g. `2200K-4000K`.
	id: Box<str>,
	/// Presentation only.
	name: Box<str>,
	min_kelvin: f64,
	/// Finite and non-zero (invariant).
	kelvin_per_slider_unit: f64,
	/// Strictly increasing and within the bounds of the range (invariant).
	presets: Box<[f64]>,
}

impl CctRange {
	pub fn new(
		id: &str,
		name: &str,
		min_kelvin: f64,
		kelvin_per_slider_unit: f64,
		presets: &[f64],
	) -> Result<Self, ConfigurationError> {
		if kelvin_per_slider_unit == 0.0 || !kelvin_per_slider_unit.is_finite() || !min_kelvin.is_finite() {
			return Err(ConfigurationError::ZeroScale(id.into()));
		}
		if presets.windows(2).any(|pair| pair[0] >= pair[1]) {
			return Err(ConfigurationError::PresetsNotIncreasing(id.into()));
		}

		let range = Self {
			id: id.into(),
			name: name.into(),
			min_kelvin,
			kelvin_per_slider_unit,
			presets: presets.into(),
		};
		if !range.max_kelvin().is_finite() {
			return Err(ConfigurationError::NonFiniteBounds(id.into()));
		}
		if let Some(&preset) = presets.iter().find(|&&preset| !range.contains(preset)) {
			return Err(ConfigurationError::PresetOutOfRange {
				range: id.into(),
				preset,
				min: range.min_kelvin(),
				max: range.max_kelvin(),
			});
		}
		Ok(range)
	}

	/// Parses `ID:MIN:SCALE[:P1,P2,...]`.
	pub fn parse(spec: &str) -> Result<Self, ConfigurationError> {
		let invalid = |reason| ConfigurationError::InvalidRangeSpec {
			spec: spec.into(),
			reason,
		};

		let mut parts = spec.split(':');
		let id = parts
			.next()
			.map(str::trim)
			.filter(|id| !id.is_empty()).ok_or_else(|| invalid("missing id"))?;
		let min_kelvin = parts
			.next()
			.ok_or_else(|| invalid("missing minimum"))?
			.trim()
			.parse::<f64>()
			.map_err(|_| invalid("minimum is not a number"))?;
		let scale = parts
			.next()
			.ok_or_else(|| invalid("missing scale"))?
			.trim()
			.parse::<f64>()
			.map_err(|_| invalid("scale is not a number"))?;
		let presets = match parts.next() {
			Some(list) if !list.trim().is_empty() => list
				.split(',')
				.map(|preset| strip_kelvin_suffix(preset.trim()).parse::<f64>())
				.collect::<Result<Vec<_>, _>>()
				.map_err(|_| invalid("preset is not a number"))?,
			_ => Vec::new(),
		};
		if parts.next().is_some() {
			return Err(invalid("too many fields"));
		}

		Self::new(id, id, min_kelvin, scale, &presets)
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn min_kelvin(&self) -> f64 {
		self.min_kelvin
	}

	pub fn max_kelvin(&self) -> f64 {
		slider_to_kelvin(SliderPosition::MAX, self)
	}

	pub fn kelvin_per_slider_unit(&self) -> f64 {
		self.kelvin_per_slider_unit
	}

	pub fn presets(&self) -> &[f64] {
		&self.presets
	}

	/// Inclusive on both ends. Always false for NaN.
	pub fn contains(&self, kelvin: f64) -> bool {
		let (low, high) = if self.kelvin_per_slider_unit > 0.0 {
			(self.min_kelvin(), self.max_kelvin())
		} else {
			(self.max_kelvin(), self.min_kelvin())
		};
		(low..=high).contains(&kelvin)
	}
}

/// All ranges known to this process. Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
	/// Non-empty, ids unique ignoring ASCII case (invariant). The first entry is the default.
	ranges: Vec<CctRange>,
}

impl Catalog {
	pub fn new(ranges: Vec<CctRange>) -> Result<Self, ConfigurationError> {
		if ranges.is_empty() {
			return Err(ConfigurationError::EmptyCatalog);
		}
		for (i, range) in ranges.iter().enumerate() {
			if ranges[..i].iter().any(|other| other.id.eq_ignore_ascii_case(&range.id)) {
				return Err(ConfigurationError::DuplicateRange(range.id().into()));
			}
		}
		Ok(Self { ranges })
	}

	/// The ranges offered by common tunable-white fixtures.
	pub fn builtin() -> Self {
		let ranges = BUILTIN_RANGES
			.iter()
			.map(|&(id, name, min, scale, presets)| CctRange::new(id, name, min, scale, presets))
			.collect::<Result<Vec<_>, _>>();
		match ranges.and_then(Self::new) {
			Ok(catalog) => catalog,
			Err(error) => panic!("built-in range catalog is invalid: {error}"),
		}
	}

	/// The built-in ranges followed by `extra`.
	pub fn with_extra(extra: impl IntoIterator<Item = CctRange>) -> Result<Self, ConfigurationError> {
		let mut ranges = Self::builtin().ranges;
		ranges.extend(extra);
		Self::new(ranges)
	}

	pub fn default_range(&self) -> &CctRange {
		&self.ranges[0]
	}

	/// Ids match ignoring ASCII case, like the interactive command words.
	pub fn get(&self, id: &str) -> Result<&CctRange, ConfigurationError> {
		self.ranges
			.iter()
			.find(|range| range.id().eq_ignore_ascii_case(id))
			.ok_or_else(|| ConfigurationError::UnknownRange(id.into()))
	}

	pub fn iter(&self) -> impl Iterator<Item = &CctRange> {
		self.ranges.iter()
	}
}

#[rustfmt::skip] // Table form.
const BUILTIN_RANGES: &[(&str, &str, f64, f64, &[f64])] = &[
	("2200K-4000K", "2200 K to 4000 K", 2200.0, 1.8, &[2200.0, 2700.0, 3000.0, 3500.0, 4000.0]),
	("2700K-6500K", "2700 K to 6500 K", 2700.0, 3.8, &[2700.0, 3000.0, 3500.0, 4000.0, 4500.0, 5000.0, 5500.0, 6000.0, 6500.0]),
];
