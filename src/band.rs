/// Descriptive names for bands of color temperature, warmest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Band {
	Candlelight,
	VeryWarmWhite,
	WarmWhite,
	SoftWhite,
	NeutralWhite,
	CoolWhite,
	Daylight,
	CoolDaylight,
	BlueSky,
}

/// Exclusive upper bound of each band except the last.
const LADDER: &[(f64, Band)] = &[
	(2000.0, Band::Candlelight),
	(2700.0, Band::VeryWarmWhite),
	(3000.0, Band::WarmWhite),
	(3500.0, Band::SoftWhite),
	(4000.0, Band::NeutralWhite),
	(5000.0, Band::CoolWhite),
	(6000.0, Band::Daylight),
	(7000.0, Band::CoolDaylight),
];

impl Band {
	/// Applies to any Kelvin value, including ones outside every range.
	pub fn classify(kelvin: f64) -> Self {
		LADDER
			.iter()
			.find(|&&(upper, _)| kelvin < upper)
			.map_or(Self::BlueSky, |&(_, band)| band)
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Candlelight => "Candlelight",
			Self::VeryWarmWhite => "Very Warm White",
			Self::WarmWhite => "Warm White",
			Self::SoftWhite => "Soft White",
			Self::NeutralWhite => "Neutral White",
			Self::CoolWhite => "Cool White",
			Self::Daylight => "Daylight",
			Self::CoolDaylight => "Cool Daylight",
			Self::BlueSky => "Blue Sky",
		}
	}
}

impl std::fmt::Display for Band {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}
