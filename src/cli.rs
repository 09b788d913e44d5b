use clap::{ArgAction, Parser};

use crate::catalog::{Catalog, CctRange};
use crate::error::ConfigurationError;
use crate::session::Intent;

/// Translate between tunable-white slider positions and color temperatures.
///
/// Reads one command per line from stdin and prints the synchronized state after each.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
	/// Range to start in. Defaults to the first listed range.
	#[arg(long, value_name = "ID")]
	pub range: Option<String>,

	/// Initial slider position (0..=1000).
	#[arg(long, value_name = "POS", conflicts_with = "kelvin", allow_negative_numbers = true)]
	pub slider: Option<f64>,

	/// Initial temperature in Kelvin.
	#[arg(long, value_name = "K", allow_negative_numbers = true)]
	pub kelvin: Option<f64>,

	/// Extra range as `ID:MIN:SCALE[:P1,P2,...]`, e.g. `1800K-3000K:1800:1.2:1800,2400,3000`.
	#[arg(long = "add-range", value_name = "SPEC", value_parser = CctRange::parse)]
	pub extra_ranges: Vec<CctRange>,

	/// Print one JSON object per line instead of text: a snapshot per state, `{"error": ...}` for
	/// rejected commands and `{"message": ...}` for `help` and `ranges`.
	#[arg(long)]
	pub json: bool,

	/// Never use ANSI colors.
	#[arg(long)]
	pub plain: bool,

	/// Print the initial state and exit.
	#[arg(long)]
	pub once: bool,

	/// Print the available ranges and exit.
	#[arg(long)]
	pub list_ranges: bool,

	/// More logging on stderr. Repeat for even more.
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

impl Args {
	pub fn catalog(&self) -> Result<Catalog, ConfigurationError> {
		Catalog::with_extra(self.extra_ranges.iter().cloned())
	}

	/// What to apply to a fresh session before any input is read.
	pub fn initial_intents(&self) -> Vec<Intent> {
		let mut intents = Vec::new();
		if let Some(range) = &self.range {
			intents.push(Intent::SelectRange(range.clone()));
		}
		if let Some(slider) = self.slider {
			intents.push(Intent::SetSliderPosition(slider));
		}
		if let Some(kelvin) = self.kelvin {
			intents.push(Intent::SetKelvinInput(kelvin));
		}
		if intents.is_empty() {
			intents.push(Intent::Show);
		}
		intents
	}

	pub fn tracing_level(&self) -> tracing::Level {
		match self.verbose {
			0 => tracing::Level::WARN,
			1 => tracing::Level::DEBUG,
			_ => tracing::Level::TRACE,
		}
	}
}
