use crate::band::Band;
use crate::catalog::{Catalog, CctRange};
use crate::color::Rgb;
use crate::error::{ConfigurationError, ValidationError};
use crate::mapping::{kelvin_to_slider, slider_to_kelvin, SliderPosition};

/// One user interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
	SelectRange(String),
	/// May be fractional or out of bounds; it is rounded and clamped.
	SetSliderPosition(f64),
	SetKelvinInput(f64),
	SelectPreset(f64),
	/// Publish the current state again without changing it.
	Show,
}

/// Everything the user has chosen in this session.
///
/// Invariant: `kelvin` is within half a slider tick of the Kelvin value that `slider` maps to.
/// Slider moves and range switches keep them exactly equal; manual entries and presets keep the
/// value that was entered and move the slider to the nearest tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionState<'c> {
	active_range: &'c CctRange,
	slider: SliderPosition,
	kelvin: f64,
}

impl<'c> SessionState<'c> {
	pub fn new(catalog: &'c Catalog) -> Self {
		Self::at_slider(catalog.default_range(), SliderPosition::MIN)
	}

	fn at_slider(active_range: &'c CctRange, slider: SliderPosition) -> Self {
		Self {
			active_range,
			slider,
			kelvin: slider_to_kelvin(slider, active_range),
		}
	}

	pub fn active_range(&self) -> &'c CctRange {
		self.active_range
	}

	pub fn slider(&self) -> SliderPosition {
		self.slider
	}

	pub fn kelvin(&self) -> f64 {
		self.kelvin
	}

	pub fn snapshot(&self, validation_error: Option<ValidationError>) -> Snapshot {
		let range = self.active_range;
		let rgb = Rgb::from_temperature(self.kelvin);
		Snapshot {
			range_id: range.id().into(),
			range_name: range.name().into(),
			min_kelvin: range.min_kelvin(),
			max_kelvin: range.max_kelvin(),
			presets: range.presets().into(),
			slider: self.slider,
			kelvin: self.kelvin,
			rgb,
			hex: rgb.to_hex(),
			label: Band::classify(self.kelvin).label(),
			validation_error: validation_error.map(|error| error.to_string()),
		}
	}

	/// The outer error is for broken ranges, the inner one for input the range cannot take.
	fn with_kelvin(self, kelvin: f64) -> Result<Result<Self, ValidationError>, ConfigurationError> {
		let range = self.active_range;
		if !range.contains(kelvin) {
			tracing::debug!(kelvin, min = range.min_kelvin(), max = range.max_kelvin(), "entry out of range");
			return Ok(Err(ValidationError::OutOfRange));
		}
		let position = kelvin_to_slider(kelvin, range)?;
		Ok(SliderPosition::from_raw(position)
			.map(|slider| Self { slider, kelvin, ..self })
			.ok_or(ValidationError::NotANumber))
	}
}

/// What the host renders after every transition.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Snapshot {
	pub range_id: String,
	pub range_name: String,
	pub min_kelvin: f64,
	pub max_kelvin: f64,
	pub presets: Vec<f64>,
	pub slider: SliderPosition,
	pub kelvin: f64,
	pub rgb: Rgb,
	pub hex: String,
	pub label: &'static str,
	pub validation_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition<'c> {
	pub state: SessionState<'c>,
	pub snapshot: Snapshot,
}

/// Applies one intent. Never reacts to its own output, so a single event can't cascade.
///
/// Rejected input is not an error here: the previous state is returned and the snapshot carries
/// the message. Errors are reserved for problems with the catalog itself.
pub fn apply<'c>(
	catalog: &'c Catalog,
	state: SessionState<'c>,
	intent: Intent,
) -> Result<Transition<'c>, ConfigurationError> {
	tracing::trace!(?intent, "applying");

	let outcome = match intent {
		Intent::SelectRange(id) => {
			let range = catalog.get(&id)?;
			Ok(SessionState::at_slider(range, state.slider))
		}
		Intent::SetSliderPosition(raw) => SliderPosition::from_raw(raw)
			.map(|slider| SessionState::at_slider(state.active_range, slider))
			.ok_or(ValidationError::NotANumber),
		Intent::SetKelvinInput(kelvin) | Intent::SelectPreset(kelvin) => state.with_kelvin(kelvin)?,
		Intent::Show => Ok(state),
	};

	let (state, validation_error) = match outcome {
		Ok(new_state) => {
			tracing::debug!(
				range = new_state.active_range.id(),
				slider = new_state.slider.get(),
				kelvin = new_state.kelvin,
				"session updated",
			);
			(new_state, None)
		}
		Err(error) => {
			tracing::debug!(%error, "input rejected");
			(state, Some(error))
		}
	};

	Ok(Transition {
		snapshot: state.snapshot(validation_error),
		state,
	})
}
