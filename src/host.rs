//! The terminal side of the tool: turns input lines into intents and snapshots into output.

use std::fmt::Write as _;

use thiserror::Error;

use crate::catalog::Catalog;
use crate::color::Rgb;
use crate::session::{Intent, Snapshot};
use crate::util::{lerp, strip_kelvin_suffix};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
	Apply(Intent),
	ListRanges,
	Help,
	Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	#[error("unknown command {0:?}")]
	Unknown(String),
	#[error("`{0}` needs an argument")]
	MissingArgument(&'static str),
	#[error("{0:?} is not a number")]
	NotANumber(String),
}

pub const HELP: &str = "\
commands:
  range <id>      switch to another range, keeping the slider position
                  (ids ignore case)
  slider <pos>    move the slider (0..=1000)
  kelvin <k>      enter a temperature directly (a bare number works too)
  preset <k>      pick one of the presets of the active range
  show            print the current state again
  ranges          list the available ranges
  help            print this message
  quit            leave";

/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
	let line = line.trim();
	if line.is_empty() {
		return Ok(None);
	}

	let (word, argument) = match line.split_once(char::is_whitespace) {
		Some((word, argument)) => (word, Some(argument.trim())),
		None => (line, None),
	};
	let number = |name: &'static str| -> Result<f64, CommandError> {
		let argument = argument.ok_or(CommandError::MissingArgument(name))?;
		parse_number(argument)
	};

	let command = match word.to_ascii_lowercase().as_str() {
		"range" | "r" => Command::Apply(Intent::SelectRange(
			argument.ok_or(CommandError::MissingArgument("range"))?.into(),
		)),
		"slider" | "s" => Command::Apply(Intent::SetSliderPosition(number("slider")?)),
		"kelvin" | "k" => Command::Apply(Intent::SetKelvinInput(number("kelvin")?)),
		"preset" | "p" => Command::Apply(Intent::SelectPreset(number("preset")?)),
		"show" => Command::Apply(Intent::Show),
		"ranges" => Command::ListRanges,
		"help" | "?" => Command::Help,
		"quit" | "exit" | "q" => Command::Quit,
		_ => match parse_number(line) {
			Ok(kelvin) => Command::Apply(Intent::SetKelvinInput(kelvin)),
			Err(_) => return Err(CommandError::Unknown(word.into())),
		},
	};
	Ok(Some(command))
}

fn parse_number(s: &str) -> Result<f64, CommandError> {
	strip_kelvin_suffix(s)
		.parse()
		.map_err(|_| CommandError::NotANumber(s.into()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
	/// 24-bit ANSI background colors for the swatch and the gradient.
	Color,
	Plain,
}

const BAR_WIDTH: usize = 40;
const SWATCH: &str = "        ";

pub fn render_json(snapshot: &Snapshot) -> Result<String, serde_json::Error> {
	serde_json::to_string(snapshot)
}

/// `{"error": ...}`, the JSON-lines form of a rejected command.
pub fn render_json_error(error: &str) -> String {
	serde_json::json!({ "error": error }).to_string()
}

pub fn render_json_message(message: &str) -> String {
	serde_json::json!({ "message": message }).to_string()
}

pub fn render_text(snapshot: &Snapshot, style: Style) -> String {
	let mut out = String::new();

	// Writing to a String can't fail.
	_ = writeln!(
		out,
		"{}  {}  slider {:>4}/1000",
		snapshot.range_id,
		gradient_bar(snapshot, style),
		snapshot.slider,
	);

	let swatch = match style {
		Style::Color => paint(snapshot.rgb, SWATCH),
		Style::Plain => String::new(),
	};
	_ = writeln!(
		out,
		"  {:.2}K  {}  {}  {swatch}",
		snapshot.kelvin, snapshot.label, snapshot.hex,
	);

	if !snapshot.presets.is_empty() {
		let presets: Vec<_> = snapshot
			.presets
			.iter()
			.map(|&preset| {
				if preset == snapshot.kelvin {
					format!("[{preset}K]")
				} else {
					format!("{preset}K")
				}
			})
			.collect();
		_ = writeln!(out, "  presets: {}", presets.join(" "));
	}

	if let Some(error) = &snapshot.validation_error {
		_ = writeln!(
			out,
			"  error: {error} ({}K..={}K)",
			snapshot.min_kelvin, snapshot.max_kelvin,
		);
	}

	out
}

pub fn render_ranges(catalog: &Catalog) -> String {
	let mut out = String::new();
	for (i, range) in catalog.iter().enumerate() {
		let default = if i == 0 { " (default)" } else { "" };
		_ = writeln!(
			out,
			"{}: {}, {}K per step{default}",
			range.id(),
			range.name(),
			range.kelvin_per_slider_unit(),
		);
	}
	out
}

fn gradient_bar(snapshot: &Snapshot, style: Style) -> String {
	let thumb = usize::from(snapshot.slider.get()) * (BAR_WIDTH - 1) / 1000;
	let mut bar = String::from("[");
	for cell in 0..BAR_WIDTH {
		let is_thumb = cell == thumb;
		match style {
			Style::Color => {
				let t = cell as f64 / (BAR_WIDTH - 1) as f64;
				let kelvin = lerp(snapshot.min_kelvin, snapshot.max_kelvin, t);
				bar.push_str(&paint(Rgb::from_temperature(kelvin), if is_thumb { "|" } else { " " }));
			}
			Style::Plain => bar.push_str(if is_thumb { "|" } else { "-" }),
		}
	}
	bar.push(']');
	bar
}

/// Draws `text` in black on an `rgb` background.
fn paint(rgb: Rgb, text: &str) -> String {
	let Rgb { red, green, blue } = rgb;
	format!("\x1b[30;48;2;{red};{green};{blue}m{text}\x1b[0m")
}
