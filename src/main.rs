#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
// Slider ticks, Kelvins and color channels move between floats and integers all the time.
#![allow(
	clippy::cast_precision_loss,
	clippy::cast_sign_loss,
	clippy::cast_possible_truncation,
	clippy::float_cmp,
	clippy::module_name_repetitions,
	clippy::must_use_candidate
)]
#![forbid(unsafe_code)]

use std::io::{BufRead, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::mpsc::SyncSender;

use clap::Parser;
use signal_hook::consts::signal;
use signal_hook::iterator::Signals;

use crate::catalog::Catalog;
use crate::cli::Args;
use crate::host::{Command, Style};
use crate::session::{SessionState, Snapshot};

mod band;
mod catalog;
mod cli;
mod color;
mod error;
mod host;
mod mapping;
mod session;
mod util;

enum Event {
	Line(String),
	/// End of input.
	Eof,
	Quit,
}

fn read_lines(event_send: &SyncSender<Event>) {
	for line in std::io::stdin().lock().lines() {
		let line = match line {
			Ok(line) => line,
			Err(error) => {
				tracing::error!(%error, "reading stdin");
				break;
			}
		};
		tracing::trace!(?line, "got line");
		if event_send.send(Event::Line(line)).is_err() {
			return;
		}
	}
	_ = event_send.send(Event::Eof);
}

fn signal_handler(event_send: &SyncSender<Event>) {
	let mut signals = match Signals::new([signal::SIGINT, signal::SIGTERM]) {
		Ok(signals) => signals,
		Err(error) => {
			tracing::warn!(%error, "could not install signal handlers");
			return;
		}
	};
	for signal in &mut signals {
		tracing::debug!(signal, "got signal");
		if event_send.send(Event::Quit).is_err() {
			break;
		}
	}
}

struct Output {
	json: bool,
	style: Style,
	prompt: bool,
}

impl Output {
	fn from_args(args: &Args) -> Self {
		let stdout_is_terminal = std::io::stdout().is_terminal();
		Self {
			json: args.json,
			style: if args.plain || !stdout_is_terminal {
				Style::Plain
			} else {
				Style::Color
			},
			prompt: !args.json && !args.once && stdout_is_terminal && std::io::stdin().is_terminal(),
		}
	}

	fn snapshot(&self, snapshot: &Snapshot) {
		if self.json {
			match host::render_json(snapshot) {
				Ok(json) => println!("{json}"),
				Err(error) => tracing::error!(%error, "serializing snapshot"),
			}
		} else {
			print!("{}", host::render_text(snapshot, self.style));
		}
	}

	fn message(&self, message: &str) {
		if self.json {
			println!("{}", host::render_json_message(message));
		} else {
			println!("{message}");
		}
	}

	fn error(&self, error: &str) {
		if self.json {
			println!("{}", host::render_json_error(error));
		} else {
			println!("{error}");
		}
	}

	fn prompt(&self) {
		if self.prompt {
			print!("> ");
			_ = std::io::stdout().flush();
		}
	}
}

/// Applies one line of input. Returns false when the session should end.
fn handle_line<'c>(
	catalog: &'c Catalog,
	state: &mut SessionState<'c>,
	output: &Output,
	line: &str,
) -> bool {
	let command = match host::parse_command(line) {
		Ok(Some(command)) => command,
		Ok(None) => return true,
		Err(error) => {
			output.error(&format!("{error}; try `help`"));
			return true;
		}
	};

	match command {
		Command::Apply(intent) => match session::apply(catalog, *state, intent) {
			Ok(transition) => {
				*state = transition.state;
				output.snapshot(&transition.snapshot);
			}
			Err(error) => output.error(&error.to_string()),
		},
		Command::ListRanges => output.message(host::render_ranges(catalog).trim_end()),
		Command::Help => output.message(host::HELP),
		Command::Quit => return false,
	}
	true
}

fn main() -> ExitCode {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.with_max_level(args.tracing_level())
		.with_writer(std::io::stderr)
		.init();

	let catalog = match args.catalog() {
		Ok(catalog) => catalog,
		Err(error) => {
			eprintln!("error: {error}");
			return ExitCode::FAILURE;
		}
	};
	if args.list_ranges {
		print!("{}", host::render_ranges(&catalog));
		return ExitCode::SUCCESS;
	}

	let output = Output::from_args(&args);

	let mut state = SessionState::new(&catalog);
	let mut last_snapshot = None;
	for intent in args.initial_intents() {
		match session::apply(&catalog, state, intent) {
			Ok(transition) => {
				state = transition.state;
				last_snapshot = Some(transition.snapshot);
			}
			Err(error) => {
				eprintln!("error: {error}");
				return ExitCode::FAILURE;
			}
		}
	}
	if let Some(snapshot) = &last_snapshot {
		output.snapshot(snapshot);
	}
	if args.once {
		return ExitCode::SUCCESS;
	}

	let (event_send, event_recv) = std::sync::mpsc::sync_channel::<Event>(4);

	std::thread::spawn({
		let event_send = event_send.clone();
		move || read_lines(&event_send)
	});
	std::thread::spawn({
		let event_send = event_send.clone();
		move || signal_handler(&event_send)
	});
	drop(event_send);

	output.prompt();
	while let Ok(event) = event_recv.recv() {
		match event {
			Event::Line(line) => {
				if !handle_line(&catalog, &mut state, &output, &line) {
					break;
				}
				output.prompt();
			}
			Event::Eof | Event::Quit => break,
		}
	}

	tracing::debug!(
		range = state.active_range().id(),
		slider = state.slider().get(),
		kelvin = state.kelvin(),
		"session ended",
	);
	ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
	use super::*;

	const OUTPUT: Output = Output {
		json: false,
		style: Style::Plain,
		prompt: false,
	};

	#[test]
	fn lines_drive_the_session() {
		let catalog = Catalog::builtin();
		let mut state = SessionState::new(&catalog);

		assert!(handle_line(&catalog, &mut state, &OUTPUT, "slider 500"));
		assert_eq!(state.slider().get(), 500);
		assert_eq!(state.kelvin(), 3100.0);

		assert!(handle_line(&catalog, &mut state, &OUTPUT, "RANGE 2700k-6500k"));
		assert_eq!(state.active_range().id(), "2700K-6500K");
		assert_eq!(state.slider().get(), 500);
	}

	#[test]
	fn bad_lines_keep_the_session() {
		let catalog = Catalog::builtin();
		let mut state = SessionState::new(&catalog);
		assert!(handle_line(&catalog, &mut state, &OUTPUT, "preset 3000"));
		let before = state;

		for line in ["range 1800K-3000K", "slider abc", "dim 5", "range", "", "help", "ranges"] {
			assert!(handle_line(&catalog, &mut state, &OUTPUT, line), "{line:?} ended the session");
			assert_eq!(state, before, "{line:?} changed the state");
		}
	}

	#[test]
	fn quit_ends_the_session() {
		let catalog = Catalog::builtin();
		let mut state = SessionState::new(&catalog);
		for line in ["quit", "EXIT", "q"] {
			assert!(!handle_line(&catalog, &mut state, &OUTPUT, line));
		}

		let json = Output {
			json: true,
			..OUTPUT
		};
		assert!(handle_line(&catalog, &mut state, &json, "range nope"));
		assert!(!handle_line(&catalog, &mut state, &json, "quit"));
	}
}
