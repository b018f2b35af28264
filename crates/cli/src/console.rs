//! Interactive console front end.
//!
//! Menus read one line at a time. At any prompt `back` returns to the
//! previous menu and `exit` quits; end of input behaves like `exit`.

use std::io::{self, BufRead, Write};

use fitlog_progress::ProgressReport;
use fitlog_storage::LogBackend;

use crate::{Tracker, TrackerError};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";
const BANNER: &str = r#"  _____ _ _   _
 |  ___(_) |_| | ___   __ _
 | |_  | | __| |/ _ \ / _` |
 |  _| | | |_| | (_) | (_| |
 |_|   |_|\__|_|\___/ \__, |
                      |___/
   Track your progress like a beast!"#;

/// What the user typed at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Back,
    Exit,
    Text(String),
}

/// Where to go after a screen closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Back,
    Exit,
}

/// Menu-driven console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal before each screen.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Consume the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until the user exits.
    pub fn run<B: LogBackend>(&mut self, tracker: &mut Tracker<B>) -> io::Result<()> {
        loop {
            self.screen("Main Menu")?;
            writeln!(self.output, "1. Add exercise")?;
            writeln!(self.output, "2. View log")?;
            writeln!(self.output, "3. Show progress")?;
            writeln!(self.output, "Type 'exit' to quit")?;

            let flow = match self.prompt("Select an option: ")? {
                Input::Exit => Flow::Exit,
                Input::Back => Flow::Back,
                Input::Text(choice) => match choice.as_str() {
                    "1" => self.add_exercise(tracker)?,
                    "2" => self.view_log(tracker)?,
                    "3" => self.show_progress(tracker)?,
                    _ => {
                        writeln!(self.output, "Invalid option.")?;
                        Flow::Back
                    }
                },
            };
            if flow == Flow::Exit {
                break;
            }
        }

        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.output, "Stay strong!")?;
        self.output.flush()
    }

    fn screen(&mut self, title: &str) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        writeln!(self.output, "{BANNER}\n\n{title}\n")
    }

    fn prompt(&mut self, label: &str) -> io::Result<Input> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Exit);
        }
        let text = line.trim();
        Ok(match text.to_ascii_lowercase().as_str() {
            "back" => Input::Back,
            "exit" => Input::Exit,
            _ => Input::Text(text.to_string()),
        })
    }

    /// Prompt for each field in turn, stopping early on `back` or `exit`.
    fn fields<const N: usize>(&mut self, labels: [&str; N]) -> io::Result<Result<[String; N], Flow>> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (value, label) in values.iter_mut().zip(labels) {
            match self.prompt(label)? {
                Input::Back => return Ok(Err(Flow::Back)),
                Input::Exit => return Ok(Err(Flow::Exit)),
                Input::Text(text) => *value = text,
            }
        }
        Ok(Ok(values))
    }

    fn add_exercise<B: LogBackend>(&mut self, tracker: &mut Tracker<B>) -> io::Result<Flow> {
        loop {
            self.screen("Add Exercise")?;
            writeln!(self.output, "1. Strength (e.g., Push-ups)")?;
            writeln!(self.output, "2. Cardio (e.g., Plank)")?;
            writeln!(self.output, "3. Endurance (e.g., Running, Swimming)")?;
            writeln!(self.output, "Type 'back' to return or 'exit' to quit")?;

            let choice = match self.prompt("Select type: ")? {
                Input::Back => return Ok(Flow::Back),
                Input::Exit => return Ok(Flow::Exit),
                Input::Text(choice) => choice,
            };

            let result = match choice.as_str() {
                "1" => {
                    self.screen("Add Strength Exercise")?;
                    match self.fields([
                        "Enter exercise name: ",
                        "Enter number of sets: ",
                        "Enter reps per set: ",
                        "Enter date (dd/MM/yyyy, empty for today): ",
                    ])? {
                        Ok([name, sets, reps, date]) => {
                            tracker.add_strength_exercise(&name, &sets, &reps, &date)
                        }
                        Err(flow) => return Ok(flow),
                    }
                }
                "2" => {
                    self.screen("Add Cardio Exercise")?;
                    match self.fields([
                        "Enter exercise name: ",
                        "Enter duration (e.g., 2h56m45s, 15m24s, 15m, 2h, 48s): ",
                        "Enter number of sets: ",
                        "Enter date (dd/MM/yyyy, empty for today): ",
                    ])? {
                        Ok([name, duration, sets, date]) => {
                            tracker.add_cardio_exercise(&name, &duration, &sets, &date)
                        }
                        Err(flow) => return Ok(flow),
                    }
                }
                "3" => {
                    self.screen("Add Endurance Exercise")?;
                    match self.fields([
                        "Enter exercise name (e.g., Running, Swimming): ",
                        "Enter distance (e.g., 100m, 2km): ",
                        "Enter duration (e.g., 2h56m45s, 15m24s, 15m, 2h, 48s): ",
                        "Enter date (dd/MM/yyyy, empty for today): ",
                    ])? {
                        Ok([name, distance, duration, date]) => {
                            tracker.add_endurance_exercise(&name, &distance, &duration, &date)
                        }
                        Err(flow) => return Ok(flow),
                    }
                }
                _ => {
                    writeln!(self.output, "Invalid option.")?;
                    continue;
                }
            };

            self.report_added(result)?;
            return Ok(Flow::Back);
        }
    }

    fn report_added(&mut self, result: Result<(), TrackerError>) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "Exercise added!"),
            Err(e) if e.is_warning() => {
                writeln!(self.output, "Exercise added, but the log could not be saved: {e}")
            }
            Err(e) => writeln!(self.output, "{e}. Returning..."),
        }
    }

    fn view_log<B: LogBackend>(&mut self, tracker: &mut Tracker<B>) -> io::Result<Flow> {
        self.screen("View Log")?;
        let lines = tracker.list_entries();
        if lines.is_empty() {
            writeln!(self.output, "No exercises logged.")?;
        } else {
            writeln!(self.output, "Exercise Log:")?;
            for line in lines {
                writeln!(self.output, " - {line}")?;
            }
        }
        writeln!(self.output, "\nType 'clear' to clear, 'back' to return, 'exit' to quit:")?;

        loop {
            match self.prompt("Command: ")? {
                Input::Back => return Ok(Flow::Back),
                Input::Exit => return Ok(Flow::Exit),
                Input::Text(cmd) if cmd.eq_ignore_ascii_case("clear") => {
                    match tracker.clear_log() {
                        Ok(()) => writeln!(self.output, "Log cleared!")?,
                        Err(e) => writeln!(self.output, "Error clearing log: {e}")?,
                    }
                    return Ok(Flow::Back);
                }
                Input::Text(_) => writeln!(self.output, "Invalid command.")?,
            }
        }
    }

    fn show_progress<B: LogBackend>(&mut self, tracker: &Tracker<B>) -> io::Result<Flow> {
        self.screen("Show Progress")?;
        writeln!(self.output, "Progress Summary:")?;
        match tracker.progress_report() {
            ProgressReport::NoProgress => writeln!(self.output, "No progress yet. Keep training!")?,
            ProgressReport::Improvements(records) => {
                for record in records {
                    writeln!(self.output, "{}: {}", record.kind(), record.name())?;
                    writeln!(self.output, "  First: {}", record.oldest_summary())?;
                    writeln!(self.output, "  Last: {}", record.latest_summary())?;
                    writeln!(self.output, "  Progress: {}", record.formatted_delta())?;
                    writeln!(self.output)?;
                }
            }
        }
        writeln!(self.output, "\nType 'back' to return, 'exit' to quit:")?;

        loop {
            match self.prompt("Command: ")? {
                Input::Back => return Ok(Flow::Back),
                Input::Exit => return Ok(Flow::Exit),
                Input::Text(_) => writeln!(self.output, "Invalid. Type 'back' or 'exit'.")?,
            }
        }
    }
}
