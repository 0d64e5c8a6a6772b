//! Terminal backend and the fixed-rate scheduler loop
//!
//! The [`Display`] trait abstracts the terminal collaborators (dimension
//! query, clear, frame output) so the loop can run against a real terminal
//! (`TermDisplay`, via crossterm) or a fixed-size test double
//! (`FixedDisplay`).

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};

use crate::simulation::integrator::step;
use crate::simulation::scenario::Scenario;
use crate::visualization::ascii::render;

/// Fallback grid size when the terminal cannot be queried
pub const DEFAULT_DIMS: (u16, u16) = (80, 24);

/// Terminal collaborators consumed by the scheduler loop
pub trait Display {
    /// Current (width, height) in character cells
    /// Implementations fail soft to a usable default
    fn dimensions(&mut self) -> (u16, u16);

    /// Clear the visible buffer before a frame
    fn clear(&mut self) -> io::Result<()>;

    /// Write one rendered frame plus the tick status line
    fn present(&mut self, frame: &str, tick: u64) -> io::Result<()>;
}

/// Real terminal backend on stdout
pub struct TermDisplay {
    stdout: io::Stdout,
}

impl TermDisplay {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TermDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TermDisplay {
    fn dimensions(&mut self) -> (u16, u16) {
        terminal::size().unwrap_or(DEFAULT_DIMS)
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn present(&mut self, frame: &str, tick: u64) -> io::Result<()> {
        self.stdout.write_all(frame.as_bytes())?;
        // Status line below the grid
        write!(self.stdout, "{tick}")?;
        self.stdout.flush()
    }
}

/// Test double: fixed dimensions, no-op clear, captured frames
pub struct FixedDisplay {
    pub width: u16,
    pub height: u16,
    pub frames: Vec<String>,
}

impl FixedDisplay {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }
}

impl Display for FixedDisplay {
    fn dimensions(&mut self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &str, _tick: u64) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}

/// Drive the simulation at the configured tick rate until `stop` says so
///
/// Per tick: clear, query dimensions, render the pre-step positions, present,
/// integrate once. The wait sleeps out the remainder of the tick period, so a
/// tick never fires early; exact periodicity is not guaranteed.
pub fn run(
    scenario: &mut Scenario,
    display: &mut impl Display,
    mut stop: impl FnMut(u64) -> bool,
) -> io::Result<()> {
    let period = Duration::from_secs_f64(1.0 / scenario.parameters.ticks_per_second as f64);
    let mut last = Instant::now();

    while !stop(scenario.system.tick) {
        display.clear()?;

        let (width, height) = display.dimensions();
        // Reserve one terminal row for the status line
        let rows = height.saturating_sub(1).max(1) as usize;

        let frame = render(rows, width.max(1) as usize, &scenario.system);
        display.present(&frame, scenario.system.tick)?;

        step(&mut scenario.system, &scenario.gravity);

        if let Some(rest) = period.checked_sub(last.elapsed()) {
            thread::sleep(rest);
        }
        last = Instant::now();
    }
    Ok(())
}
