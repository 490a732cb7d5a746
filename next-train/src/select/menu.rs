//! Text menus over any line-oriented input and output.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::{Direction, Listing, Route, Stop};

use super::error::SelectionError;

/// Console menu for the three selection steps.
///
/// Generic over its streams so tests can script input and inspect output.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a route by display name.
    pub fn select_route(&mut self, routes: &Listing<Route>) -> Result<Route, SelectionError> {
        let names: Vec<&str> = routes.names().collect();
        self.choose("Routes", "route", &names, |name| routes.get(name).cloned())
    }

    /// Ask for a stop by display name.
    pub fn select_stop(&mut self, stops: &Listing<Stop>) -> Result<Stop, SelectionError> {
        let names: Vec<&str> = stops.names().collect();
        self.choose("Stops", "stop", &names, |name| stops.get(name).cloned())
    }

    /// Ask for one of the route's directions by name.
    pub fn select_direction(&mut self, route: &Route) -> Result<Direction, SelectionError> {
        let names: Vec<&str> = route.direction_names().iter().map(String::as_str).collect();
        self.choose("Directions", "direction", &names, |name| {
            Direction::from_route(route, name).ok()
        })
    }

    /// Write a line of output outside the menu steps.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<(), SelectionError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn choose<T>(
        &mut self,
        heading: &str,
        noun: &'static str,
        options: &[&str],
        resolve: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SelectionError> {
        if options.is_empty() {
            return Err(SelectionError::EmptyListing(noun));
        }

        loop {
            writeln!(self.output, "\n{heading}:")?;
            for option in options {
                writeln!(self.output, "{option}")?;
            }
            writeln!(self.output, "Please select a {noun}:")?;
            self.output.flush()?;

            // Non-UTF-8 input is an unrecognised name, not an I/O error.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(SelectionError::InputClosed);
            }

            let line = String::from_utf8_lossy(&line);
            let choice = line.trim();
            match resolve(choice) {
                Some(value) => return Ok(value),
                None => {
                    debug!(noun, choice, "unrecognised selection");
                    writeln!(self.output, "\nInvalid {noun}")?;
                }
            }
        }
    }
}
