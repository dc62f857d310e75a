use crate::city::{City, CityDirectory};
use crate::console::Console;
use crate::error::{ConsoleError, InputError};
use crate::trip::TravelDate;
use chrono::{Days, NaiveDate};
use colored::Colorize;
use tracing::debug;

const DATE_FORMAT: &str = "%m/%d/%y";

/// `MM/DD/YY`, digits only, nothing else.
fn is_date_shaped(input: &str) -> bool {
    input.len() == 8
        && input.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'/',
            _ => b.is_ascii_digit(),
        })
}

pub fn parse_date(input: &str, today: NaiveDate, reference: NaiveDate) -> Result<TravelDate, InputError> {
    let text = input.trim();
    if !is_date_shaped(text) {
        return Err(InputError::Format(
            "Invalid input. Try again and use the MM/DD/YY format.".to_string(),
        ));
    }
    let date = NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| {
        InputError::Format("The date is not valid. Try again and use the MM/DD/YY format.".to_string())
    })?;

    let tomorrow = today + Days::new(1);
    if date <= tomorrow {
        return Err(InputError::Semantic(
            "You cannot depart on or before the day after the booking. Please try again.".to_string(),
        ));
    }
    if date <= reference {
        return Err(InputError::Semantic(
            "You cannot return before or during the same day as the departure date. Please try again.".to_string(),
        ));
    }

    Ok(TravelDate { text: text.to_string(), date })
}

pub fn parse_option(input: &str, min: u32, max: u32) -> Result<u32, InputError> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::Format("Invalid input. Try again and input a valid number.".to_string()))?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(InputError::Range(format!(
            "Input must be between {} and {} (inclusive). Please try again.",
            min, max
        )));
    }
    Ok(value as u32)
}

pub fn parse_city<'d>(input: &str, directory: &'d CityDirectory, excluded: Option<&City>) -> Result<&'d City, InputError> {
    let city = directory
        .resolve(input)
        .ok_or_else(|| InputError::Semantic("Invalid input. Try again and input a service city.".to_string()))?;
    if excluded.is_some_and(|e| e.code == city.code) {
        return Err(InputError::Semantic(
            "Origin and destination must be different cities. Please try again.".to_string(),
        ));
    }
    Ok(city)
}

pub fn parse_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim().to_uppercase().as_str() {
        "Y" | "YES" => Ok(true),
        "N" | "NO" => Ok(false),
        _ => Err(InputError::Format("Invalid input. Try again and input either Y or N.".to_string())),
    }
}

pub fn parse_name(input: &str) -> Result<String, InputError> {
    match input.trim() {
        "" => Err(InputError::Format("Please enter a name.".to_string())),
        name => Ok(name.to_string()),
    }
}

/// Asks questions on a console until each answer is valid.
pub struct Prompter<C> {
    console: C,
    today: NaiveDate,
}

impl<C: Console> Prompter<C> {
    pub fn new(console: C, today: NaiveDate) -> Prompter<C> {
        Prompter { console, today }
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }

    pub fn say(&mut self, message: &str) {
        self.console.say(message);
    }

    fn ask<T>(&mut self, prompt: &str, mut parse: impl FnMut(&str) -> Result<T, InputError>) -> Result<T, ConsoleError> {
        loop {
            let line = self.console.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(input = %line, error = ?err, "rejected input");
                    self.console.say(&format!("\n{}", err.to_string().red()));
                }
            }
        }
    }

    /// Departure or return date. `reference` is the date it must come after,
    /// today when absent.
    pub fn validate_date(&mut self, prompt: &str, reference: Option<NaiveDate>) -> Result<TravelDate, ConsoleError> {
        let today = self.today;
        let reference = reference.unwrap_or(today);
        self.ask(prompt, |line| parse_date(line, today, reference))
    }

    pub fn validate_option(&mut self, prompt: &str, min: u32, max: u32) -> Result<u32, ConsoleError> {
        self.ask(prompt, |line| parse_option(line, min, max))
    }

    pub fn validate_city<'d>(
        &mut self,
        prompt: &str,
        directory: &'d CityDirectory,
        excluded: Option<&City>,
    ) -> Result<&'d City, ConsoleError> {
        self.ask(prompt, |line| parse_city(line, directory, excluded))
    }

    pub fn validate_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        self.ask(prompt, parse_yes_no)
    }

    pub fn validate_name(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.ask(prompt, parse_name)
    }
}
