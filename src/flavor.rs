//! Plausible but made-up flight details for the board and the boarding pass.

use crate::network::Carrier;
use colored::{ColoredString, Colorize};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Arrived,
    Delayed,
    Ontime,
    Canceled,
}

impl FlightStatus {
    const ALL: [FlightStatus; 4] = [FlightStatus::Arrived, FlightStatus::Delayed, FlightStatus::Ontime, FlightStatus::Canceled];

    /// Paints `text` in this status' board color.
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            FlightStatus::Arrived => text.blue(),
            FlightStatus::Ontime => text.green(),
            FlightStatus::Delayed => text.yellow(),
            FlightStatus::Canceled => text.red(),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightStatus::Arrived => write!(f, "Arrived"),
            FlightStatus::Delayed => write!(f, "Delayed"),
            FlightStatus::Ontime => write!(f, "Ontime"),
            FlightStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

pub struct Flavor<'a, R> {
    rng: R,
    carriers: &'a [Carrier],
}

impl<'a, R: Rng> Flavor<'a, R> {
    pub fn new(rng: R, carriers: &'a [Carrier]) -> Flavor<'a, R> {
        Flavor { rng, carriers }
    }

    pub fn carrier(&mut self) -> Option<&'a Carrier> {
        self.carriers.choose(&mut self.rng)
    }

    /// Carrier code and a number in 3000..6000, e.g. `AC4521`.
    pub fn flight_code(&mut self, carrier: &Carrier) -> String {
        format!("{}{}", carrier.code, self.rng.gen_range(3000..6000))
    }

    pub fn time(&mut self) -> String {
        format!("{:02}:{:02}", self.rng.gen_range(0..24), self.rng.gen_range(0..60))
    }

    pub fn terminal(&mut self) -> String {
        format!("T{}", self.rng.gen_range(1..=3))
    }

    pub fn carousel(&mut self) -> u32 {
        self.rng.gen_range(1..=13)
    }

    pub fn gate(&mut self) -> String {
        let letter = self.rng.gen_range(b'A'..=b'Z') as char;
        format!("{}{}", letter, self.rng.gen_range(1..=99))
    }

    pub fn seat(&mut self) -> String {
        let letter = *b"ABCDEF".choose(&mut self.rng).unwrap_or(&b'A') as char;
        format!("{}{}", self.rng.gen_range(1..=30), letter)
    }

    pub fn status(&mut self) -> FlightStatus {
        *FlightStatus::ALL.choose(&mut self.rng).unwrap_or(&FlightStatus::Ontime)
    }
}
