use crate::city::City;
use crate::fare::TripType;
use chrono::NaiveDate;
use std::fmt;

/// A date as the user typed it, `MM/DD/YY`, with the calendar day it names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelDate {
    pub text: String,
    pub date: NaiveDate,
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub origin: City,
    pub destination: City,
    pub trip_type: TripType,
    pub departure: TravelDate,
    pub return_date: Option<TravelDate>,
}

impl Trip {
    pub fn schedule(&self) -> String {
        match &self.return_date {
            Some(back) => format!("It is scheduled to depart at {} and return at {}!", self.departure, back),
            None => format!("It is scheduled to depart at {}!", self.departure),
        }
    }
}
