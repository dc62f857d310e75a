use crate::city::City;
use crate::distance::DistanceProvider;
use crate::error::FareError;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripType {
    RoundTrip,
    OneWay,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripType::RoundTrip => write!(f, "round trip"),
            TripType::OneWay => write!(f, "oneway trip"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FareClass {
    Economy,
    Business,
    First,
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FareClass::Economy => write!(f, "Economy"),
            FareClass::Business => write!(f, "Business"),
            FareClass::First => write!(f, "First"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopType {
    Direct,
    Connecting,
}

impl fmt::Display for StopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopType::Direct => write!(f, "Direct"),
            StopType::Connecting => write!(f, "Connecting"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareQuote {
    pub class: FareClass,
    pub stop: StopType,
    pub price: Money,
}

/// The six quotes for one trip, in package menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareSheet {
    pub quotes: [FareQuote; 6],
}

impl FareSheet {
    /// Package as numbered in the menu, starting at 1.
    pub fn package(&self, option: u32) -> Option<&FareQuote> {
        (option as usize).checked_sub(1).and_then(|i| self.quotes.get(i))
    }

    pub fn render(&self, origin: &City, destination: &City) -> String {
        #[derive(Tabled)]
        struct Row {
            #[tabled(rename = "Origin")]
            origin: String,
            #[tabled(rename = "Type of Stop")]
            stop: StopType,
            #[tabled(rename = "Destination")]
            destination: String,
            #[tabled(rename = "Class")]
            class: FareClass,
            #[tabled(rename = "Total Cost")]
            price: Money,
        }

        let rows = self.quotes.iter().map(|q| Row {
            origin: origin.label(),
            stop: q.stop,
            destination: destination.label(),
            class: q.class,
            price: q.price,
        });
        let mut table = tabled::Table::new(rows);
        table.with(Style::rounded());
        table.with(Alignment::center());
        table.to_string()
    }
}

/// Turns the distance between two cities into prices.
pub struct FareCalculator<D> {
    distance: D,
}

impl<D: DistanceProvider> FareCalculator<D> {
    const KM_PER_DOLLAR: u32 = 6;
    const BUSINESS_MULTIPLIER: u32 = 3;
    const FIRST_MULTIPLIER: u32 = 9;

    pub fn new(distance: D) -> FareCalculator<D> {
        FareCalculator { distance }
    }

    fn connecting_economy() -> Decimal {
        Decimal::new(8, 1)
    }

    // Connecting business is priced off the first class fare.
    fn connecting_business() -> Decimal {
        Decimal::new(85, 2)
    }

    fn connecting_first() -> Decimal {
        Decimal::new(9, 1)
    }

    pub fn quote(&self, origin: &City, destination: &City, trip_type: TripType) -> Result<FareSheet, FareError> {
        let km = self.distance.distance_km(origin.coordinates, destination.coordinates);
        let distance = Money::from_f64(km)
            .filter(|_| km.is_finite())
            .ok_or_else(|| FareError::InvalidDistance {
                from: origin.name.to_string(),
                to: destination.name.to_string(),
                km,
            })?;

        let economy = Money(distance.0 / Decimal::from(Self::KM_PER_DOLLAR)).to_cents();
        let business = (economy * Self::BUSINESS_MULTIPLIER).to_cents();
        let first = (economy * Self::FIRST_MULTIPLIER).to_cents();
        let connecting_economy = (economy * Self::connecting_economy()).to_cents();
        let connecting_business = (first * Self::connecting_business()).to_cents();
        let connecting_first = (first * Self::connecting_first()).to_cents();

        let legs: u32 = match trip_type {
            TripType::RoundTrip => 2,
            TripType::OneWay => 1,
        };
        let quote = |class, stop, price: Money| FareQuote { class, stop, price: price * legs };

        debug!(from = %origin.code, to = %destination.code, km, %economy, ?trip_type, "quoted fares");

        Ok(FareSheet {
            quotes: [
                quote(FareClass::Economy, StopType::Direct, economy),
                quote(FareClass::Economy, StopType::Connecting, connecting_economy),
                quote(FareClass::Business, StopType::Direct, business),
                quote(FareClass::Business, StopType::Connecting, connecting_business),
                quote(FareClass::First, StopType::Direct, first),
                quote(FareClass::First, StopType::Connecting, connecting_first),
            ],
        })
    }
}
