use crate::checkout::Charges;
use crate::city::{City, CityDirectory, normalize};
use crate::error::NetworkError;
use crate::fare::FareClass;
use crate::luggage::{FeeRow, LoyaltyTier, LuggageFeeTable, LuggageLimits};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

const BUNDLED: &str = include_str!("../data/air_ontario.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    pub name: Arc<str>,
    pub code: Arc<str>,
}

/// Everything the airline sells: where it flies, who operates, and what it charges.
#[derive(Clone, Debug)]
pub struct Network {
    pub cities: CityDirectory,
    pub carriers: Vec<Carrier>,
    pub luggage_fees: LuggageFeeTable,
    pub luggage_limits: LuggageLimits,
    pub charges: Charges,
}

impl Network {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// The network compiled into the binary.
    pub fn bundled() -> Result<Self, NetworkError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(data: &str) -> Result<Self, NetworkError> {
        #[derive(Deserialize)]
        struct RawLuggage {
            #[serde(default)]
            limits: LuggageLimits,
            fees: Vec<FeeRow>,
        }
        #[derive(Deserialize)]
        struct RawData {
            cities: Vec<City>,
            carriers: Vec<Carrier>,
            luggage: RawLuggage,
            #[serde(default)]
            charges: Charges,
        }
        let raw: RawData = serde_json::from_str(data)?;

        Self::check_cities(&raw.cities)?;
        Self::check_fee_rows(&raw.luggage.fees)?;
        Self::check_limits(&raw.luggage.limits)?;
        if raw.carriers.is_empty() {
            return Err(NetworkError::Invalid("no carriers".to_string()));
        }

        Ok(Network {
            cities: CityDirectory::new(raw.cities),
            carriers: raw.carriers,
            luggage_fees: LuggageFeeTable::new(raw.luggage.fees),
            luggage_limits: raw.luggage.limits,
            charges: raw.charges,
        })
    }

    fn check_cities(cities: &[City]) -> Result<(), NetworkError> {
        if cities.len() < 2 {
            return Err(NetworkError::Invalid("at least two cities are needed".to_string()));
        }
        let mut codes = HashSet::new();
        let mut spellings = HashSet::new();
        for city in cities {
            let c = city.coordinates;
            if !(-90.0..=90.0).contains(&c.latitude) || !(-180.0..=180.0).contains(&c.longitude) {
                return Err(NetworkError::Invalid(format!("{} has coordinates out of range", city.name)));
            }
            if !codes.insert(city.code.clone()) {
                return Err(NetworkError::Invalid(format!("duplicate city code {}", city.code)));
            }
            for spelling in std::iter::once(&city.name).chain(city.aliases.iter()) {
                if !spellings.insert(normalize(spelling)) {
                    return Err(NetworkError::Invalid(format!("duplicate city name {}", spelling)));
                }
            }
        }
        Ok(())
    }

    fn check_fee_rows(rows: &[FeeRow]) -> Result<(), NetworkError> {
        let mut seen = HashSet::new();
        for row in rows {
            if !seen.insert((row.tier, row.class)) {
                return Err(NetworkError::Invalid(format!("duplicate luggage fees for {:?}/{}", row.tier, row.class)));
            }
        }
        for tier in LoyaltyTier::ALL {
            for class in [FareClass::Economy, FareClass::Business, FareClass::First] {
                if !seen.contains(&(tier, class)) {
                    return Err(NetworkError::Invalid(format!("missing luggage fees for {:?}/{}", tier, class)));
                }
            }
        }
        Ok(())
    }

    fn check_limits(limits: &LuggageLimits) -> Result<(), NetworkError> {
        if limits.min_weight_kg > limits.max_weight_kg || limits.min_size_cm > limits.max_size_cm {
            return Err(NetworkError::Invalid("luggage limits have min above max".to_string()));
        }
        Ok(())
    }
}
