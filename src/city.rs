use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type CityCode = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: Arc<str>,
    pub code: CityCode,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub aliases: Vec<Arc<str>>,
}

impl City {
    /// Upper-cased name, the way the booking screens print cities.
    pub fn label(&self) -> String {
        self.name.to_uppercase()
    }

    fn answers_to(&self, normalized: &str) -> bool {
        normalize(&self.name) == normalized
            || self.aliases.iter().any(|alias| normalize(alias) == normalized)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Lowercase with inner whitespace collapsed, so "  thunder   BAY " finds Thunder Bay.
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The service cities, in the order the board and the menus list them.
#[derive(Clone, Debug, Default)]
pub struct CityDirectory {
    cities: Vec<City>,
}

impl CityDirectory {
    pub fn new(cities: Vec<City>) -> CityDirectory {
        CityDirectory { cities }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Finds the city a user typed, by name or alias.
    pub fn resolve(&self, input: &str) -> Option<&City> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return None;
        }
        self.cities.iter().find(|c| c.answers_to(&normalized))
    }

    /// Every spelling a user may type, used for tab completion.
    pub fn spellings(&self) -> Vec<String> {
        self.cities
            .iter()
            .flat_map(|c| std::iter::once(c.name.to_string()).chain(c.aliases.iter().map(|a| a.to_string())))
            .collect()
    }
}
