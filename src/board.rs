use crate::city::CityDirectory;
use crate::flavor::{Flavor, FlightStatus};
use colored::Colorize;
use rand::Rng;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKind {
    Arrivals,
    Departures,
}

impl BoardKind {
    fn headers(&self) -> [&'static str; 7] {
        match self {
            BoardKind::Arrivals => ["Destination", "Code", "Flight", "ETA", "Terminal", "Carousel", "Status"],
            BoardKind::Departures => ["Destination", "Code", "Flight", "ETD", "Terminal", "Gate No.", "Status"],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoardKind::Arrivals => "ARRIVALS",
            BoardKind::Departures => "DEPARTURES",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub city: String,
    pub code: String,
    pub flight: String,
    pub time: String,
    pub terminal: String,
    /// Carousel on arrivals, gate on departures.
    pub bay: String,
    pub status: FlightStatus,
}

impl BoardRow {
    fn cells(&self) -> [String; 7] {
        [
            self.city.clone(),
            self.code.clone(),
            self.flight.clone(),
            self.time.clone(),
            self.terminal.clone(),
            self.bay.clone(),
            self.status.to_string(),
        ]
    }
}

/// One randomly generated row per service city.
pub fn rows<R: Rng>(kind: BoardKind, cities: &CityDirectory, flavor: &mut Flavor<'_, R>) -> Vec<BoardRow> {
    cities
        .cities()
        .iter()
        .map(|city| {
            let flight = flavor
                .carrier()
                .map(|carrier| flavor.flight_code(carrier))
                .unwrap_or_default();
            let time = flavor.time();
            let terminal = flavor.terminal();
            let bay = match kind {
                BoardKind::Arrivals => flavor.carousel().to_string(),
                BoardKind::Departures => flavor.gate(),
            };
            BoardRow {
                city: city.name.to_string(),
                code: city.code.to_string(),
                flight,
                time,
                terminal,
                bay,
                status: flavor.status(),
            }
        })
        .collect()
}

pub fn render(kind: BoardKind, rows: &[BoardRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(kind.headers().map(|h| h.bold().to_string()));
    for row in rows {
        builder.push_record(row.cells().map(|cell| row.status.paint(&cell).to_string()));
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.with(Alignment::center());
    table.to_string()
}

/// Centers `title` in a dashed rule as wide as the booking screens.
pub fn line_title(title: &str) -> String {
    let side = 82usize.saturating_sub(title.len() + 2) / 2;
    format!("{} {} {}", "-".repeat(side), title, "-".repeat(side))
}

pub fn horizontal_line() -> String {
    "-".repeat(82)
}
