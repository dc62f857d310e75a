use crate::fare::{FareClass, StopType};
use crate::flavor::Flavor;
use crate::trip::Trip;
use rand::Rng;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingPass {
    pub passenger: String,
    pub carrier: String,
    pub flight: String,
    pub terminal: String,
    pub etd: String,
    pub eta: String,
    pub gate: String,
    pub origin: String,
    pub destination: String,
    pub seat: String,
    pub class: FareClass,
    pub package: StopType,
}

impl BoardingPass {
    /// Flight, gate, times and seat are drawn at random; they do not follow the trip's schedule.
    pub fn issue<R: Rng>(passenger: &str, trip: &Trip, class: FareClass, package: StopType, flavor: &mut Flavor<'_, R>) -> BoardingPass {
        let (carrier, flight) = match flavor.carrier() {
            Some(c) => (c.name.to_string(), flavor.flight_code(c)),
            None => ("Air Ontario".to_string(), String::new()),
        };
        BoardingPass {
            passenger: passenger.to_string(),
            carrier,
            flight,
            terminal: flavor.terminal(),
            etd: flavor.time(),
            eta: flavor.time(),
            gate: flavor.gate(),
            origin: trip.origin.label(),
            destination: trip.destination.label(),
            seat: flavor.seat(),
            class,
            package,
        }
    }

    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record([
            "Boarding Pass".to_string(),
            format!("{} class", self.class),
            self.package.to_string(),
        ]);
        builder.push_record([
            self.passenger.clone(),
            format!("Flight {}", self.flight),
            format!("Terminal {}", self.terminal),
        ]);
        builder.push_record([format!("ETD > {}", self.etd), format!("ETA > {}", self.eta), format!("Gate {}", self.gate)]);
        builder.push_record([
            format!("Leaving {}", self.origin),
            format!("Arriving {}", self.destination),
            format!("Seat No. {}", self.seat),
        ]);
        builder.push_record([self.carrier.clone(), "----------->".to_string(), "||!!||!|||!|".to_string()]);
        let mut table = builder.build();
        table.with(Style::re_structured_text());
        table.to_string()
    }
}
