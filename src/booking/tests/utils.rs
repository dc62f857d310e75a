use crate::booking::flow::BookingFlow;
use crate::console::ScriptedConsole;
use crate::distance::Geodesic;
use crate::flavor::Flavor;
use crate::network::Network;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type TestFlow<'n> = BookingFlow<'n, ScriptedConsole, Geodesic, StdRng>;

pub fn network() -> Network {
    Network::bundled().unwrap()
}

/// 10/18/26, so the earliest departure is 10/20/26.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

pub fn flow<'n>(network: &'n Network, answers: &[&str]) -> TestFlow<'n> {
    BookingFlow::new(
        network,
        ScriptedConsole::new(answers),
        today(),
        Geodesic,
        Flavor::new(StdRng::seed_from_u64(11), &network.carriers),
    )
}

/// Answers for one pass through the wizard, from trip type to checkout.
pub struct Attempt<'a> {
    pub trip_type: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub departure: &'a str,
    pub return_date: Option<&'a str>,
    pub package: &'a str,
    pub passengers: &'a str,
    pub tier: &'a str,
    pub bags: &'a [(&'a str, &'a str)],
    pub confirm: &'a str,
}

impl<'a> Attempt<'a> {
    pub fn oneway(origin: &'a str, destination: &'a str) -> Attempt<'a> {
        Attempt {
            trip_type: "2",
            origin,
            destination,
            departure: "10/25/26",
            return_date: None,
            package: "1",
            passengers: "1",
            tier: "0",
            bags: &[],
            confirm: "y",
        }
    }

    pub fn answers(&self) -> Vec<&'a str> {
        let mut answers = vec![self.trip_type, self.origin, self.destination, self.departure];
        answers.extend(self.return_date);
        answers.extend(["1", self.package, self.passengers, self.tier]);
        let count: &'static str = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"][self.bags.len()];
        answers.push(count);
        for &(weight, size) in self.bags {
            answers.push(weight);
            answers.push(size);
        }
        answers.push(self.confirm);
        answers
    }
}

pub fn script<'a>(attempts: &[Attempt<'a>]) -> Vec<&'a str> {
    let mut answers = vec!["Ada", "Lovelace"];
    for attempt in attempts {
        answers.extend(attempt.answers());
    }
    answers
}
