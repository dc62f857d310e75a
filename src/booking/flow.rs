use crate::board::{horizontal_line, line_title};
use crate::boarding::BoardingPass;
use crate::checkout::Checkout;
use crate::city::City;
use crate::console::Console;
use crate::distance::DistanceProvider;
use crate::error::{BookingError, ConsoleError};
use crate::fare::{FareCalculator, FareQuote, FareSheet, TripType};
use crate::flavor::Flavor;
use crate::luggage::{Bag, LoyaltyTier, LuggageFeeResolver, LuggageFeeTable};
use crate::money::Money;
use crate::network::Network;
use crate::prompt::Prompter;
use crate::trip::Trip;
use chrono::NaiveDate;
use colored::Colorize;
use rand::Rng;
use tracing::{debug, info};

/// Package and head count picked from a fare sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub quote: FareQuote,
    pub passengers: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Luggage {
    pub tier: LoyaltyTier,
    pub bags: Vec<Bag>,
    pub total: Money,
}

/// A confirmed booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub passenger: String,
    pub trip: Trip,
    pub selection: Selection,
    pub luggage: Luggage,
    pub checkout: Checkout,
    pub boarding_pass: BoardingPass,
}

#[derive(Debug)]
pub enum State {
    SelectingTrip,
    QuotingFares(Trip),
    ReturningToMenu,
    Purchasing(Trip, FareSheet),
    SelectingPackage(Trip, FareSheet),
    CheckingBaggage(Trip, Selection),
    Checkout(Trip, Selection, Luggage),
    Declined,
    Confirmed(Box<Booking>),
}

impl State {
    pub fn name(&self) -> &'static str {
        match self {
            State::SelectingTrip => "selecting trip",
            State::QuotingFares(_) => "quoting fares",
            State::ReturningToMenu => "returning to menu",
            State::Purchasing(..) => "purchasing",
            State::SelectingPackage(..) => "selecting package",
            State::CheckingBaggage(..) => "checking baggage",
            State::Checkout(..) => "checkout",
            State::Declined => "declined",
            State::Confirmed(_) => "confirmed",
        }
    }
}

pub struct BookingFlow<'n, C, D, R> {
    network: &'n Network,
    prompter: Prompter<C>,
    fares: FareCalculator<D>,
    flavor: Flavor<'n, R>,
}

impl<'n, C: Console, D: DistanceProvider, R: Rng> BookingFlow<'n, C, D, R> {
    pub fn new(network: &'n Network, console: C, today: NaiveDate, distance: D, flavor: Flavor<'n, R>) -> Self {
        BookingFlow {
            network,
            prompter: Prompter::new(console, today),
            fares: FareCalculator::new(distance),
            flavor,
        }
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        self.prompter.console()
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.prompter.into_console()
    }

    /// Runs the wizard until a booking is confirmed or the input closes.
    pub fn run(&mut self) -> Result<Booking, BookingError> {
        self.say(&horizontal_line());
        self.say(&line_title("Book your flight"));
        self.say(&horizontal_line());

        let first = self.prompter.validate_name("\nWhat is your first name? ")?;
        let last = self.prompter.validate_name("\nWhat is your last name? ")?;
        let passenger = format!("{} {}", first, last);

        let mut state = State::SelectingTrip;
        loop {
            debug!(state = state.name(), "booking step");
            state = match state {
                State::Confirmed(booking) => {
                    info!(
                        passenger = %booking.passenger,
                        from = %booking.trip.origin.code,
                        to = %booking.trip.destination.code,
                        total = %booking.checkout.grand_total,
                        "booking confirmed"
                    );
                    return Ok(*booking);
                }
                state => self.step(&passenger, state)?,
            };
        }
    }

    pub fn step(&mut self, passenger: &str, state: State) -> Result<State, BookingError> {
        Ok(match state {
            State::SelectingTrip => State::QuotingFares(self.select_trip()?),
            State::QuotingFares(trip) => {
                let sheet = self.fares.quote(&trip.origin, &trip.destination, trip.trip_type)?;
                self.show_fares(&trip, &sheet);
                self.say("Select one of the options below:");
                self.say("\n 1. Purchase ticket\n 2. Return to Menu");
                match self.prompter.validate_option("\nPlease type 1 or 2: ", 1, 2)? {
                    1 => State::Purchasing(trip, sheet),
                    _ => State::ReturningToMenu,
                }
            }
            State::ReturningToMenu | State::Declined => State::SelectingTrip,
            State::Purchasing(trip, sheet) => {
                self.say("");
                self.say(&line_title("Select Package"));
                State::SelectingPackage(trip, sheet)
            }
            State::SelectingPackage(trip, sheet) => match self.select_package(&sheet)? {
                Some(selection) => State::CheckingBaggage(trip, selection),
                None => State::SelectingPackage(trip, sheet),
            },
            State::CheckingBaggage(trip, selection) => {
                let luggage = self.check_baggage(&selection)?;
                State::Checkout(trip, selection, luggage)
            }
            State::Checkout(trip, selection, luggage) => self.checkout(passenger, trip, selection, luggage)?,
            State::Confirmed(booking) => State::Confirmed(booking),
        })
    }

    fn say(&mut self, message: &str) {
        self.prompter.say(message);
    }

    fn list_cities(&mut self) {
        let names = self
            .network
            .cities
            .cities()
            .chunks(6)
            .map(|row| row.iter().map(|c| c.name.to_string()).collect::<Vec<_>>().join(", "))
            .collect::<Vec<_>>()
            .join(",\n");
        self.say(&horizontal_line());
        self.say("\nNote that currently, Air Ontario only operates from the following cities:\n");
        self.say(&names);
    }

    fn select_trip(&mut self) -> Result<Trip, ConsoleError> {
        self.list_cities();
        self.say("");
        self.say(&line_title("BOOKING MENU"));

        self.say("\nWhich type of trip would you like?");
        self.say("\n 1. Round Trip\n 2. One-way");
        let trip_type = match self.prompter.validate_option("\nPlease type 1 or 2: ", 1, 2)? {
            1 => TripType::RoundTrip,
            _ => TripType::OneWay,
        };

        let network = self.network;
        let cities = &network.cities;
        let origin: City = self.prompter.validate_city("\nWhere are you headed from? ", cities, None)?.clone();
        let destination = self
            .prompter
            .validate_city("\nWhere are you headed to? ", cities, Some(&origin))?
            .clone();

        let departure = self.prompter.validate_date("\nWhen would you like to depart? (MM/DD/YY): ", None)?;
        let return_date = match trip_type {
            TripType::RoundTrip => Some(
                self.prompter
                    .validate_date("\nWhen would you like to return? (MM/DD/YY): ", Some(departure.date))?,
            ),
            TripType::OneWay => None,
        };

        debug!(from = %origin.code, to = %destination.code, ?trip_type, departure = %departure, "trip selected");
        Ok(Trip {
            origin,
            destination,
            trip_type,
            departure,
            return_date,
        })
    }

    fn show_fares(&mut self, trip: &Trip, sheet: &FareSheet) {
        self.say("");
        self.say(&horizontal_line());
        self.say(&format!(
            "\nFor a {} from {} to {}:",
            trip.trip_type,
            trip.origin.label(),
            trip.destination.label()
        ));
        self.say(&sheet.render(&trip.origin, &trip.destination));
    }

    fn select_package(&mut self, sheet: &FareSheet) -> Result<Option<Selection>, ConsoleError> {
        self.say("\nWhich package would you like to select? \n");
        for (i, quote) in sheet.quotes.iter().enumerate() {
            self.say(&format!(" {}. {} class, {}", i + 1, quote.class, quote.stop));
        }
        let option = self.prompter.validate_option("\nSelect a number from 1 to 6: ", 1, 6)?;
        let Some(quote) = sheet.package(option).copied() else {
            return Ok(None);
        };
        let passengers = self
            .prompter
            .validate_option("\nHow many passengers are boarding this trip? ", 1, 9)?;
        debug!(class = %quote.class, stop = %quote.stop, price = %quote.price, passengers, "package selected");
        Ok(Some(Selection { quote, passengers }))
    }

    fn check_baggage(&mut self, selection: &Selection) -> Result<Luggage, BookingError> {
        self.say("");
        self.say(&line_title("Baggage Checking"));
        self.say("\nNote: Certain restrictions on carry-on luggage apply, see the link below for more information: ");
        self.say("https://www.aircanada.com/ca/en/aco/home/plan/baggage/carry-on.html ");

        self.say("\nList of Rewards programs: Being a rewards program member gives you benefits on pricing!");
        for (i, tier) in LoyaltyTier::ALL.iter().enumerate().skip(1) {
            self.say(&format!(" {}. {}", i, tier));
        }
        let option = self.prompter.validate_option(
            "\nAre you a part of any of the programs listed above? If not, enter 0: ",
            0,
            3,
        )?;
        let tier = LoyaltyTier::from_option(option).unwrap_or(LoyaltyTier::None);

        let network = self.network;
        let class = selection.quote.class;
        let fees = network
            .luggage_fees
            .fees(tier, class)
            .ok_or_else(|| BookingError::MissingFees(format!("{:?}/{}", tier, class)))?;
        self.say("");
        self.say(&LuggageFeeTable::render(fees));

        let count = self
            .prompter
            .validate_option("\nHow many bags are you planning to check in? ", 0, 9)?;

        let limits = &network.luggage_limits;
        let mut bags = Vec::with_capacity(count as usize);
        if count > 0 {
            self.say("");
            self.say(&line_title("Luggage Verification"));
            self.say(&format!(
                "\nNote that the max weight per bag is {}kg & max size is {}cm. Heavier bags, up to {}kg, \
                 and larger bags, up to {}cm, are charged a ${} fee for each penalty on top of the \
                 original cost. Anything beyond that is not allowed on board.\n",
                limits.free_weight_kg, limits.free_size_cm, limits.max_weight_kg, limits.max_size_cm, limits.surcharge
            ));
            self.say(&horizontal_line());
        }
        for i in 1..=count {
            let weight_kg = self.prompter.validate_option(
                &format!("\nLuggage {} weight (kg): ", i),
                limits.min_weight_kg,
                limits.max_weight_kg,
            )?;
            let size_cm = self.prompter.validate_option(
                &format!("\nLuggage {} dimensions (cm): ", i),
                limits.min_size_cm,
                limits.max_size_cm,
            )?;
            bags.push(Bag { weight_kg, size_cm });
        }

        let total = LuggageFeeResolver::new(fees, limits).total(&bags);
        Ok(Luggage { tier, bags, total })
    }

    fn checkout(&mut self, passenger: &str, trip: Trip, selection: Selection, luggage: Luggage) -> Result<State, ConsoleError> {
        let checkout = Checkout::new(
            selection.quote.price,
            selection.passengers,
            luggage.total,
            &self.network.charges,
        );
        self.say(&line_title("CHECKOUT"));
        self.say(&checkout.render());

        let confirmed = self.prompter.validate_yes_no(
            "Would you like to checkout? If not, you will be taken back to the booking menu (Y/N): ",
        )?;
        if !confirmed {
            debug!(total = %checkout.grand_total, "checkout declined");
            return Ok(State::Declined);
        }

        self.say(&horizontal_line());
        self.say(&format!(
            "\n{} You have booked your flight. {}",
            "Congratulations!".green(),
            trip.schedule()
        ));

        let boarding_pass = BoardingPass::issue(
            passenger,
            &trip,
            selection.quote.class,
            selection.quote.stop,
            &mut self.flavor,
        );
        self.say("");
        self.say(&line_title("Boarding Pass"));
        self.say(&format!("\n{}\n", boarding_pass.render()));
        self.say("Safe journey !");

        Ok(State::Confirmed(Box::new(Booking {
            passenger: passenger.to_string(),
            trip,
            selection,
            luggage,
            checkout,
            boarding_pass,
        })))
    }
}
