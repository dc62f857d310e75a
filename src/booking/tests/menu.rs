use crate::booking::flow::State;
use crate::booking::tests::utils::{Attempt, flow, network, script};
use crate::error::{BookingError, ConsoleError};
use crate::money::money;

#[test]
fn test_declined_checkout_starts_over() {
    let network = network();
    let declined = Attempt {
        confirm: "n",
        ..Attempt::oneway("Ottawa", "Montreal")
    };
    let answers = script(&[declined, Attempt::oneway("Calgary", "Edmonton")]);
    let mut flow = flow(&network, &answers);

    let booking = flow.run().unwrap();

    assert_eq!("YYC", &*booking.trip.origin.code);
    assert_eq!(money("40.86"), booking.selection.quote.price);
    let output = flow.into_console().output();
    assert_eq!(2, output.matches("BOOKING MENU").count());
    assert_eq!(2, output.matches("CHECKOUT").count());
    assert_eq!(1, output.matches("Congratulations!").count());
}

#[test]
fn test_return_to_menu_after_quote() {
    let network = network();
    let mut answers = script(&[]);
    answers.extend(["2", "Winnipeg", "Thunder Bay", "10/30/26", "2"]);
    answers.extend(Attempt::oneway("Hamilton", "Yellowknife").answers());
    let mut flow = flow(&network, &answers);

    let booking = flow.run().unwrap();

    assert_eq!("YHM", &*booking.trip.origin.code);
    let output = flow.into_console().output();
    assert!(output.contains("For a oneway trip from WINNIPEG to THUNDER BAY:"));
    assert!(output.contains("100.44"));
    assert_eq!(1, output.matches("Select Package").count());
    assert_eq!(2, output.matches("BOOKING MENU").count());
}

#[test]
fn test_invalid_answers_are_asked_again() {
    let network = network();
    let answers = vec![
        "", "Ada", "Lovelace",
        "3", "one-way", "2",
        "Toronto", "Ottawa",
        "ottawa", "PEI",
        "10/19/26", "2026-11-01", "11/01/26",
        "0", "1",
        "7", "2",
        "10", "2",
        "4", "1",
        "10", "2",
        "4", "40", "22",
        "1000", "158",
        "23", "293",
        "ok", "Y",
    ];
    let mut flow = flow(&network, &answers);

    let booking = flow.run().unwrap();

    assert_eq!("YYG", &*booking.trip.destination.code);
    assert_eq!(2, booking.selection.passengers);
    assert_eq!(2, booking.luggage.bags.len());
    // bronze economy: 40 + 60, second bag oversize
    assert_eq!(money("220"), booking.luggage.total.to_cents());

    let output = flow.into_console().output();
    assert!(output.contains("Please enter a name."));
    assert!(output.contains("Input must be between 1 and 2 (inclusive)."));
    assert!(output.contains("Invalid input. Try again and input a valid number."));
    assert!(output.contains("Invalid input. Try again and input a service city."));
    assert!(output.contains("Origin and destination must be different cities."));
    assert!(output.contains("Invalid input. Try again and use the MM/DD/YY format."));
    assert!(output.contains("Input must be between 0 and 3 (inclusive)."));
    assert!(output.contains("Input must be between 5 and 32 (inclusive)."));
    assert!(output.contains("Input must be between 50 and 320 (inclusive)."));
    assert!(output.contains("Invalid input. Try again and input either Y or N."));
}

#[test]
fn test_closed_input_ends_the_flow() {
    let network = network();
    let mut flow = flow(&network, &["Ada", "Lovelace", "2", "Ottawa"]);

    let result = flow.run();

    assert!(matches!(result, Err(BookingError::Console(ConsoleError::Closed))));
    assert_eq!(0, flow.console().remaining());
}

#[test]
fn test_step_transitions() {
    let network = network();
    let mut flow = flow(&network, &["2", "Ottawa", "Montreal", "10/25/26", "1"]);

    let state = flow.step("Ada Lovelace", State::SelectingTrip).unwrap();
    assert_eq!("quoting fares", state.name());
    let state = flow.step("Ada Lovelace", state).unwrap();
    assert_eq!("purchasing", state.name());
    let state = flow.step("Ada Lovelace", state).unwrap();
    assert_eq!("selecting package", state.name());

    assert_eq!("selecting trip", flow.step("Ada Lovelace", State::Declined).unwrap().name());
    assert_eq!("selecting trip", flow.step("Ada Lovelace", State::ReturningToMenu).unwrap().name());
}
