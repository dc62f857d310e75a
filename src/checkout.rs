use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};

/// Per-booking charges added on top of fares and luggage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charges {
    pub carrier_surcharge: Money,
    pub tax_rate: Decimal,
    pub security_fee: Money,
    pub passenger_service_fee: Money,
    pub airport_improvement_fee: Money,
    pub user_development_fee: Money,
}

impl Default for Charges {
    fn default() -> Self {
        Charges {
            carrier_surcharge: Money(Decimal::new(53402, 2)),
            tax_rate: Decimal::new(13, 2),
            security_fee: Money(Decimal::new(2564, 2)),
            passenger_service_fee: Money(Decimal::new(313, 2)),
            airport_improvement_fee: Money(Decimal::new(3542, 2)),
            user_development_fee: Money(Decimal::new(327, 2)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub passengers: u32,
    pub base_fare: Money,
    pub luggage: Money,
    pub carrier_surcharge: Money,
    pub subtotal: Money,
    pub tax: Money,
    pub security_fee: Money,
    pub passenger_service_fee: Money,
    pub airport_improvement_fee: Money,
    pub user_development_fee: Money,
    pub grand_total: Money,
}

impl Checkout {
    pub fn new(fare: Money, passengers: u32, luggage: Money, charges: &Charges) -> Checkout {
        let base_fare = (fare * passengers).to_cents();
        let subtotal = base_fare + luggage + charges.carrier_surcharge;
        let tax = (subtotal * charges.tax_rate).to_cents();
        let grand_total = subtotal
            + tax
            + charges.security_fee
            + charges.passenger_service_fee
            + charges.airport_improvement_fee
            + charges.user_development_fee;

        Checkout {
            passengers,
            base_fare,
            luggage,
            carrier_surcharge: charges.carrier_surcharge,
            subtotal,
            tax,
            security_fee: charges.security_fee,
            passenger_service_fee: charges.passenger_service_fee,
            airport_improvement_fee: charges.airport_improvement_fee,
            user_development_fee: charges.user_development_fee,
            grand_total,
        }
    }

    pub fn render(&self) -> String {
        let passengers = match self.passengers {
            1 => "1 passenger".to_string(),
            n => format!("{} passengers", n),
        };
        let luggage = if self.luggage.is_zero() {
            "None!".to_string()
        } else {
            self.luggage.to_string()
        };

        let lines = [
            (format!("Base Fare - {}", passengers), self.base_fare.to_string()),
            ("Luggage Cost".to_string(), luggage),
            ("Carrier surcharges".to_string(), self.carrier_surcharge.to_string()),
            ("Aviation Security Fee".to_string(), self.security_fee.to_string()),
            ("Harmonized Sales Tax (HST)".to_string(), self.tax.to_string()),
            ("Passenger Service fee".to_string(), self.passenger_service_fee.to_string()),
            ("Airport Improvement Fee".to_string(), self.airport_improvement_fee.to_string()),
            ("User Development Fee".to_string(), self.user_development_fee.to_string()),
            ("Grand total".to_string(), self.grand_total.to_string()),
        ];
        let mut builder = Builder::default();
        for (item, amount) in lines {
            builder.push_record([item, amount]);
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        table.with(Alignment::left());
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::money;

    #[test]
    fn test_ottawa_montreal_economy_single_passenger() {
        let checkout = Checkout::new(money("25.21"), 1, Money::ZERO, &Charges::default());
        assert_eq!(money("25.21"), checkout.base_fare);
        assert_eq!(money("559.23"), checkout.subtotal);
        assert_eq!(money("72.70"), checkout.tax);
        assert_eq!(money("699.39"), checkout.grand_total);
    }

    #[test]
    fn test_fixed_fees_are_per_booking() {
        let charges = Charges::default();
        let one = Checkout::new(money("100"), 1, Money::ZERO, &charges);
        let three = Checkout::new(money("100"), 3, Money::ZERO, &charges);
        assert_eq!(money("300"), three.base_fare);
        assert_eq!(one.carrier_surcharge, three.carrier_surcharge);
        assert_eq!(money("200"), Money(three.subtotal.0 - one.subtotal.0));
        assert_eq!(money("226.00"), Money(three.grand_total.0 - one.grand_total.0));
    }

    #[test]
    fn test_regina_halifax_business_connecting_with_bags() {
        let checkout = Checkout::new(money("7930.30"), 2, Money::whole(610), &Charges::default());
        assert_eq!(money("15860.60"), checkout.base_fare);
        assert_eq!(money("17004.62"), checkout.subtotal);
        assert_eq!(money("2210.60"), checkout.tax);
        assert_eq!(money("19282.68"), checkout.grand_total);
    }

    #[test]
    fn test_calgary_edmonton_first_direct() {
        let checkout = Checkout::new(money("367.74"), 3, Money::ZERO, &Charges::default());
        assert_eq!(money("1103.22"), checkout.base_fare);
        assert_eq!(money("212.84"), checkout.tax);
        assert_eq!(money("1917.54"), checkout.grand_total);
    }

    #[test]
    fn test_render() {
        let table = Checkout::new(money("25.21"), 1, Money::ZERO, &Charges::default()).render();
        assert!(table.contains("Base Fare - 1 passenger"));
        assert!(table.contains("None!"));
        assert!(table.contains("534.02"));
        assert!(table.contains("699.39"));

        let table = Checkout::new(money("25.21"), 2, Money::whole(170), &Charges::default()).render();
        assert!(table.contains("Base Fare - 2 passengers"));
        assert!(table.contains("170.00"));
    }
}
