use crate::fare::FareClass;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoyaltyTier {
    None,
    Bronze,
    Silver,
    Gold,
}

impl LoyaltyTier {
    pub const ALL: [LoyaltyTier; 4] = [LoyaltyTier::None, LoyaltyTier::Bronze, LoyaltyTier::Silver, LoyaltyTier::Gold];

    /// Tier as numbered in the rewards menu, 0 meaning no program.
    pub fn from_option(option: u32) -> Option<LoyaltyTier> {
        Self::ALL.get(option as usize).copied()
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoyaltyTier::None => write!(f, "no loyalty program"),
            LoyaltyTier::Bronze => write!(f, "Bronze Loyalty Program"),
            LoyaltyTier::Silver => write!(f, "Silver Loyalty Program"),
            LoyaltyTier::Gold => write!(f, "Gold Loyalty Program"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBagFee", into = "RawBagFee")]
pub enum BagFee {
    Free,
    Amount(Money),
}

impl BagFee {
    pub fn amount(&self) -> Money {
        match self {
            BagFee::Free => Money::ZERO,
            BagFee::Amount(m) => *m,
        }
    }
}

impl fmt::Display for BagFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagFee::Free => write!(f, "Free"),
            BagFee::Amount(m) => write!(f, "${}", m),
        }
    }
}

/// A fee as written in the network file: a number or the "Free" marker.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawBagFee {
    Marker(String),
    Amount(Decimal),
}

impl TryFrom<RawBagFee> for BagFee {
    type Error = String;

    fn try_from(raw: RawBagFee) -> Result<Self, Self::Error> {
        match raw {
            RawBagFee::Marker(m) if m.eq_ignore_ascii_case("free") => Ok(BagFee::Free),
            RawBagFee::Marker(m) => Err(format!("unknown bag fee marker {:?}", m)),
            RawBagFee::Amount(a) if a.is_sign_negative() => Err(format!("negative bag fee {}", a)),
            RawBagFee::Amount(a) => Ok(BagFee::Amount(Money(a))),
        }
    }
}

impl From<BagFee> for RawBagFee {
    fn from(fee: BagFee) -> Self {
        match fee {
            BagFee::Free => RawBagFee::Marker("Free".to_string()),
            BagFee::Amount(m) => RawBagFee::Amount(m.0),
        }
    }
}

/// 1st bag, 2nd bag, 3rd bag and every bag after that.
pub type BagFees = [BagFee; 4];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRow {
    pub tier: LoyaltyTier,
    pub class: FareClass,
    pub fees: BagFees,
}

#[derive(Debug, Clone, Default)]
pub struct LuggageFeeTable {
    rows: HashMap<(LoyaltyTier, FareClass), BagFees>,
}

impl LuggageFeeTable {
    pub fn new(rows: impl IntoIterator<Item = FeeRow>) -> LuggageFeeTable {
        LuggageFeeTable {
            rows: rows.into_iter().map(|r| ((r.tier, r.class), r.fees)).collect(),
        }
    }

    pub fn fees(&self, tier: LoyaltyTier, class: FareClass) -> Option<&BagFees> {
        self.rows.get(&(tier, class))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn render(fees: &BagFees) -> String {
        #[derive(Tabled)]
        struct Row {
            #[tabled(rename = "Luggage")]
            label: &'static str,
            #[tabled(rename = "Price")]
            fee: BagFee,
        }

        let rows = ["1st bag", "2nd bag", "3rd bag", "Extra bags"]
            .into_iter()
            .zip(fees.iter())
            .map(|(label, fee)| Row { label, fee: *fee });
        let mut table = tabled::Table::new(rows);
        table.with(Style::rounded());
        table.with(Alignment::center());
        table.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag {
    pub weight_kg: u32,
    pub size_cm: u32,
}

/// What a checked bag may weigh and measure, and where surcharges start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuggageLimits {
    pub min_weight_kg: u32,
    pub max_weight_kg: u32,
    pub free_weight_kg: u32,
    pub min_size_cm: u32,
    pub max_size_cm: u32,
    pub free_size_cm: u32,
    pub surcharge: Money,
}

impl Default for LuggageLimits {
    fn default() -> Self {
        LuggageLimits {
            min_weight_kg: 5,
            max_weight_kg: 32,
            free_weight_kg: 23,
            min_size_cm: 50,
            max_size_cm: 320,
            free_size_cm: 292,
            surcharge: Money::whole(120),
        }
    }
}

impl LuggageLimits {
    pub fn surcharge(&self, bag: &Bag) -> Money {
        let mut total = Money::ZERO;
        if bag.weight_kg > self.free_weight_kg {
            total += self.surcharge;
        }
        if bag.size_cm > self.free_size_cm {
            total += self.surcharge;
        }
        total
    }
}

pub struct LuggageFeeResolver<'a> {
    fees: &'a BagFees,
    limits: &'a LuggageLimits,
}

impl<'a> LuggageFeeResolver<'a> {
    pub fn new(fees: &'a BagFees, limits: &'a LuggageLimits) -> LuggageFeeResolver<'a> {
        LuggageFeeResolver { fees, limits }
    }

    /// Table fee for the bag at `index`, counting from 0.
    pub fn table_fee(&self, index: usize) -> Money {
        self.fees[index.min(3)].amount()
    }

    pub fn bag_fee(&self, index: usize, bag: &Bag) -> Money {
        self.table_fee(index) + self.limits.surcharge(bag)
    }

    pub fn total(&self, bags: &[Bag]) -> Money {
        let total = bags.iter().enumerate().map(|(i, bag)| self.bag_fee(i, bag)).sum();
        debug!(bags = bags.len(), %total, "luggage fees");
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::money;
    use proptest::prelude::*;

    fn fees(amounts: [Option<u32>; 4]) -> BagFees {
        amounts.map(|a| a.map(|m| BagFee::Amount(Money::whole(m))).unwrap_or(BagFee::Free))
    }

    fn bag(weight_kg: u32, size_cm: u32) -> Bag {
        Bag { weight_kg, size_cm }
    }

    #[test]
    fn test_table_fee_by_index() {
        let fees = fees([None, Some(50), Some(80), Some(120)]);
        let limits = LuggageLimits::default();
        let resolver = LuggageFeeResolver::new(&fees, &limits);
        assert_eq!(Money::ZERO, resolver.table_fee(0));
        assert_eq!(Money::whole(50), resolver.table_fee(1));
        assert_eq!(Money::whole(80), resolver.table_fee(2));
        assert_eq!(Money::whole(120), resolver.table_fee(3));
        assert_eq!(Money::whole(120), resolver.table_fee(8));
    }

    #[test]
    fn test_only_bags_past_the_third_pay_extra() {
        let fees = fees([Some(50), Some(70), Some(100), Some(140)]);
        let limits = LuggageLimits::default();
        let resolver = LuggageFeeResolver::new(&fees, &limits);
        let bags = vec![bag(10, 100); 5];
        assert_eq!(Money::whole(50 + 70 + 100 + 140 + 140), resolver.total(&bags));
    }

    #[test]
    fn test_overweight_surcharge() {
        let fees = fees([Some(50), Some(70), Some(100), Some(140)]);
        let limits = LuggageLimits::default();
        let resolver = LuggageFeeResolver::new(&fees, &limits);
        assert_eq!(Money::whole(170), resolver.bag_fee(0, &bag(25, 100)));
        assert_eq!(Money::whole(50), resolver.bag_fee(0, &bag(23, 292)));
    }

    #[test]
    fn test_oversize_and_overweight_both_apply() {
        let fees = fees([None, None, None, None]);
        let limits = LuggageLimits::default();
        let resolver = LuggageFeeResolver::new(&fees, &limits);
        assert_eq!(Money::whole(120), resolver.bag_fee(0, &bag(10, 300)));
        assert_eq!(Money::whole(240), resolver.bag_fee(5, &bag(32, 320)));
    }

    #[test]
    fn test_mixed_bags() {
        let fees = fees([None, Some(50), Some(80), Some(120)]);
        let limits = LuggageLimits::default();
        let resolver = LuggageFeeResolver::new(&fees, &limits);
        let bags = [bag(20, 100), bag(25, 150), bag(10, 300), bag(30, 60)];
        assert_eq!(Money::whole(610), resolver.total(&bags));
        assert_eq!(Money::ZERO, resolver.total(&[]));
    }

    #[test]
    fn test_tier_from_option() {
        assert_eq!(Some(LoyaltyTier::None), LoyaltyTier::from_option(0));
        assert_eq!(Some(LoyaltyTier::Gold), LoyaltyTier::from_option(3));
        assert_eq!(None, LoyaltyTier::from_option(4));
    }

    #[test]
    fn test_fee_row_json() {
        let row: FeeRow =
            serde_json::from_str(r#"{"tier": "Bronze", "class": "Business", "fees": ["Free", 50, 80.5, 120]}"#).unwrap();
        assert_eq!(LoyaltyTier::Bronze, row.tier);
        assert_eq!(FareClass::Business, row.class);
        assert_eq!(BagFee::Free, row.fees[0]);
        assert_eq!(BagFee::Amount(money("80.5")), row.fees[2]);

        assert!(serde_json::from_str::<FeeRow>(r#"{"tier": "Gold", "class": "First", "fees": ["Gratis", 1, 2, 3]}"#).is_err());
        assert!(serde_json::from_str::<FeeRow>(r#"{"tier": "Gold", "class": "First", "fees": [1, 2, 3]}"#).is_err());
    }

    #[test]
    fn test_render_fee_table() {
        let table = LuggageFeeTable::render(&fees([None, Some(50), Some(80), Some(120)]));
        assert!(table.contains("1st bag"));
        assert!(table.contains("Free"));
        assert!(table.contains("$120.00"));
    }

    proptest! {
        #[test]
        fn test_fee_is_table_fee_plus_surcharges(
            amounts in prop::array::uniform4(prop::option::of(0..200u32)),
            index in 0..9usize,
            weight in 5..=32u32,
            size in 50..=320u32,
        ) {
            let fees = fees(amounts);
            let limits = LuggageLimits::default();
            let resolver = LuggageFeeResolver::new(&fees, &limits);
            let expected_table = amounts[index.min(3)].map(Money::whole).unwrap_or_default();
            let surcharges = u32::from(weight > 23) + u32::from(size > 292);
            prop_assert_eq!(
                expected_table + Money::whole(120 * surcharges),
                resolver.bag_fee(index, &bag(weight, size))
            );
        }
    }
}
