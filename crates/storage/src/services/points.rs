use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Item, Receipt, StoredReceipt};
use crate::repository::receipt::ReceiptRepository;
use crate::store::ReceiptStore;

use super::field_parse::{parse_amount, parse_date, parse_time};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Only the 14:00-14:59 hour is rewarded; 15:xx is not.
const AFTERNOON_HOUR: u32 = 14;

const QUARTER_CENTS: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// 0.2
const PRICE_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Points awarded by each rule for a single receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub odd_day: u64,
    pub afternoon: u64,
    pub item_descriptions: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.odd_day,
            self.afternoon,
            self.item_descriptions,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the loyalty points for a receipt.
///
/// Never fails: a field that does not parse only disables the rules that
/// depend on it.
pub fn compute_points(receipt: &Receipt) -> u64 {
    compute_breakdown(receipt).total()
}

pub fn compute_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);
    if total.is_none() {
        debug!(total = %receipt.total, "Unparseable total, skipping total rules");
    }

    let purchase_date = parse_date(&receipt.purchase_date);
    if purchase_date.is_none() {
        debug!(purchase_date = %receipt.purchase_date, "Unparseable purchase date");
    }

    let purchase_time = parse_time(&receipt.purchase_time);
    if purchase_time.is_none() {
        debug!(purchase_time = %receipt.purchase_time, "Unparseable purchase time");
    }

    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: round_dollar_points(total),
        quarter_multiple: quarter_multiple_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        odd_day: odd_day_points(purchase_date),
        afternoon: afternoon_points(purchase_time),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
    }
}

/// One point per ASCII letter or digit
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

pub fn round_dollar_points(total: Option<Decimal>) -> u64 {
    match total {
        Some(total) if total.fract().is_zero() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

/// Awards points when the total, truncated to whole cents, is a multiple of 25 cents.
pub fn quarter_multiple_points(total: Option<Decimal>) -> u64 {
    let is_quarter_multiple = total
        .and_then(|total| total.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.trunc().checked_rem(QUARTER_CENTS))
        .is_some_and(|remainder| remainder.is_zero());

    if is_quarter_multiple {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

pub fn odd_day_points(purchase_date: Option<NaiveDate>) -> u64 {
    match purchase_date {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

pub fn afternoon_points(purchase_time: Option<NaiveTime>) -> u64 {
    match purchase_time {
        Some(time) if time.hour() == AFTERNOON_HOUR => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3.
///
/// An empty description counts as length 0 and qualifies.
pub fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_amount(&item.price) else {
        debug!(price = %item.price, "Unparseable item price");
        return 0;
    };

    price
        .checked_mul(PRICE_MULTIPLIER)
        .map(|bonus| bonus.ceil().to_u64().unwrap_or(u64::MAX))
        .unwrap_or(u64::MAX)
}

/// Scores a receipt, stores it under a fresh identifier and returns that identifier.
pub fn process_receipt(store: &ReceiptStore, receipt: Receipt) -> String {
    let points = compute_points(&receipt);
    let id = store.next_id();

    let repo = ReceiptRepository::new(store.table());
    repo.insert(StoredReceipt {
        id: id.clone(),
        receipt,
        points,
    });

    info!(%id, points, "Receipt processed");
    id
}

/// Points stored for `id`, or `StorageError::NotFound`
pub fn lookup_points(store: &ReceiptStore, id: &str) -> Result<u64> {
    let repo = ReceiptRepository::new(store.table());
    repo.find_points(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::id::IdGenerator;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn receipt(retailer: &str, date: &str, time: &str, total: &str, items: Vec<Item>) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            items,
            total: total.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        )
    }

    fn corner_market_receipt() -> Receipt {
        receipt(
            "M&M Corner Market",
            "2022-03-20",
            "14:33",
            "9.00",
            vec![Item::new("Gatorade", "2.25"); 4],
        )
    }

    fn amount(raw: &str) -> Option<Decimal> {
        Some(Decimal::from_str(raw).unwrap())
    }

    struct SequentialIds(AtomicUsize);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> String {
            format!("receipt-{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let breakdown = compute_breakdown(&target_receipt());

        assert_eq!(breakdown.retailer, 6);
        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.odd_day, 6);
        assert_eq!(breakdown.afternoon, 0);
        assert_eq!(breakdown.item_descriptions, 6);
        assert_eq!(breakdown.total(), 28);
        assert_eq!(compute_points(&target_receipt()), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let breakdown = compute_breakdown(&corner_market_receipt());

        assert_eq!(breakdown.retailer, 14);
        assert_eq!(breakdown.round_dollar, 50);
        assert_eq!(breakdown.quarter_multiple, 25);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 10);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(compute_points(&corner_market_receipt()), 109);
    }

    #[test]
    fn test_retailer_counts_only_ascii_alphanumerics() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("7-Eleven #42"), 9);
        assert_eq!(retailer_points("Café Müller"), 8);
        assert_eq!(retailer_points(""), 0);
    }

    #[test]
    fn test_round_dollar_total() {
        assert_eq!(round_dollar_points(amount("9.00")), 50);
        assert_eq!(round_dollar_points(amount("12")), 50);
        assert_eq!(round_dollar_points(amount("0.00")), 50);
        assert_eq!(round_dollar_points(amount("9.01")), 0);
        assert_eq!(round_dollar_points(None), 0);
    }

    #[test]
    fn test_quarter_multiple_total() {
        assert_eq!(quarter_multiple_points(amount("1.25")), 25);
        assert_eq!(quarter_multiple_points(amount("1.50")), 25);
        assert_eq!(quarter_multiple_points(amount("10.75")), 25);
        assert_eq!(quarter_multiple_points(amount("35.35")), 0);
        assert_eq!(quarter_multiple_points(amount("0.10")), 0);
        assert_eq!(quarter_multiple_points(None), 0);
    }

    #[test]
    fn test_quarter_multiple_truncates_fractional_cents() {
        assert_eq!(quarter_multiple_points(amount("1.251")), 25);
        assert_eq!(quarter_multiple_points(amount("1.249")), 0);
    }

    #[test]
    fn test_round_dollar_implies_quarter_multiple() {
        let totals = [
            "0", "0.00", "0.25", "0.50", "1.00", "1.01", "2.75", "9.00", "35.35", "100",
            "1234.00", "1234.99",
        ];
        for raw in totals {
            let total = amount(raw);
            if round_dollar_points(total) > 0 {
                assert!(quarter_multiple_points(total) > 0, "total {raw}");
            }
        }
    }

    #[test]
    fn test_item_pair_bonus_grows_by_five_every_two_items() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(3), 5);

        for count in 0..50 {
            assert!(item_pair_points(count + 1) >= item_pair_points(count));
            assert_eq!(item_pair_points(count + 2), item_pair_points(count) + 5);
        }
    }

    #[test]
    fn test_odd_day() {
        assert_eq!(odd_day_points(parse_date("2022-01-01")), 6);
        assert_eq!(odd_day_points(parse_date("2022-01-31")), 6);
        assert_eq!(odd_day_points(parse_date("2022-03-20")), 0);
        assert_eq!(odd_day_points(None), 0);
    }

    #[test]
    fn test_afternoon_rewards_only_the_two_pm_hour() {
        assert_eq!(afternoon_points(parse_time("14:00")), 10);
        assert_eq!(afternoon_points(parse_time("14:59")), 10);
        assert_eq!(afternoon_points(parse_time("13:59")), 0);
        assert_eq!(afternoon_points(parse_time("15:00")), 0);
        assert_eq!(afternoon_points(parse_time("15:30")), 0);
        assert_eq!(afternoon_points(None), 0);
    }

    #[test]
    fn test_item_description_bonus() {
        assert_eq!(item_description_points(&Item::new("Emils Cheese Pizza", "12.25")), 3);
        assert_eq!(
            item_description_points(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
            3
        );
        assert_eq!(item_description_points(&Item::new("Mountain Dew 12PK", "6.49")), 0);
        assert_eq!(item_description_points(&Item::new("abc", "5.00")), 1);
        assert_eq!(item_description_points(&Item::new("abc", "0.00")), 0);
    }

    #[test]
    fn test_item_description_bonus_for_empty_description() {
        assert_eq!(item_description_points(&Item::new("", "10.00")), 2);
        assert_eq!(item_description_points(&Item::new("     ", "1.00")), 1);
    }

    #[test]
    fn test_item_description_bonus_ignores_bad_price() {
        assert_eq!(item_description_points(&Item::new("abc", "free")), 0);
        assert_eq!(item_description_points(&Item::new("abc", "-5.00")), 0);
    }

    #[test]
    fn test_unparseable_total_only_disables_total_rules() {
        let mut bad_total = corner_market_receipt();
        bad_total.total = "not-a-number".to_string();

        let breakdown = compute_breakdown(&bad_total);
        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.total(), 109 - 50 - 25);
    }

    #[test]
    fn test_unparseable_date_and_time_score_zero() {
        let mut bad = target_receipt();
        bad.purchase_date = "yesterday".to_string();
        bad.purchase_time = "noon".to_string();

        let breakdown = compute_breakdown(&bad);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 0);
        assert_eq!(breakdown.total(), 28 - 6);
    }

    #[test]
    fn test_empty_items() {
        let empty = receipt("Target", "2022-01-01", "13:01", "35.35", Vec::new());

        let breakdown = compute_breakdown(&empty);
        assert_eq!(breakdown.item_pairs, 0);
        assert_eq!(breakdown.item_descriptions, 0);
        assert_eq!(breakdown.total(), 6 + 6);
    }

    #[test]
    fn test_empty_receipt_still_scores() {
        let breakdown = compute_breakdown(&Receipt::default());
        assert_eq!(breakdown, PointsBreakdown::default());
        assert_eq!(compute_points(&Receipt::default()), 0);
    }

    #[test]
    fn test_compute_points_is_deterministic() {
        for receipt in [target_receipt(), corner_market_receipt(), Receipt::default()] {
            assert_eq!(compute_points(&receipt), compute_points(&receipt.clone()));
        }
    }

    #[test]
    fn test_huge_price_saturates() {
        let items = vec![Item::new("abc", "100000000000000000000000"); 2];
        let huge = receipt("", "", "", "", items);
        assert_eq!(compute_points(&huge), u64::MAX);
    }

    #[test]
    fn test_process_receipt_stores_computed_points() {
        let store = ReceiptStore::with_id_generator(SequentialIds(AtomicUsize::new(0)));

        let id = process_receipt(&store, corner_market_receipt());
        assert_eq!(id, "receipt-0");
        assert_eq!(lookup_points(&store, &id), Ok(109));

        let id = process_receipt(&store, target_receipt());
        assert_eq!(id, "receipt-1");
        assert_eq!(lookup_points(&store, &id), Ok(28));
    }

    #[test]
    fn test_lookup_unknown_id_is_not_found() {
        let store = ReceiptStore::new();
        process_receipt(&store, target_receipt());

        assert_eq!(lookup_points(&store, "missing"), Err(StorageError::NotFound));
    }
}
