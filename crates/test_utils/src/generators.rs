//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating receipts that keep the
//! invariants the validator enforces: positive prices, at least one sharer
//! and non-negative tax and tip.
//!
//! The `extreme_*` strategies reach across the whole `Decimal` range and
//! are meant for checking that nothing panics, not for checking balances.

use core_kernel::{ConversionRate, CurrencyCode, Money, ParticipantName};
use domain_receipt::{Item, ItemDraft, Receipt, ReceiptForm};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rust_decimal::Decimal;

/// Pool of participant names used by generated receipts
pub const PEOPLE: [&str; 5] = ["Ann", "Bo", "Cy", "Di", "Ed"];

/// Strategy for generating positive amounts in cents (1 cent to $5,000)
pub fn positive_cents_strategy() -> impl Strategy<Value = i64> {
    1i64..500_000i64
}

/// Strategy for generating non-negative amounts in cents (up to $500)
pub fn non_negative_cents_strategy() -> impl Strategy<Value = i64> {
    0i64..50_000i64
}

/// Strategy for generating a participant name
pub fn participant_strategy() -> impl Strategy<Value = ParticipantName> {
    prop::sample::select(PEOPLE.to_vec()).prop_map(ParticipantName::from)
}

/// Strategy for generating a non-empty set of sharers
pub fn sharers_strategy() -> impl Strategy<Value = Vec<ParticipantName>> {
    subsequence(PEOPLE.to_vec(), 1..=PEOPLE.len())
        .prop_map(|people| people.into_iter().map(ParticipantName::from).collect())
}

/// Strategy for generating a valid item
pub fn item_strategy() -> impl Strategy<Value = Item> {
    ("[A-Z][a-z]{2,8}", positive_cents_strategy(), sharers_strategy()).prop_map(
        |(name, cents, sharers)| Item::new(name, Money::from_cents(cents), sharers),
    )
}

/// Strategy for generating a valid receipt with 1 to 6 items
pub fn receipt_strategy() -> impl Strategy<Value = Receipt> {
    (
        participant_strategy(),
        prop::collection::vec(item_strategy(), 1..6),
        non_negative_cents_strategy(),
        non_negative_cents_strategy(),
    )
        .prop_map(|(payer, items, tax, tip)| {
            Receipt::new(payer, items, Money::from_cents(tax), Money::from_cents(tip))
        })
}

/// Strategy for generating a list of 0 to 8 receipts
pub fn receipts_strategy() -> impl Strategy<Value = Vec<Receipt>> {
    prop::collection::vec(receipt_strategy(), 0..8)
}

/// Largest mantissa a `Decimal` can hold
const MAX_MANTISSA: u128 = (1u128 << 96) - 1;

/// Strategy for generating any positive `Decimal`, from 1e-28 up to `Decimal::MAX`
pub fn extreme_amount_strategy() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        (1u128..=MAX_MANTISSA, 0u32..=28)
            .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa as i128, scale)),
    ]
}

/// Strategy for generating conversion rates anywhere in the positive `Decimal` range
pub fn extreme_rate_strategy() -> impl Strategy<Value = ConversionRate> {
    extreme_amount_strategy().prop_filter_map("rate must be accepted", |rate| {
        ConversionRate::new(rate).ok()
    })
}

/// Strategy for generating a receipt whose amounts may overflow when added up
pub fn extreme_receipt_strategy() -> impl Strategy<Value = Receipt> {
    (
        participant_strategy(),
        prop::collection::vec((extreme_amount_strategy(), sharers_strategy()), 1..4),
        prop_oneof![Just(Decimal::ZERO), extreme_amount_strategy()],
        prop_oneof![Just(Decimal::ZERO), extreme_amount_strategy()],
    )
        .prop_map(|(payer, items, tax, tip)| {
            let items = items
                .into_iter()
                .enumerate()
                .map(|(i, (price, sharers))| {
                    Item::new(format!("Item {}", i + 1), Money::new(price), sharers)
                })
                .collect();
            Receipt::new(payer, items, Money::new(tax), Money::new(tip))
        })
}

/// Strategy for generating an entry form in USD or a foreign currency with extreme amounts
pub fn extreme_form_strategy() -> impl Strategy<Value = ReceiptForm> {
    (
        participant_strategy(),
        any::<bool>(),
        prop::collection::vec((extreme_amount_strategy(), sharers_strategy()), 1..4),
        prop_oneof![Just(Decimal::ZERO), extreme_amount_strategy()],
    )
        .prop_map(|(payer, foreign, items, tax)| {
            let currency = if foreign { CurrencyCode::parse("JPY") } else { CurrencyCode::usd() };
            items.into_iter().enumerate().fold(
                ReceiptForm::new(payer.as_str(), currency).with_tax(tax),
                |form, (i, (price, sharers))| {
                    form.with_item(ItemDraft::new(format!("Item {}", i + 1), price, sharers))
                },
            )
        })
}
