//! Integration tests for domain_receipt

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ConversionRate, CurrencyCode, Money, ParticipantName};

use domain_receipt::{
    Item, ItemDraft, Receipt, ReceiptBook, ReceiptDraft, ReceiptError, ReceiptForm,
    ReceiptSummary, ReceiptValidator, Roster, SubmitOutcome, ValidationError, PAYER_PLACEHOLDER,
};

fn names(list: &[&str]) -> Vec<ParticipantName> {
    list.iter().map(|n| ParticipantName::from(*n)).collect()
}

fn lunch_form(payer: &str) -> ReceiptForm {
    ReceiptForm::new(payer, CurrencyCode::usd())
        .with_item(ItemDraft::new("Lunch", dec!(20), names(&["A", "B"])))
}

fn eur() -> ConversionRate {
    ConversionRate::new(dec!(0.9)).unwrap()
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_valid_draft_has_no_errors() {
        let draft = lunch_form("A").normalize(&ConversionRate::identity()).unwrap();
        assert!(ReceiptValidator::validate(&draft).is_empty());
    }

    #[test]
    fn test_every_violation_reported_in_order() {
        let draft = ReceiptDraft::new(
            "  ",
            vec![
                Item::new("", Money::new(dec!(5)), names(&["A"])),
                Item::new("Soup", Money::zero(), vec![]),
            ],
            Money::zero(),
            Money::zero(),
        );

        let errors = ReceiptValidator::validate(&draft);

        assert_eq!(
            errors,
            vec![
                ValidationError::MissingPayer,
                ValidationError::MissingItemName { position: 1 },
                ValidationError::NonPositivePrice { position: 2 },
                ValidationError::EmptySharedWith { position: 2 },
            ]
        );
    }

    #[test]
    fn test_rejection_messages() {
        let form = ReceiptForm::new(PAYER_PLACEHOLDER, CurrencyCode::usd())
            .with_item(ItemDraft::new("Cake", dec!(-3), vec![]));

        let err = ReceiptValidator::accept(&form, &ConversionRate::identity()).unwrap_err();

        assert_eq!(
            err.messages(),
            vec![
                "Payer name is required.",
                "Item #1 amount must be greater than 0.",
                "Item #1 'Shared with' must include at least one person.",
            ]
        );
    }

    #[test]
    fn test_negative_tax_and_tip_rejected() {
        let form = lunch_form("A").with_tax(dec!(-1)).with_tip(dec!(-0.01));
        let err = ReceiptValidator::accept(&form, &ConversionRate::identity()).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::Validation(vec![ValidationError::NegativeTax, ValidationError::NegativeTip])
        );
    }

    #[test]
    fn test_receipt_without_items_is_accepted() {
        let form = ReceiptForm::new("A", CurrencyCode::usd()).with_tip(dec!(5));
        let receipt = ReceiptValidator::accept(&form, &ConversionRate::identity()).unwrap();
        assert!(receipt.items.is_empty());
        assert_eq!(receipt.subtotal(), Ok(Money::zero()));
    }

    #[test]
    fn test_names_outside_roster_are_accepted() {
        let form = ReceiptForm::new("Zed", CurrencyCode::usd())
            .with_item(ItemDraft::new("Tea", dec!(3), names(&["Nobody"])));
        assert!(ReceiptValidator::accept(&form, &ConversionRate::identity()).is_ok());
    }

    #[test]
    fn test_items_summing_past_decimal_range_rejected() {
        let form = ReceiptForm::new("A", CurrencyCode::usd())
            .with_item(ItemDraft::new("Yacht", dec!(50000000000000000000000000000), names(&["A"])))
            .with_item(ItemDraft::new("Island", dec!(50000000000000000000000000000), names(&["B"])));
        let mut book = ReceiptBook::new();

        let err = book.submit(&form, &ConversionRate::identity()).unwrap_err();

        assert_eq!(err, ReceiptError::Validation(vec![ValidationError::TotalOutOfRange]));
        assert_eq!(err.messages(), vec!["Receipt total is too large."]);
        assert!(book.is_empty());
    }

    #[test]
    fn test_validation_error_serializes_with_kind() {
        let json = serde_json::to_value(ValidationError::EmptySharedWith { position: 2 }).unwrap();
        assert_eq!(json["kind"], "empty_shared_with");
        assert_eq!(json["position"], 2);
    }
}

// ============================================================================
// Currency Tests
// ============================================================================

mod currency_tests {
    use super::*;

    #[test]
    fn test_foreign_form_converted_to_usd() {
        let form = ReceiptForm::new("A", CurrencyCode::parse("eur"))
            .with_tax(dec!(9))
            .with_item(ItemDraft::new("Dinner", dec!(18), names(&["A", "B"])));

        let receipt = ReceiptValidator::accept(&form, &eur()).unwrap();

        assert_eq!(receipt.currency.as_str(), "EUR");
        assert_eq!(receipt.items[0].price_usd.amount(), dec!(20));
        assert_eq!(receipt.items[0].price_foreign, dec!(18));
        assert_eq!(receipt.tax.amount(), dec!(10));
        assert_eq!(receipt.tax_foreign, dec!(9));
        assert_eq!(receipt.total().unwrap().amount(), dec!(30));
    }

    #[test]
    fn test_zero_rate_rejects_foreign_prices() {
        let rate = ConversionRate::new(Decimal::ZERO).unwrap();
        let form = ReceiptForm::new("A", CurrencyCode::parse("JPY"))
            .with_item(ItemDraft::new("Ramen", dec!(1200), names(&["A"])));

        let err = ReceiptValidator::accept(&form, &rate).unwrap_err();
        assert_eq!(
            err,
            ReceiptError::Validation(vec![ValidationError::NonPositivePrice { position: 1 }])
        );
    }

    #[test]
    fn test_tiny_rate_reports_unconvertible_amounts() {
        let rate = ConversionRate::new(dec!(0.0000000000000000000000000001)).unwrap();
        let form = ReceiptForm::new("A", CurrencyCode::parse("EUR"))
            .with_tax(dec!(1))
            .with_item(ItemDraft::new("Dinner", dec!(100), names(&["A", "B"])));
        let mut book = ReceiptBook::new();

        let err = book.submit(&form, &rate).unwrap_err();

        assert_eq!(
            err.messages(),
            vec!["Tax is too large to convert.", "Item #1 amount is too large to convert."]
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_huge_rate_on_usd_receipt_rejected() {
        let rate = ConversionRate::new(dec!(1000000000)).unwrap();
        let form = ReceiptForm::new("A", CurrencyCode::usd())
            .with_item(ItemDraft::new("Jet", dec!(100000000000000000000000), names(&["A"])));

        assert_eq!(
            ReceiptValidator::accept(&form, &rate),
            Err(ReceiptError::Validation(vec![ValidationError::PriceOutOfRange { position: 1 }]))
        );
    }

    #[test]
    fn test_summary_fails_when_rate_overflows_foreign_column() {
        let receipts = vec![Receipt::new(
            "A",
            vec![Item::new("Jet", Money::new(dec!(100000000000000000000000)), names(&["A"]))],
            Money::zero(),
            Money::zero(),
        )];
        let rate = ConversionRate::new(dec!(1000000000)).unwrap();

        assert!(ReceiptSummary::for_all(&receipts, &rate).is_err());
        assert!(ReceiptSummary::for_all(&receipts, &ConversionRate::identity()).is_ok());
    }

    #[test]
    fn test_usd_form_ignores_rate() {
        let receipt = ReceiptValidator::accept(&lunch_form("A"), &eur()).unwrap();
        assert_eq!(receipt.items[0].price_usd.amount(), dec!(20));
        assert_eq!(receipt.items[0].price_foreign, dec!(18.0));
    }

    #[test]
    fn test_summary_shows_both_columns() {
        let form = ReceiptForm::new("B", CurrencyCode::parse("EUR"))
            .with_tip(dec!(4.5))
            .with_item(ItemDraft::new("Tapas", dec!(27), names(&["A", "B"])));
        let receipts = vec![
            ReceiptValidator::accept(&lunch_form("A"), &eur()).unwrap(),
            ReceiptValidator::accept(&form, &eur()).unwrap(),
        ];

        let summaries = ReceiptSummary::for_all(&receipts, &eur()).unwrap();

        assert_eq!(summaries[0].number, 1);
        assert_eq!(summaries[0].total_usd.amount(), dec!(20));
        assert_eq!(summaries[0].total_foreign, dec!(18.00));
        assert_eq!(summaries[1].number, 2);
        assert_eq!(summaries[1].total_usd.amount(), dec!(35));
        assert_eq!(summaries[1].total_foreign, dec!(31.5));
    }
}

// ============================================================================
// Receipt Book Tests
// ============================================================================

mod book_tests {
    use super::*;

    #[test]
    fn test_add_edit_delete_lifecycle() {
        let rate = ConversionRate::identity();
        let mut book = ReceiptBook::new();

        assert_eq!(book.submit(&lunch_form("A"), &rate).unwrap(), SubmitOutcome::Added(0));
        assert_eq!(book.submit(&lunch_form("B"), &rate).unwrap(), SubmitOutcome::Added(1));

        book.begin_edit(1).unwrap();
        let mut form = book.edit_form().unwrap();
        assert_eq!(form.payer, "B");
        form.tip = dec!(2);

        assert_eq!(book.submit(&form, &rate).unwrap(), SubmitOutcome::Replaced(1));
        assert_eq!(book.get(1).unwrap().total().unwrap().amount(), dec!(22));
        assert_eq!(book.editing(), None);

        let removed = book.remove(0).unwrap();
        assert_eq!(removed.payer.as_str(), "A");
        assert_eq!(book.len(), 1);
        assert_eq!(book.get(0).unwrap().payer.as_str(), "B");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut book = ReceiptBook::new();
        assert_eq!(
            book.remove(0),
            Err(ReceiptError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_foreign_receipt_edits_in_entered_currency() {
        let rate = eur();
        let mut book = ReceiptBook::new();
        let form = ReceiptForm::new("A", CurrencyCode::parse("EUR"))
            .with_item(ItemDraft::new("Dinner", dec!(18), names(&["A", "B"])));
        book.submit(&form, &rate).unwrap();

        book.begin_edit(0).unwrap();
        let edit = book.edit_form().unwrap();

        assert_eq!(edit.currency.as_str(), "EUR");
        assert_eq!(edit.items[0].price, dec!(18));
    }

    #[test]
    fn test_cancel_edit_makes_next_submit_append() {
        let rate = ConversionRate::identity();
        let mut book = ReceiptBook::new();
        book.submit(&lunch_form("A"), &rate).unwrap();
        book.begin_edit(0).unwrap();
        book.cancel_edit();

        assert_eq!(book.submit(&lunch_form("B"), &rate).unwrap(), SubmitOutcome::Added(1));
    }

    #[test]
    fn test_clear_empties_book() {
        let mut book = ReceiptBook::new();
        book.add(Receipt::new("A", vec![], Money::zero(), Money::zero()));
        book.begin_edit(0).unwrap();
        book.clear();
        assert!(book.is_empty());
        assert_eq!(book.editing(), None);
    }

    #[test]
    fn test_snapshot_is_independent_of_book() {
        let mut book = ReceiptBook::new();
        book.add(Receipt::new("A", vec![], Money::zero(), Money::zero()));
        let snapshot = book.snapshot();
        book.clear();
        assert_eq!(snapshot.len(), 1);
    }
}

// ============================================================================
// Roster Tests
// ============================================================================

mod roster_tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_blanks_and_repeats() {
        let roster = Roster::parse(" Ann, Bo ,, Ann,  , Cy");
        assert_eq!(roster.names(), names(&["Ann", "Bo", "Cy"]).as_slice());
        assert_eq!(roster.to_input(), "Ann, Bo, Cy");
    }

    #[test]
    fn test_empty_input() {
        assert!(Roster::parse("").is_empty());
        assert!(Roster::parse(" , ,").is_empty());
    }

    #[test]
    fn test_add_reports_whether_name_was_new() {
        let mut roster = Roster::parse("Ann");
        assert!(roster.add("Bo"));
        assert!(!roster.add(" Bo "));
        assert!(!roster.add(""));
        assert_eq!(roster.len(), 2);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roster_names_are_trimmed_and_distinct(input in "[ ,A-Ca-c]{0,40}") {
            let roster = Roster::parse(&input);
            let names = roster.names();
            for (i, name) in names.iter().enumerate() {
                prop_assert!(!name.is_blank());
                prop_assert_eq!(name.as_str(), name.as_str().trim());
                prop_assert!(!names[i + 1..].contains(name));
            }
            prop_assert_eq!(Roster::parse(&roster.to_input()), roster);
        }

        #[test]
        fn positive_usd_items_always_accepted(
            cents in prop::collection::vec(1i64..1_000_000, 1..6),
            tax in 0i64..10_000,
        ) {
            let mut form = ReceiptForm::new("A", CurrencyCode::usd())
                .with_tax(Decimal::new(tax, 2));
            for (i, c) in cents.iter().enumerate() {
                form = form.with_item(ItemDraft::new(format!("Item {}", i + 1), Decimal::new(*c, 2), names(&["A", "B"])));
            }

            let receipt = ReceiptValidator::accept(&form, &ConversionRate::identity());
            prop_assert!(receipt.is_ok());
            let receipt = receipt.unwrap();
            let expected: i64 = cents.iter().sum::<i64>() + tax;
            prop_assert_eq!(receipt.total(), Ok(Money::from_cents(expected)));
        }

        #[test]
        fn extreme_amounts_and_rates_never_panic(
            mantissas in prop::collection::vec(1u128..(1u128 << 96), 1..4),
            scale in 0u32..=28,
            rate_mantissa in 1u128..(1u128 << 96),
            rate_scale in 0u32..=28,
            foreign in any::<bool>(),
        ) {
            let rate = ConversionRate::new(Decimal::from_i128_with_scale(rate_mantissa as i128, rate_scale)).unwrap();
            let currency = if foreign { CurrencyCode::parse("JPY") } else { CurrencyCode::usd() };
            let mut form = ReceiptForm::new("A", currency);
            for (i, m) in mantissas.iter().enumerate() {
                let price = Decimal::from_i128_with_scale(*m as i128, scale);
                form = form.with_item(ItemDraft::new(format!("Item {}", i + 1), price, names(&["A", "B"])));
            }

            let mut book = ReceiptBook::new();
            match book.submit(&form, &rate) {
                Ok(_) => {
                    let receipt = book.get(0).unwrap();
                    prop_assert!(receipt.total().is_ok());
                    prop_assert!(ReceiptSummary::for_all(book.receipts(), &rate).is_ok());
                }
                Err(ReceiptError::Validation(errors)) => {
                    prop_assert!(!errors.is_empty());
                    prop_assert!(book.is_empty());
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
