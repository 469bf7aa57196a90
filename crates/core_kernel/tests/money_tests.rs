//! Unit tests for the Money module
//!
//! Tests cover creation, predicates, arithmetic, cent rounding and even
//! splitting in the single accounting unit.

use core_kernel::{Money, MoneyError, round_to_cents};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_amount_unrounded() {
        let m = Money::new(dec!(100.123456789));
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_from_cents_converts_correctly() {
        let m = Money::from_cents(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::new(dec!(-100.00));
        assert!(m.is_negative());
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_false_for_zero() {
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_min_picks_smaller_amount() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(7.50));
        assert_eq!(a.min(b), b);
        assert_eq!(b.min(a), b);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_and_sub_operators() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(30.00));
        assert_eq!((a + b).amount(), dec!(130.00));
        assert_eq!((b - a).amount(), dec!(-70.00));
    }

    #[test]
    fn test_assign_operators() {
        let mut m = Money::new(dec!(10));
        m += Money::new(dec!(5));
        m -= Money::new(dec!(2.5));
        assert_eq!(m.amount(), dec!(12.5));
    }

    #[test]
    fn test_sum_of_amounts() {
        let parts = vec![Money::new(dec!(1.10)), Money::new(dec!(2.20)), Money::new(dec!(3.30))];
        let total: Money = parts.iter().sum();
        assert_eq!(total.amount(), dec!(6.60));
    }

    #[test]
    fn test_multiply_operator() {
        let m = Money::new(dec!(100.00));
        assert_eq!((m * dec!(0.25)).amount(), dec!(25.00));
    }

    #[test]
    fn test_divide_by_zero_error() {
        let m = Money::new(dec!(100.00));
        assert!(matches!(m.divide(dec!(0)), Err(MoneyError::DivisionByZero)));
    }
}

mod overflow {
    use super::*;

    #[test]
    fn test_checked_add_near_decimal_max() {
        let near_max = Money::new(Decimal::MAX - dec!(10));
        assert_eq!(near_max.checked_add(Money::new(dec!(10))), Ok(Money::new(Decimal::MAX)));
        assert_eq!(near_max.checked_add(Money::new(dec!(11))), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_sum_of_receipt_sized_amounts() {
        let huge = Money::new(dec!(40000000000000000000000000000));
        assert!(Money::checked_sum([huge, huge]).is_err());
        assert!(Money::checked_sum([huge, huge, -huge]).is_err());
        assert_eq!(Money::checked_sum([huge, -huge, huge]), Ok(huge));
    }

    #[test]
    fn test_ratio_of_tiny_whole_overflows() {
        let whole = Money::new(dec!(0.0000000000000000000000000001));
        assert_eq!(Money::new(dec!(1000)).ratio_of(whole), Err(MoneyError::Overflow));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_cents_uses_bankers_rounding() {
        assert_eq!(round_to_cents(dec!(2.675)), dec!(2.68));
        assert_eq!(round_to_cents(dec!(2.665)), dec!(2.66));
        assert_eq!(round_to_cents(dec!(2.6651)), dec!(2.67));
    }

    #[test]
    fn test_split_three_ways_leaves_residue() {
        let share = Money::new(dec!(10.00)).split_evenly(3).unwrap();
        assert_eq!(share.amount(), dec!(3.33));
        assert_eq!((share * Decimal::from(3)).amount(), dec!(9.99));
    }

    #[test]
    fn test_display_formats_two_decimals() {
        assert_eq!(Money::new(dec!(7)).to_string(), "$7.00");
        assert_eq!(Money::new(dec!(1234.5)).to_string(), "$1234.50");
    }
}
