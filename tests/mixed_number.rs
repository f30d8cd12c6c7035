//! 1/16 단위 대분수 표기 테스트.
use rope_tools::mixed_number::{as_mixed_number, parse_length, MixedNumber};

#[test]
fn whole_numbers_have_no_fraction() {
    assert_eq!(as_mixed_number(0.0), "0");
    assert_eq!(as_mixed_number(3.0), "3");
    assert_eq!(as_mixed_number(21.0), "21");
}

#[test]
fn sixteenths_are_reduced() {
    assert_eq!(as_mixed_number(3.0625), "3+1/16");
    assert_eq!(as_mixed_number(3.5), "3+1/2");
    assert_eq!(as_mixed_number(3.125), "3+1/8");
    assert_eq!(as_mixed_number(3.75), "3+3/4");
    assert_eq!(as_mixed_number(0.9375), "0+15/16");
}

#[test]
fn values_are_floored_to_the_grid() {
    assert_eq!(as_mixed_number(3.0624), "3");
    assert_eq!(as_mixed_number(3.124), "3+1/16");
    assert_eq!(as_mixed_number(12.212_388_98), "12+3/16");
}

#[test]
fn formatting_is_idempotent_on_grid_values() {
    for sixteenths in 0..64u32 {
        let value = f64::from(sixteenths) / 16.0;
        let once = MixedNumber::from_length(value).unwrap();
        let twice = MixedNumber::from_length(once.to_f64()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.to_f64(), value);
    }
}

#[test]
fn denominator_is_power_of_two_and_numerator_odd() {
    for i in 0..400u32 {
        let m = MixedNumber::from_length(f64::from(i) * 0.013).unwrap();
        assert!([1, 2, 4, 8, 16].contains(&m.denominator));
        if m.has_fraction() {
            assert_eq!(m.numerator % 2, 1, "{m:?}");
            assert!(m.numerator < m.denominator);
        } else {
            assert_eq!(m.denominator, 1);
        }
    }
}

#[test]
fn parsed_fractions_format_back() {
    let value = parse_length("1-1/8").unwrap();
    assert_eq!(as_mixed_number(value), "1+1/8");
}

#[test]
fn negative_lengths_floor_and_read_back() {
    for (value, text) in [(-1.5, "-2+1/2"), (-2.9, "-3+1/16"), (-0.25, "-1+3/4")] {
        let shown = as_mixed_number(value);
        assert_eq!(shown, text);
        let back = parse_length(&shown).unwrap();
        assert!(back <= value, "{shown} reads {back}, above {value}");
        assert!(value - back < 0.0625);
    }
}
