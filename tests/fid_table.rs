//! 피드 길이 참고표 데이터 검증.
use rope_tools::mixed_number::parse_length;
use rope_tools::splice::fid_table::{fid_table, find_fid_row};
use rope_tools::splice::{fid_length, fid_sections};

#[test]
fn table_has_twenty_one_rows_from_three_thirty_seconds_to_two() {
    let rows = fid_table();
    assert_eq!(rows.len(), 21);
    assert_eq!(rows[0].nominal, "3/32");
    assert_eq!(rows[20].nominal, "2");
}

#[test]
fn one_inch_row_matches_formula() {
    let row = find_fid_row("1\"").expect("1 inch row");
    assert_eq!(row.columns(), ["1", "5-1/4", "14", "21"]);

    let calc = fid_length(1.0).unwrap();
    assert_eq!(parse_length(row.short_fid).unwrap(), calc.short_section);
    assert_eq!(parse_length(row.full_fid).unwrap(), calc.full_length);
}

#[test]
fn long_and_full_columns_follow_diameter_multiples() {
    for row in fid_table() {
        let d = parse_length(row.nominal).unwrap();
        let sections = fid_sections(d).unwrap();
        assert_eq!(parse_length(row.long_fid).unwrap(), sections.long_length, "{row:?}");
        assert_eq!(parse_length(row.full_fid).unwrap(), sections.full_length, "{row:?}");
        let short = parse_length(row.short_fid).unwrap();
        assert!((short - sections.short_section).abs() <= 1.0 / 32.0, "{row:?}");
    }
}

#[test]
fn nominal_diameters_increase() {
    let sizes: Vec<f64> = fid_table()
        .iter()
        .map(|row| parse_length(row.nominal).unwrap())
        .collect();
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn unknown_nominal_is_none() {
    assert!(find_fid_row("3").is_none());
}
