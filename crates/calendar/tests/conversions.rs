use chrono::{Datelike, NaiveDate, TimeDelta};
use sambat_calendar::{CalendarError, CalendarTable, Date, ErrorKind, ordinal};

fn table() -> CalendarTable {
    CalendarTable::bundled().unwrap()
}

#[test]
fn known_gregorian_equivalents() {
    let t = table();
    let cases: &[((i32, u8, u8), (i32, u8, u8))] = &[
        ((1975, 1, 1), (1918, 4, 13)),
        ((2000, 1, 1), (1943, 4, 14)),
        ((2077, 5, 19), (2020, 9, 4)),
        ((2080, 4, 1), (2023, 7, 17)),
        ((2081, 1, 1), (2024, 4, 13)),
        ((2100, 12, 30), (2044, 4, 12)),
    ];
    for &((y, m, d), ad) in cases {
        let bs = Date::new(&t, y, m, d).unwrap();
        assert_eq!(bs.to_gregorian(), ad, "BS {bs} -> AD");
        assert_eq!(
            Date::from_gregorian(&t, ad.0, ad.1, ad.2).unwrap(),
            bs,
            "AD {ad:?} -> BS"
        );
    }
}

#[test]
fn ordinal_roundtrip_full_range() {
    let t = table();
    for n in 1..=t.max_ordinal() {
        let date = Date::from_ordinal(&t, n).unwrap();
        assert_eq!(date.to_ordinal(), n, "ordinal roundtrip failed for {n}");
    }
}

#[test]
fn gregorian_roundtrip_full_range() {
    let t = table();
    let mut ad = t.anchor();
    for n in 1..=t.max_ordinal() {
        let bs = Date::from_naive_date(&t, ad).unwrap();
        assert_eq!(bs.to_ordinal(), n);
        assert_eq!(bs.to_naive_date(), ad, "BS {bs} did not map back to {ad}");
        ad += TimeDelta::days(1);
    }
    assert!(Date::from_naive_date(&t, ad).is_err());
}

#[test]
fn weekday_agrees_with_gregorian() {
    let t = table();
    for n in (1..=t.max_ordinal()).step_by(97) {
        let bs = Date::from_ordinal(&t, n).unwrap();
        assert_eq!(
            u32::from(bs.weekday().num_days_from_sunday()),
            bs.to_naive_date().weekday().num_days_from_sunday(),
            "weekday mismatch for {bs}"
        );
    }
}

#[test]
fn arithmetic_identity() {
    let t = table();
    let a = Date::new(&t, 2050, 7, 15).unwrap();
    for k in [-20_000, -365, -1, 0, 1, 31, 365, 10_000] {
        let b = a.add_days(k).unwrap();
        assert_eq!(b.difference_in_days(a), k);
        assert_eq!(b.sub_days(k).unwrap(), a);
    }
}

#[test]
fn table_consistency() {
    let t = table();
    for year in t.min_year()..=t.max_year() {
        let mut before = 0u16;
        for month in 1..=12 {
            assert_eq!(t.days_before_month(year, month).unwrap(), before);
            before += u16::from(t.days_in_month(year, month).unwrap());
        }
        assert_eq!(t.days_in_year(year).unwrap(), before);
        assert_eq!(
            ordinal::to_ordinal(&t, year, 1, 1).unwrap(),
            t.days_before_year(year).unwrap() + 1
        );
    }
}

#[test]
fn parse_distinguishes_format_from_range() {
    let t = table();
    assert_eq!(
        Date::parse(&t, "2077-05-19").unwrap(),
        Date::new(&t, 2077, 5, 19).unwrap()
    );
    assert_eq!(Date::parse(&t, "2077-5-19").unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(Date::parse(&t, "2077-13-01").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(Date::parse(&t, "2077-01-00").unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(Date::parse(&t, "2200-01-01").unwrap_err().kind(), ErrorKind::Range);
}

#[test]
fn gregorian_errors_are_range_errors() {
    let t = table();
    let err = Date::from_gregorian(&t, 2023, 2, 30).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.to_string(), "gregorian date 2023-02-30 does not exist");

    let before = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    assert!(matches!(
        Date::from_naive_date(&t, before).unwrap_err(),
        CalendarError::InvalidGregorian { year: 1900, .. }
    ));
}
