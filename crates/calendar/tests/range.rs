use sambat_calendar::{CalendarTable, Date, DateRange};

#[test]
fn full_year_month_boundaries() {
    let t = CalendarTable::bundled().unwrap();
    let start = Date::new(&t, 2077, 1, 1).unwrap();
    let end = Date::new(&t, 2077, 12, 31).unwrap();
    let dates: Vec<_> = DateRange::new(start, end).collect();
    assert_eq!(dates.len(), 366);

    // Baishakh 2077 has 31 days, Jestha 32.
    assert_eq!(dates[30].ymd(), (2077, 1, 31));
    assert_eq!(dates[31].ymd(), (2077, 2, 1));
    assert_eq!(dates[62].ymd(), (2077, 2, 32));
    assert_eq!(dates[63].ymd(), (2077, 3, 1));
    assert_eq!(dates[365].ymd(), (2077, 12, 31));
}

#[test]
fn consecutive_ordinals() {
    let t = CalendarTable::bundled().unwrap();
    let start = Date::new(&t, 2079, 6, 15).unwrap();
    let end = start.add_days(500).unwrap();
    let ordinals: Vec<_> = DateRange::new(start, end).map(Date::to_ordinal).collect();
    assert_eq!(ordinals.len(), 501);
    for pair in ordinals.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
}

#[test]
fn whole_table() {
    let t = CalendarTable::bundled().unwrap();
    let range = DateRange::new(Date::min(&t), Date::max(&t));
    assert_eq!(range.len(), t.max_ordinal() as usize);
    assert_eq!(range.last(), Some(Date::max(&t)));
}
