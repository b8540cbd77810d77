//! Month and weekday names.

use sambat_calendar::Weekday;

/// Three-letter English month abbreviations, Baishakh first.
pub const MONTH_SHORT: [&str; 12] = [
    "Bai", "Jes", "Asa", "Shr", "Bha", "Asw", "Kar", "Man", "Pou", "Mag", "Fal", "Cha",
];

/// Romanised month names.
pub const MONTH_LONG: [&str; 12] = [
    "Baishakh", "Jestha", "Asar", "Shrawan", "Bhadau", "Aswin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Month names in Devanagari.
pub const MONTH_NEPALI: [&str; 12] = [
    "वैशाख", "जेष्ठ", "असार", "श्रावण", "भदौ", "आश्विन", "कार्तिक", "मंसिर", "पौष", "माघ",
    "फाल्गुण", "चैत्र",
];

/// English weekday abbreviations, Sunday first.
pub const WEEKDAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const WEEKDAY_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Weekday names in Devanagari without the `बार` suffix.
pub const WEEKDAY_NEPALI_SHORT: [&str; 7] = ["आइत", "सोम", "मंगल", "बुध", "बिहि", "शुक्र", "शनि"];

pub const WEEKDAY_NEPALI_LONG: [&str; 7] = [
    "आइतबार",
    "सोमबार",
    "मंगलबार",
    "बुधवार",
    "बिहिबार",
    "शुक्रबार",
    "शनिबार",
];

/// Looks up `month` (1..=12) in one of the month tables.
pub fn month_name(names: &[&'static str; 12], month: u8) -> Option<&'static str> {
    names.get(usize::from(month).checked_sub(1)?).copied()
}

/// Looks up `day` in one of the weekday tables.
pub fn weekday_name(names: &[&'static str; 7], day: Weekday) -> &'static str {
    names[usize::from(day.num_days_from_sunday())]
}
