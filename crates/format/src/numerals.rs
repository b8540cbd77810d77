//! Devanagari digits.

/// `०` through `९`.
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Replaces every ASCII digit with its Devanagari counterpart; other
/// characters are kept.
pub fn to_devanagari(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => DEVANAGARI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replaces every Devanagari digit with its ASCII counterpart.
pub fn from_devanagari(s: &str) -> String {
    s.chars()
        .map(|c| match DEVANAGARI_DIGITS.iter().position(|&d| d == c) {
            Some(i) => char::from(b'0' + i as u8),
            None => c,
        })
        .collect()
}
