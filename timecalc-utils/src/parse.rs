/// Return the index just past the run of ASCII digits that starts at `cursor`.
pub fn scan_digits(bytes: &[u8], cursor: usize) -> usize {
    let mut end = cursor;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    end
}

/// Match `<digits><unit>` at `cursor`, e.g. the `12h` in `1d12h`.
///
/// Returns the digit text and the index just past the unit letter. Nothing is
/// consumed on a mismatch, so the caller can retry the same cursor with the
/// next unit.
pub fn scan_unit_component(raw: &str, cursor: usize, unit: u8) -> Option<(&str, usize)> {
    let bytes = raw.as_bytes();
    let digits_end = scan_digits(bytes, cursor);
    if digits_end == cursor || bytes.get(digits_end) != Some(&unit) {
        return None;
    }

    Some((&raw[cursor..digits_end], digits_end + 1))
}

/// Match `<digits>[.<digits>]<unit>` at `cursor`, e.g. the `4.5s` in `3m4.5s`.
///
/// A dot must be followed by at least one digit.
pub fn scan_decimal_component(raw: &str, cursor: usize, unit: u8) -> Option<(&str, usize)> {
    let bytes = raw.as_bytes();
    let whole_end = scan_digits(bytes, cursor);
    if whole_end == cursor {
        return None;
    }

    let mut end = whole_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = scan_digits(bytes, end + 1);
        if fraction_end == end + 1 {
            return None;
        }
        end = fraction_end;
    }

    if bytes.get(end) != Some(&unit) {
        return None;
    }

    Some((&raw[cursor..end], end + 1))
}

#[cfg(test)]
mod tests {
    use super::{scan_decimal_component, scan_digits, scan_unit_component};

    #[test]
    fn scans_digit_runs() {
        assert_eq!(scan_digits(b"123abc", 0), 3);
        assert_eq!(scan_digits(b"123abc", 3), 3);
        assert_eq!(scan_digits(b"1d20h", 2), 4);
        assert_eq!(scan_digits(b"", 0), 0);
    }

    #[test]
    fn unit_components_require_digits_and_unit() {
        assert_eq!(scan_unit_component("12h", 0, b'h'), Some(("12", 3)));
        assert_eq!(scan_unit_component("1d12h", 2, b'h'), Some(("12", 5)));
        assert_eq!(scan_unit_component("007m", 0, b'm'), Some(("007", 4)));
        assert_eq!(scan_unit_component("12h", 0, b'd'), None);
        assert_eq!(scan_unit_component("h", 0, b'h'), None);
        assert_eq!(scan_unit_component("12", 0, b'h'), None);
    }

    #[test]
    fn decimal_components_accept_optional_fraction() {
        assert_eq!(scan_decimal_component("30s", 0, b's'), Some(("30", 3)));
        assert_eq!(scan_decimal_component("4.5s", 0, b's'), Some(("4.5", 4)));
        assert_eq!(scan_decimal_component("1m01.10s", 2, b's'), Some(("01.10", 8)));
        assert_eq!(scan_decimal_component("1.s", 0, b's'), None);
        assert_eq!(scan_decimal_component(".5s", 0, b's'), None);
        assert_eq!(scan_decimal_component("1.5", 0, b's'), None);
    }
}
