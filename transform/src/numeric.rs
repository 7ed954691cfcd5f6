//! Strict parsing of numeric text.
//!
//! Accepted forms: surrounding whitespace, an optional sign, decimal digits
//! with single `_` separators between digits, an optional fraction with
//! digits on both sides of the point, an optional exponent, or a `0x`
//! hexadecimal integer. Words such as `inf` and `NaN` are rejected.

/// Parse text as a finite float.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let (negative, body) = split_sign(text.trim());
    if let Some(hex) = strip_hex_prefix(body) {
        let magnitude = parse_radix(hex, 16)?;
        return Some(apply_sign(negative, magnitude as f64));
    }
    let digits = strip_separators(body, 10)?;
    if !is_decimal(&digits) {
        return None;
    }
    let parsed: f64 = digits.parse().ok()?;
    parsed.is_finite().then(|| apply_sign(negative, parsed))
}

/// Parse text as an integer; fractions and exponents are rejected.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    let (negative, body) = split_sign(text.trim());
    let (digits, radix) = match strip_hex_prefix(body) {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };
    let magnitude = parse_radix(digits, radix)?;
    if !negative {
        return i64::try_from(magnitude).ok();
    }
    // i64::MIN has no positive counterpart
    if magnitude == i64::MIN.unsigned_abs() {
        return Some(i64::MIN);
    }
    i64::try_from(magnitude).ok().map(|m| -m)
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn apply_sign(negative: bool, magnitude: f64) -> f64 {
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn strip_hex_prefix(body: &str) -> Option<&str> {
    body.strip_prefix("0x").or_else(|| body.strip_prefix("0X"))
}

fn parse_radix(digits: &str, radix: u32) -> Option<u64> {
    let cleaned = strip_separators(digits, radix)?;
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(&cleaned, radix).ok()
}

/// Remove `_` separators, each of which must sit between two digits.
fn strip_separators(text: &str, radix: u32) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_digit(radix) && a.is_digit(radix) => {}
            _ => return None,
        }
    }
    Some(out)
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    let (mantissa, exponent) = match s.find(&['e', 'E'][..]) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };
    all_digits(int_part)
        && frac_part.map_or(true, all_digits)
        && exponent.map_or(true, |e| all_digits(split_sign(e).1))
}
