//! Locale-tolerant numeric readers for report attributes.
//!
//! Test runners format decimals with the culture of the machine they ran on,
//! so durations arrive as `0.051` or `0,051`. The readers accept either
//! separator (never both) and reject anything else a locale might add, such as
//! thousands grouping, signs or exponents.

use std::path::Path;

use roxmltree::Node;

use crate::config::MILLIS_PER_SECOND;
use crate::error::{ParseError, Result};
use crate::xml::get_tag_name;

/// Fractional digits kept before rounding.
const SCALE_DIGITS: usize = MILLIS_PER_SECOND.ilog10() as usize;

/// A non-negative decimal held as a whole number of thousandths.
///
/// Digits beyond the third fractional position are rounded half up, so
/// `0.0515` becomes 52 thousandths and `0.0514999` becomes 51.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal {
    thousandths: u64,
}

impl Decimal {
    /// The value multiplied by 1000 and rounded to a whole number.
    ///
    /// For a value in seconds this is the number of milliseconds.
    #[must_use]
    pub fn thousandths(self) -> u64 {
        self.thousandths
    }
}

/// Parse a non-negative decimal that uses `.` or `,` as its decimal separator.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a plain decimal, or that does not fit in `u64` thousandths.
///
/// # Examples
/// ```
/// use nunit_report::numeric::parse_decimal;
///
/// assert_eq!(parse_decimal("0.051").map(|d| d.thousandths()), Some(51));
/// assert_eq!(parse_decimal("1,051").map(|d| d.thousandths()), Some(1051));
/// assert_eq!(parse_decimal("1.000,5"), None);
/// ```
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let (whole, fraction) = match text.find(['.', ',']) {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    let digits = fraction.as_bytes();
    let mut thousandths = whole.checked_mul(MILLIS_PER_SECOND)?;
    let mut place = MILLIS_PER_SECOND / 10;
    for &digit in digits.iter().take(SCALE_DIGITS) {
        thousandths = thousandths.checked_add(u64::from(digit - b'0') * place)?;
        place /= 10;
    }
    if digits.get(SCALE_DIGITS).is_some_and(|&d| d >= b'5') {
        thousandths = thousandths.checked_add(1)?;
    }

    Some(Decimal { thousandths })
}

/// Parse a non-negative integer made of ASCII digits only.
pub fn parse_integer(text: &str) -> Option<u64> {
    if text.is_empty() || !all_digits(text) {
        return None;
    }
    text.parse().ok()
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Read a required non-negative integer attribute.
///
/// # Errors
/// `MissingAttribute` when the attribute is absent, `InvalidInteger` when its
/// value is not a non-negative integer.
pub fn read_required_integer(node: Node<'_, '_>, attribute: &str, path: &Path) -> Result<u64> {
    let value = node
        .attribute(attribute)
        .ok_or_else(|| ParseError::MissingAttribute {
            path: path.to_path_buf(),
            element: get_tag_name(node).to_string(),
            attribute: attribute.to_string(),
        })?;

    parse_integer(value).ok_or_else(|| invalid_integer(attribute, value, path))
}

/// Read an optional non-negative integer attribute, defaulting to zero.
///
/// # Errors
/// `InvalidInteger` when the attribute is present but malformed.
pub fn read_integer_or_zero(node: Node<'_, '_>, attribute: &str, path: &Path) -> Result<u64> {
    match node.attribute(attribute) {
        None => Ok(0),
        Some(value) => parse_integer(value).ok_or_else(|| invalid_integer(attribute, value, path)),
    }
}

/// Read an optional decimal attribute.
///
/// # Errors
/// `InvalidDecimal` when the attribute is present but malformed. Absence is
/// never an error.
pub fn read_optional_decimal(
    node: Node<'_, '_>,
    attribute: &str,
    path: &Path,
) -> Result<Option<Decimal>> {
    let Some(value) = node.attribute(attribute) else {
        return Ok(None);
    };

    parse_decimal(value)
        .map(Some)
        .ok_or_else(|| ParseError::InvalidDecimal {
            path: path.to_path_buf(),
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

fn invalid_integer(attribute: &str, value: &str, path: &Path) -> ParseError {
    ParseError::InvalidInteger {
        path: path.to_path_buf(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}
