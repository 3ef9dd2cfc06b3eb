/// A value handed to the tooltip: a plain number, something that merely looks
/// like one, or a list of either.
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipValue {
    Number(f64),
    Text(String),
    List(Vec<TooltipValue>),
}

impl TooltipValue {
    /// Reads the value as a float. Lists only contribute their first entry.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_float(text),
            Self::List(items) => items.first().map_or(f64::NAN, Self::to_f64),
        }
    }
}

impl From<f64> for TooltipValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for TooltipValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TooltipValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Self>> From<Vec<T>> for TooltipValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Parses the longest numeric prefix of `text`, ignoring leading whitespace
/// and byte order marks.
///
/// Returns NaN when no prefix is numeric, so `"12.5km"` reads as `12.5` and
/// `"calm"` as NaN.
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse().unwrap_or(f64::NAN)
}

/// Enough mantissa digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Formats `value` with exactly `digits` significant digits.
///
/// Ties round away from zero (`72.25` gives `72.3`). Switches to exponential
/// notation (`1.01e+3`) when the decimal exponent is below -6 or at least
/// `digits`.
pub fn to_precision(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let digits = digits.clamp(1, 100);
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let Some((mantissa, mut exponent)) = significant_digits(value.abs(), digits) else {
        return format!("{:.*e}", digits - 1, value);
    };

    let sign = if value < 0.0 { "-" } else { "" };
    let (head, tail) = mantissa.split_at(1);
    let digits = digits as i32;

    if exponent < -6 || exponent >= digits {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let fraction = if tail.is_empty() {
            String::new()
        } else {
            format!(".{tail}")
        };
        return format!("{sign}{head}{fraction}e{exp_sign}{}", exponent.abs());
    }

    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{sign}0.{zeros}{mantissa}");
    }

    exponent += 1;
    let (int_part, frac_part) = mantissa.split_at(exponent as usize);
    if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// First `count` significant digits of a positive finite `value`, rounded
/// half up on its exact decimal expansion, with the decimal exponent of the
/// leading digit.
fn significant_digits(value: f64, count: usize) -> Option<(String, i32)> {
    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let (mantissa, exponent) = exact.split_once('e')?;
    let mut exponent: i32 = exponent.parse().ok()?;

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let round_up = digits.get(count).is_some_and(|d| *d >= 5);
    digits.truncate(count);

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
            digits.truncate(count);
            exponent += 1;
        }
    }

    Some((digits.iter().map(|d| char::from(b'0' + d)).collect(), exponent))
}

/// Tooltip display string: three significant digits, `NaN` for anything
/// that does not read as a number.
pub fn format_tooltip_value(value: &TooltipValue) -> String {
    to_precision(value.to_f64(), 3)
}
