//! Decimal number patterns
//!
//! Compiles a `#,##0.00`-style pattern once and formats floats with it.
//! Supported pattern characters: `#` (optional digit), `0` (required
//! digit), `,` (grouping separator, integer part only) and a single `.`.

use thiserror::Error;

/// Pattern used by the default text formatter
pub const DEFAULT_PATTERN: &str = "###,###,##0.00";

const GROUPING_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// Invalid decimal patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Number pattern is empty")]
    Empty,

    #[error("Unsupported character '{0}' in number pattern")]
    InvalidChar(char),

    #[error("Number pattern has more than one decimal point")]
    MultipleDecimalPoints,

    #[error("Grouping separator is not allowed after the decimal point")]
    GroupingInFraction,
}

/// A compiled decimal pattern plus optional prefix/suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    min_integer_digits: usize,
    grouping_size: Option<usize>,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    prefix: String,
    suffix: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            min_integer_digits: 1,
            grouping_size: Some(3),
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

impl NumberFormat {
    /// Compile a pattern such as `"###,###,##0.00"`
    pub fn from_pattern(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }

        let (integer, fraction) = match pattern.split_once(DECIMAL_SEPARATOR) {
            Some((integer, fraction)) => {
                if fraction.contains(DECIMAL_SEPARATOR) {
                    return Err(PatternError::MultipleDecimalPoints);
                }
                (integer, fraction)
            }
            None => (pattern, ""),
        };

        for c in integer.chars() {
            if !matches!(c, '#' | '0' | GROUPING_SEPARATOR) {
                return Err(PatternError::InvalidChar(c));
            }
        }
        for c in fraction.chars() {
            match c {
                '#' | '0' => {}
                GROUPING_SEPARATOR => return Err(PatternError::GroupingInFraction),
                other => return Err(PatternError::InvalidChar(other)),
            }
        }

        let grouping_size = integer
            .rfind(GROUPING_SEPARATOR)
            .map(|pos| integer.len() - pos - 1)
            .filter(|&size| size > 0);

        Ok(Self {
            min_integer_digits: integer.chars().filter(|&c| c == '0').count(),
            grouping_size,
            min_fraction_digits: fraction.chars().filter(|&c| c == '0').count(),
            max_fraction_digits: fraction.len(),
            prefix: String::new(),
            suffix: String::new(),
        })
    }

    /// Text placed before every formatted number
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text placed after every formatted number (e.g. `" $"`)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Format a value with this pattern
    pub fn format(&self, value: f32) -> String {
        if value.is_nan() {
            return format!("{}NaN{}", self.prefix, self.suffix);
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return format!("{}{}∞{}", sign, self.prefix, self.suffix);
        }

        let rounded = format!("{:.*}", self.max_fraction_digits, value.abs());
        let (integer, fraction) = rounded
            .split_once(DECIMAL_SEPARATOR)
            .unwrap_or((rounded.as_str(), ""));

        // Drop optional trailing fraction digits
        let mut fraction = fraction.to_string();
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        // Drop optional leading zeros, then pad to the required width
        let mut integer = integer.trim_start_matches('0').to_string();
        while integer.len() < self.min_integer_digits {
            integer.insert(0, '0');
        }
        if integer.is_empty() && fraction.is_empty() {
            integer.push('0');
        }

        let is_zero = integer.chars().chain(fraction.chars()).all(|c| c == '0');
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };

        let integer = match self.grouping_size {
            Some(size) => group_digits(&integer, size),
            None => integer,
        };

        if fraction.is_empty() {
            format!("{}{}{}{}", sign, self.prefix, integer, self.suffix)
        } else {
            format!(
                "{}{}{}{}{}{}",
                sign, self.prefix, integer, DECIMAL_SEPARATOR, fraction, self.suffix
            )
        }
    }
}

/// Insert grouping separators every `size` digits from the right
fn group_digits(digits: &str, size: usize) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
