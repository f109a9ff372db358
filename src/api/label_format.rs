use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Locale preset used by beacon label formatters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelLocale {
    #[default]
    EnUs,
    EsEs,
}

impl LabelLocale {
    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimestampPattern {
    Date,
    #[default]
    DateMinute,
    DateSecond,
    TimeMinute,
}

/// Source of the secondary (context) label line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelContext {
    /// The raw index.
    #[default]
    Index,
    /// Evenly spaced unix timestamps: `start + index * step`.
    Timestamps {
        start_unix_seconds: i64,
        step_seconds: i64,
        #[serde(default)]
        pattern: TimestampPattern,
        #[serde(default)]
        utc_offset_minutes: i16,
    },
    /// One category name per index; indexes past the end fall back to the
    /// index itself.
    Categories(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFormatConfig {
    pub locale: LabelLocale,
    /// Prefix (en-US) or suffix (es-ES) added to the value, e.g. `$`.
    pub currency_symbol: Option<String>,
    pub precision: u8,
    pub group_thousands: bool,
    /// Primary text shown for a missing value; `None` shows only the context.
    pub missing_value_placeholder: Option<String>,
    pub context: LabelContext,
}

impl Default for LabelFormatConfig {
    fn default() -> Self {
        Self {
            locale: LabelLocale::EnUs,
            currency_symbol: None,
            precision: 2,
            group_thousands: true,
            missing_value_placeholder: None,
            context: LabelContext::Index,
        }
    }
}

impl LabelFormatConfig {
    #[must_use]
    pub fn currency(symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: Some(symbol.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: LabelLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_missing_value_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_value_placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: LabelContext) -> Self {
        self.context = context;
        self
    }
}

/// Structured text shown next to the beacon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeaconLabel {
    pub primary: Option<String>,
    pub secondary: String,
}

pub type LabelFormatterFn = Arc<dyn Fn(usize, Option<f64>) -> BeaconLabel + Send + Sync + 'static>;

/// Formats the label for `index`. Pure for a given `(index, value, config)`.
#[must_use]
pub fn format_beacon_label(
    index: usize,
    value: Option<f64>,
    config: &LabelFormatConfig,
) -> BeaconLabel {
    let primary = match value.filter(|value| value.is_finite()) {
        Some(value) => Some(format_label_value(value, config)),
        None => config.missing_value_placeholder.clone(),
    };
    BeaconLabel {
        primary,
        secondary: format_label_context(index, config),
    }
}

#[must_use]
pub fn format_label_value(value: f64, config: &LabelFormatConfig) -> String {
    let precision = usize::from(config.precision);
    let (negative, digits) = match round_to_precision(value, u32::from(config.precision)) {
        Some(decimal) => (decimal.is_sign_negative(), decimal.abs().to_string()),
        // Outside `Decimal` range.
        None => {
            let digits = format!("{:.precision$}", value.abs());
            let nonzero = digits.bytes().any(|byte| matches!(byte, b'1'..=b'9'));
            (value.is_sign_negative() && nonzero, digits)
        }
    };

    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let mut number = if config.group_thousands {
        group_digits(integer, config.locale.group_separator())
    } else {
        integer.to_owned()
    };
    if precision > 0 {
        number.push(config.locale.decimal_separator());
        number.push_str(fraction);
        // `rescale` keeps fewer places when the mantissa is full.
        for _ in fraction.len()..precision {
            number.push('0');
        }
    }

    let sign = if negative { "-" } else { "" };
    match (&config.currency_symbol, config.locale) {
        (None, _) => format!("{sign}{number}"),
        (Some(symbol), LabelLocale::EnUs) => format!("{sign}{symbol}{number}"),
        (Some(symbol), LabelLocale::EsEs) => format!("{sign}{number} {symbol}"),
    }
}

#[must_use]
pub fn format_label_context(index: usize, config: &LabelFormatConfig) -> String {
    match &config.context {
        LabelContext::Index => index.to_string(),
        LabelContext::Categories(categories) => categories
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string()),
        LabelContext::Timestamps {
            start_unix_seconds,
            step_seconds,
            pattern,
            utc_offset_minutes,
        } => format_timestamp(
            index,
            *start_unix_seconds,
            *step_seconds,
            *pattern,
            *utc_offset_minutes,
            config.locale,
        )
        .unwrap_or_else(|| index.to_string()),
    }
}

fn format_timestamp(
    index: usize,
    start_unix_seconds: i64,
    step_seconds: i64,
    pattern: TimestampPattern,
    utc_offset_minutes: i16,
    locale: LabelLocale,
) -> Option<String> {
    let offset_seconds = i64::try_from(index).ok()?.checked_mul(step_seconds)?;
    let seconds = start_unix_seconds.checked_add(offset_seconds)?;
    let utc = DateTime::<Utc>::from_timestamp(seconds, 0)?;
    let offset = FixedOffset::east_opt(i32::from(utc_offset_minutes) * 60).unwrap_or(Utc.fix());
    let local = utc.with_timezone(&offset);

    let format = match (locale, pattern) {
        (LabelLocale::EnUs, TimestampPattern::Date) => "%b %-d, %Y",
        (LabelLocale::EnUs, TimestampPattern::DateMinute) => "%b %-d, %Y %H:%M",
        (LabelLocale::EnUs, TimestampPattern::DateSecond) => "%b %-d, %Y %H:%M:%S",
        (LabelLocale::EsEs, TimestampPattern::Date) => "%d/%m/%Y",
        (LabelLocale::EsEs, TimestampPattern::DateMinute) => "%d/%m/%Y %H:%M",
        (LabelLocale::EsEs, TimestampPattern::DateSecond) => "%d/%m/%Y %H:%M:%S",
        (_, TimestampPattern::TimeMinute) => "%H:%M",
    };
    Some(local.format(format).to_string())
}

/// Rounds half away from zero on the shortest decimal form of `value`, so
/// `2.675` rounds to `2.68` rather than following its binary expansion.
fn round_to_precision(value: f64, precision: u32) -> Option<Decimal> {
    let decimal = value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))?;
    let mut rounded =
        decimal.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (len - position) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
