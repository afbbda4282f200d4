//! Money formatting for summary figures and insight messages.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display symbol, falling back to the code itself.
    pub fn symbol(&self) -> &str {
        match self.as_str() {
            "USD" => "$",
            "EUR" => "€",
            "GBP" => "£",
            "JPY" => "¥",
            "AUD" => "A$",
            other => other,
        }
    }

    /// Number of fractional digits rendered for this currency.
    pub fn minor_units(&self) -> usize {
        match self.as_str() {
            "JPY" => 0,
            "KWD" | "BHD" => 3,
            _ => 2,
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Separator preferences for rendered numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
        }
    }
}

/// Renders amounts for one currency and locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoneyFormatter {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub options: FormatOptions,
}

impl MoneyFormatter {
    pub fn new(currency: CurrencyCode, locale: LocaleConfig, options: FormatOptions) -> Self {
        Self {
            currency,
            locale,
            options,
        }
    }

    pub fn usd() -> Self {
        Self::default()
    }

    pub fn format(&self, amount: f64) -> String {
        let body = self.format_number(amount.abs());
        let symbol = self.currency.symbol();
        let code = self.currency.as_str();
        let rendered = match self.options.currency_display {
            CurrencyDisplay::Symbol => format!("{symbol}{body}"),
            CurrencyDisplay::Code => format!("{code} {body}"),
            CurrencyDisplay::SymbolAndCode => format!("{symbol}{body} ({code})"),
        };

        // Amounts that round to zero are shown unsigned.
        let negative = amount < 0.0 && body.bytes().any(|b| matches!(b, b'1'..=b'9'));
        match (negative, self.options.negative_style) {
            (false, _) => rendered,
            (true, NegativeStyle::Sign) => format!("-{rendered}"),
            (true, NegativeStyle::Parentheses) => format!("({rendered})"),
        }
    }

    /// Formats an unsigned number with grouping and the locale's decimal separator.
    pub fn format_number(&self, value: f64) -> String {
        let precision = self.currency.minor_units();
        let fixed = format!("{:.*}", precision, value);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };
        let grouped = group_digits(int_part, self.locale.grouping_separator);
        match frac_part {
            Some(frac) => format!("{grouped}{}{frac}", self.locale.decimal_separator),
            None => grouped,
        }
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
