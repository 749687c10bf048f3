//! Number formatting for display
//!
//! Undefined ratios (`None`) render as a placeholder, "—" unless configured
//! otherwise, never as "NaN" or "Infinity".

/// Placeholder shown for an undefined ratio
pub const UNDEFINED: &str = "—";

/// Display options shared by all formatters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    pub currency_symbol: String,
    pub undefined: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            undefined: UNDEFINED.to_string(),
        }
    }
}

impl Formatter {
    /// "$1,234.56", negatives as "-$1,234.56"
    pub fn currency(&self, value: f64) -> String {
        let cents = (value * 100.0).round() as i64;
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            group_thousands(cents / 100),
            cents % 100
        )
    }

    /// Whole number with thousands separators
    pub fn number(&self, value: f64) -> String {
        let rounded = value.round() as i64;
        let sign = if rounded < 0 { "-" } else { "" };
        format!("{}{}", sign, group_thousands(rounded.unsigned_abs()))
    }

    /// Plain percentage with one decimal, e.g. "30.9%"
    pub fn percent(&self, value: Option<f64>) -> String {
        match value.map(round_tenths) {
            Some(v) => format!("{:.1}%", v),
            None => self.undefined.clone(),
        }
    }

    /// Signed change with one decimal, e.g. "+12.3%" or "-4.0%"
    pub fn change(&self, value: Option<f64>) -> String {
        match value.map(round_tenths) {
            Some(v) if v > 0.0 => format!("+{:.1}%", v),
            Some(v) => format!("{:.1}%", v),
            None => self.undefined.clone(),
        }
    }

    /// Compact money for chart axes: "$12k"
    pub fn compact_currency(&self, value: f64) -> String {
        if value.abs() >= 1_000.0 {
            format!("{}{:.0}k", self.currency_symbol, value / 1_000.0)
        } else {
            format!("{}{:.0}", self.currency_symbol, value)
        }
    }
}

/// Signed change with the default placeholder
pub fn format_change(value: Option<f64>) -> String {
    Formatter::default().change(value)
}

/// Currency with the default "$" symbol
pub fn format_currency(value: f64) -> String {
    Formatter::default().currency(value)
}

/// Round to one decimal, folding -0.0 into 0.0
fn round_tenths(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
