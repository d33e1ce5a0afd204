//! Price and mileage display

use serde::{Deserialize, Serialize};

/// Display currency; stored prices carry no currency of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Ngn,
    Eur,
}

impl Currency {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Ngn => "₦",
            Currency::Eur => "€",
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ngn => "NGN",
            Currency::Eur => "EUR",
        }
    }

    /// e.g. `$450,000` or `€1,250.50`
    pub fn format(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol(), group_amount(amount.abs()))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "NGN" => Ok(Currency::Ngn),
            "EUR" => Ok(Currency::Eur),
            _ => Err(format!("Unknown currency: {}. Use USD, NGN or EUR", s)),
        }
    }
}

/// Thousands-grouped integer part, cents only when non-zero
fn group_amount(amount: f64) -> String {
    let cents_total = (amount * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;
    let grouped = group_digits(whole);
    if cents == 0 {
        grouped
    } else {
        format!("{}.{:02}", grouped, cents)
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// e.g. `1,200 mi`
pub fn format_mileage(miles: u32) -> String {
    format!("{} mi", group_digits(miles as u64))
}
