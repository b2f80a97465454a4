use crate::models::Price;

/// Format a wire date string for display, e.g. "Dec 14, 2024".
/// Falls back to the raw string when it doesn't parse.
pub fn format_date(date: &str) -> String {
    match crate::models::parse_date(date) {
        Some(d) => d.format("%b %d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Format an optional string, returning a default if None
pub fn format_optional(value: &Option<String>, default: &str) -> String {
    value.as_deref().unwrap_or(default).to_string()
}

/// Format a listed price, e.g. "380 USD". Whole amounts drop the cents.
pub fn format_price(price: &Price) -> String {
    if price.amount.fract() == 0.0 {
        format!("{:.0} {}", price.amount, price.currency)
    } else {
        format!("{:.2} {}", price.amount, price.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-12-14"), "Dec 14, 2024");
        assert_eq!(format_date("2025-03-01T17:30:00-05:00"), "Mar 01, 2025");
        assert_eq!(format_date("TBA"), "TBA"); // Unparsable, return as-is
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(&Some("Main Field".to_string()), "TBD"), "Main Field");
        assert_eq!(format_optional(&None, "TBD"), "TBD");
    }

    #[test]
    fn test_format_price() {
        let whole = Price {
            amount: 380.0,
            currency: "USD".to_string(),
        };
        assert_eq!(format_price(&whole), "380 USD");

        let cents = Price {
            amount: 79.5,
            currency: "USD".to_string(),
        };
        assert_eq!(format_price(&cents), "79.50 USD");
    }
}
