//! Money formatting for display.

/// Format a signed amount as e.g. `-$999.00` or `$8,500.00`.
pub fn currency(symbol: &str, amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Like [`currency`] but with an explicit `+` on positive amounts, the
/// way the transaction list renders income.
pub fn signed_currency(symbol: &str, amount: f64) -> String {
    if amount > 0.0 {
        format!("+{}", currency(symbol, amount))
    } else {
        currency(symbol, amount)
    }
}

pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(48250), "48,250");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency("$", 48250.00), "$48,250.00");
        assert_eq!(currency("$", -999.00), "-$999.00");
        assert_eq!(currency("$", 15.99), "$15.99");
        assert_eq!(currency("$", 0.0), "$0.00");
    }

    #[test]
    fn test_signed_currency() {
        assert_eq!(signed_currency("$", 8500.00), "+$8,500.00");
        assert_eq!(signed_currency("$", -12.40), "-$12.40");
    }
}
