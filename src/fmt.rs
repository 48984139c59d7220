/// Format an amount with Indian digit grouping: 12,34,567.89
pub fn amount(val: f64) -> String {
    let negative = val < 0.0;
    let fixed = format!("{:.2}", val.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // Last three digits form one group, everything above groups in pairs.
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    let head_len = digits.len().saturating_sub(3);
    for (i, c) in digits[..head_len].iter().enumerate() {
        if i > 0 && (head_len - i) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if head_len > 0 {
        grouped.push(',');
    }
    grouped.extend(&digits[head_len..]);

    if negative {
        format!("-{grouped}.{dec_part}")
    } else {
        format!("{grouped}.{dec_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_formatting() {
        assert_eq!(amount(0.0), "0.00");
        assert_eq!(amount(42.1), "42.10");
        assert_eq!(amount(999.0), "999.00");
        assert_eq!(amount(1234.56), "1,234.56");
        assert_eq!(amount(100000.0), "1,00,000.00");
        assert_eq!(amount(15000000.0), "1,50,00,000.00");
        assert_eq!(amount(-2500.5), "-2,500.50");
    }
}
