/// Dollar price with exactly two decimals, e.g. `$188.00`.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Percentage with two decimals and no sign for positives, e.g. `1.12%`, `-0.45%`.
pub fn format_pct(pct: f64) -> String {
    // Avoid printing "-0.00%" for values that round to zero
    let pct = if pct == 0.0 { 0.0 } else { pct };
    format!("{:.2}%", pct)
}

/// Rounds to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Volume as an integer with `,` grouping. Fractions are truncated.
pub fn format_volume(volume: f64) -> String {
    let whole = if volume.is_finite() && volume > 0.0 {
        volume.trunc() as u64
    } else {
        0
    };
    group_thousands(whole)
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_have_two_decimals() {
        assert_eq!(format_price(188.0), "$188.00");
        assert_eq!(format_price(190.1), "$190.10");
    }

    #[test]
    fn percentages_round_and_never_show_negative_zero() {
        assert_eq!(format_pct(round2(1.117_021)), "1.12%");
        assert_eq!(format_pct(round2(-0.001)), "0.00%");
        assert_eq!(format_pct(round2(-2.345_6)), "-2.35%");
    }

    #[test]
    fn volume_is_grouped_and_truncated() {
        assert_eq!(format_volume(0.0), "0");
        assert_eq!(format_volume(999.9), "999");
        assert_eq!(format_volume(1000.0), "1,000");
        assert_eq!(format_volume(52_164_523.0), "52,164,523");
        assert_eq!(format_volume(-5.0), "0");
        assert_eq!(group_thousands(123_456), "123,456");
    }
}
