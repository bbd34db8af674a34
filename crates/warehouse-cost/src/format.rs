fn group_digits(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats a dollar amount with thousands separators, e.g. `$12,345.67`.
pub fn format_usd(value: f64, decimals: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match rounded.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (rounded.as_str(), None),
    };
    let whole = group_digits(whole);

    match fraction {
        Some(fraction) => format!("{}${}.{}", sign, whole, fraction),
        None => format!("{}${}", sign, whole),
    }
}

/// Short dollar amount for chart labels: `$950`, `$1.2k`, `$48k`, `$3.1M`.
pub fn format_usd_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "k")];

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    for (scale, suffix) in UNITS {
        if magnitude >= scale {
            let scaled = magnitude / scale;
            return if scaled < 10.0 {
                format!("{}${:.1}{}", sign, scaled, suffix)
            } else {
                format!("{}${:.0}{}", sign, scaled, suffix)
            };
        }
    }

    format!("{}${:.0}", sign, magnitude)
}
