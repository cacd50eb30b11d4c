pub mod time;

use rust_decimal::Decimal;

/// "$250,000" style price, without cents unless there are some.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction:0<2}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Bathroom counts keep their half baths: "1", "2.5".
pub fn format_rooms(count: Decimal) -> String {
    count.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn price_groups_thousands() {
        assert_eq!(format_price(dec!(250000)), "$250,000");
        assert_eq!(format_price(dec!(1250000.00)), "$1,250,000");
        assert_eq!(format_price(dec!(999)), "$999");
        assert_eq!(format_price(dec!(2400.5)), "$2,400.50");
        assert_eq!(format_price(dec!(0)), "$0");
    }

    #[test]
    fn half_baths_are_kept() {
        assert_eq!(format_rooms(dec!(1.0)), "1");
        assert_eq!(format_rooms(dec!(2.50)), "2.5");
    }
}
