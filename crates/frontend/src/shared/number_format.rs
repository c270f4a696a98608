//! Форматирование цен витрины

/// Форматирует число с разделителем тысяч `sep` и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2, ','), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize, sep: char) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Цена в новых тайваньских долларах, без дробной части
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_twd;
/// assert_eq!(format_twd(11000.0), "NT$11,000");
/// ```
pub fn format_twd(value: f64) -> String {
    let amount = format_number_with_decimals(value.abs(), 0, ',');
    if value < 0.0 && amount != "0" {
        format!("-NT${}", amount)
    } else {
        format!("NT${}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_twd() {
        assert_eq!(format_twd(0.0), "NT$0");
        assert_eq!(format_twd(999.0), "NT$999");
        assert_eq!(format_twd(1000.0), "NT$1,000");
        assert_eq!(format_twd(14980.0), "NT$14,980");
        assert_eq!(format_twd(1234567.0), "NT$1,234,567");
        assert_eq!(format_twd(-1200.0), "-NT$1,200");
        assert_eq!(format_twd(-0.2), "NT$0");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, ','), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, ' '), "1 234.6");
        assert_eq!(format_number_with_decimals(-1234567.891, 2, ','), "-1,234,567.89");
        assert_eq!(format_number_with_decimals(12.0, 0, ','), "12");
    }
}
