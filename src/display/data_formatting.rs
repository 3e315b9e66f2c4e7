/// Group the digits of a non-negative whole number in thousands.
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Round to a whole, non-negative count for display.
fn whole_units(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Format a price in whole dollars.
///
/// # Examples
///
/// ```
/// use forecourt::display::format_price;
///
/// assert_eq!(format_price(22500.0), "$22,500");
/// assert_eq!(format_price(999.4), "$999");
/// assert_eq!(format_price(0.0), "$0");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${}", group_thousands(whole_units(price)))
}

/// Format an odometer reading in miles.
///
/// # Examples
///
/// ```
/// use forecourt::display::format_mileage;
///
/// assert_eq!(format_mileage(31200.0), "31,200 mi");
/// ```
pub fn format_mileage(mileage: f64) -> String {
    format!("{} mi", group_thousands(whole_units(mileage)))
}

/// Join a tag list for a table cell, `-` when empty.
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
