use chrono::{Local, NaiveDate};

/// Format a whole-pound amount as UK currency, e.g. `250000` -> `"£250,000"`
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if price < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

/// Format a listing date relative to the current local date
pub fn format_date(date: NaiveDate) -> String {
    format_date_at(date, Local::now().date_naive())
}

/// Format a listing date relative to an explicit "today"
///
/// Recent dates get a relative label, anything 30 days or more away gets the
/// long absolute form ("1 January 2000"). The distance is the absolute
/// number of days between the two dates, so a date slightly in the future
/// reads as if it were in the past ("Yesterday" for tomorrow). That matches
/// the behaviour listings pages have always shown and is pinned by a test.
pub fn format_date_at(date: NaiveDate, today: NaiveDate) -> String {
    let diff_days = (today - date).num_days().abs();

    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", diff_days),
        7..=29 => format!("{} weeks ago", diff_days / 7),
        _ => date.format("%-d %B %Y").to_string(),
    }
}
