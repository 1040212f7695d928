use hourscope_types::AnalysisResult;

/// 12-hour clock label for an hour index: 0 → "12:00 AM", 13 → "1:00 PM".
pub fn format_hour(hour: usize) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{}:00 {}", hour12, period)
}

/// Comma-separated labels, in the given order.
pub fn format_hours(hours: &[usize]) -> String {
    hours
        .iter()
        .map(|&h| format_hour(h))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line description of the optimal hours, e.g.
/// "Optimal Posting Hours: 12:00 AM, 1:00 AM each with 5 posts".
pub fn optimal_hours_summary(result: &AnalysisResult) -> String {
    let many = result.optimal_hours.len() > 1;
    format!(
        "Optimal Posting Hour{}: {} {} {} post{}",
        if many { "s" } else { "" },
        format_hours(&result.optimal_hours),
        if many { "each with" } else { "with" },
        result.max_post_count,
        if result.max_post_count == 1 { "" } else { "s" },
    )
}
