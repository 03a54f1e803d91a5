fn pad2(value: u32) -> String {
    format!("{value:02}")
}

pub fn format_time(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{}:{}:{}", pad2(hours), pad2(minutes), pad2(seconds))
}

/// Months are 1-based.
pub fn format_date_time(year: i32, month: u32, day: u32, hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{year}-{}-{} {}", pad2(month), pad2(day), format_time(hours, minutes, seconds))
}

pub fn api_url(root: &str, path: &str) -> String {
    let root = root.trim_matches('/');
    if root.is_empty() {
        format!("/{path}")
    } else {
        format!("/{root}/{path}")
    }
}
