use chrono::Datelike;

/// Footer text stamped with `year`
pub fn copyright_notice(year: i32) -> String {
    format!("© {} Sierra Leone Football Association. All rights reserved.", year)
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Keep the last `max_len` characters, marking the cut with `...`
pub fn truncate_start(text: &str, max_len: usize) -> String {
    let count = text.chars().count();
    if count <= max_len {
        return text.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let tail: String = text.chars().skip(count - keep).collect();
    format!("...{}", tail)
}

/// Keep the first `max_len` characters, marking the cut with `...`
pub fn truncate_end(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let head: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", head)
}
