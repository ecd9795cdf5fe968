/// 按字符（而非字节）截取前 `max_chars` 个字符
pub fn take_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        take_chars(text, max_len) + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_chars_counts_characters_not_bytes() {
        assert_eq!(take_chars("Đọc hiểu", 3), "Đọc");
        assert_eq!(take_chars("abc", 10), "abc");
    }

    #[test]
    fn truncate_text_marks_cut() {
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("abc", 3), "abc");
    }
}
