pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `1200` -> `"1,200"`
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(c);
    }
    output
}

/// Drops the last character, keeping the string valid UTF-8.
pub fn pop_char(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        assert_eq!(char_count("héllo"), 5);
        assert_eq!(word_count("  write a\nblog   post "), 4);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1200), "1,200");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn pop_char_respects_boundaries() {
        assert_eq!(pop_char("café"), "caf");
        assert_eq!(pop_char(""), "");
    }
}
