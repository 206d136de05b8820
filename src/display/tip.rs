//! Financial tip formatting

use crate::models::FinancialTip;

use super::report::separator;

/// Format tips as readable cards
pub fn format_tips(tips: &[&FinancialTip]) -> String {
    if tips.is_empty() {
        return "No tips match those filters.".to_string();
    }

    let mut output = String::new();
    for (i, tip) in tips.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{} [{} / {}]\n",
            tip.title, tip.topic, tip.difficulty
        ));
        output.push_str(&separator(tip.title.chars().count()));
        output.push('\n');
        output.push_str(&wrap(tip.content, 76));
    }
    output
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> String {
    let mut output = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            output.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            output.push(' ');
            line_len += 1;
        }
        output.push_str(word);
        line_len += word_len;
    }
    output.push('\n');
    output
}
