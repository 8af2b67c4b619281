/// Extract every unsigned decimal number from `text`
///
/// Separators such as `-` or `+` are not treated as signs, so `"10-50"`
/// yields `[10, 50]` and `"10+"` yields `[10]`.
pub fn numeric_tokens(text: &str) -> Vec<f64> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch.is_ascii_digit() || (ch == '.' && !current.is_empty() && !current.contains('.')) {
            current.push(ch);
        } else if !current.is_empty() {
            push_token(&mut tokens, &mut current);
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, &mut current);
    }

    tokens
}

fn push_token(tokens: &mut Vec<f64>, current: &mut String) {
    if let Ok(value) = current.trim_end_matches('.').parse::<f64>() {
        tokens.push(value);
    }
    current.clear();
}

/// Comparison value for a textual range: the midpoint of the first two
/// numbers, the number itself when only one is present, 0 when none are
#[inline]
pub fn range_midpoint(text: &str) -> f64 {
    let tokens = numeric_tokens(text);
    match tokens.as_slice() {
        [] => 0.0,
        [single] => *single,
        [low, high, ..] => (low + high) / 2.0,
    }
}
