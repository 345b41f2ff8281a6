/// Formats an integer with `,` between groups of three digits.
pub fn format_number(n: i64) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let head = digits.len() % 3;
    if head > 0 {
        out.push_str(&digits[..head]);
    }
    for (i, chunk) in digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            out.push(',');
        }
        // ASCII digits only
        out.extend(chunk.iter().map(|&b| b as char));
    }
    out
}
