use crate::chars::to_lower;

/// Finds the first offset at which `needle` occurs in `haystack`, ignoring
/// ASCII case.
pub fn str_in_str_no_case(haystack: &str, needle: &str) -> Option<usize> {
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| {
        hay[i..i + pat.len()]
            .iter()
            .zip(pat)
            .all(|(&a, &b)| to_lower(a as char) == to_lower(b as char))
    })
}

/// Returns the English suffix for an ordinal number: "st", "nd", "rd" or "th".
pub fn get_ordinal_suffix(value: u32) -> &'static str {
    // 11th, 12th and 13th, also past the first hundred.
    match value % 100 {
        11 | 12 | 13 => "th",
        _ => match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

pub fn bool_to_str(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}
