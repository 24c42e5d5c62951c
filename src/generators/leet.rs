// src/generators/leet.rs

/// Leet-speak replacement for a single ASCII letter, case-insensitive.
fn leet_for(c: char) -> Option<&'static str> {
    let replacement = match c.to_ascii_lowercase() {
        'a' => "4",
        'b' => "8",
        'c' => "<",
        'd' => "|)",
        'e' => "3",
        'f' => "|=",
        'g' => "9",
        'h' => "#",
        'i' => "!",
        'j' => "_|",
        'k' => "|<",
        'l' => "1",
        'm' => r"/\/\\",
        'n' => "^/",
        'o' => "0",
        'p' => "|D",
        'q' => "9",
        'r' => "|2",
        's' => "$",
        't' => "7",
        'u' => "(_)",
        'v' => r"\/",
        'w' => r"\/\/",
        'x' => "%",
        'y' => "`/",
        'z' => "2",
        _ => return None,
    };
    Some(replacement)
}

/// Convert text to leet-speak. Characters without a mapping are kept.
pub fn to_leet(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match leet_for(c) {
            Some(rep) => out.push_str(rep),
            None => out.push(c),
        }
    }
    out
}
