//! Camel-case aliases for variable names.

/// Converts a variable name such as `primary-color` to `primaryColor`.
///
/// Words are runs of alphanumerics, split further at lower-to-upper changes,
/// letter/digit changes, and inside upper-case runs before a capitalized
/// word (`XMLHttp` → `XML`, `Http`). The first word is lower-cased and the
/// rest are capitalized.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for (index, word) in split_words(name).iter().enumerate() {
        let lower = word.to_lowercase();
        if index == 0 {
            out.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        let boundary = current.chars().last().is_some_and(|prev| {
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() && c.is_numeric())
                || (prev.is_numeric() && c.is_alphabetic())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower)
        });
        if boundary {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
