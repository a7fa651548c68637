/// Parameterizes text into a machine-safe identifier.
///
/// Matches the content model's name-derivation convention:
/// 1. Lowercase
/// 2. Drop all non-alphanumeric characters
/// 3. Join the remaining runs with a single separator
/// 4. No leading or trailing separators, no consecutive separators
///
/// # Examples
///
/// ```
/// use pageflow_core::slug::parameterize;
///
/// assert_eq!(parameterize("Email Address", '_'), "email_address");
/// assert_eq!(parameterize("  What's your name?  ", '_'), "what_s_your_name");
/// ```
pub fn parameterize(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending && !out.is_empty() {
                out.push(separator);
            }
            pending = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else {
            // Punctuation, whitespace, emoji: all collapse into one separator.
            pending = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_basic() {
        assert_eq!(parameterize("Email Address", '_'), "email_address");
        assert_eq!(parameterize("Full Name", '_'), "full_name");
    }

    #[test]
    fn already_lowercase() {
        assert_eq!(parameterize("message", '_'), "message");
    }

    #[test]
    fn punctuation_collapses_into_one_separator() {
        assert_eq!(parameterize("What's your name?", '_'), "what_s_your_name");
        assert_eq!(parameterize("a - b -- c", '_'), "a_b_c");
    }

    #[test]
    fn no_leading_or_trailing_separator() {
        assert_eq!(parameterize("  Hello World!  ", '_'), "hello_world");
        assert_eq!(parameterize("!!important!!", '_'), "important");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(parameterize("", '_'), "");
        assert_eq!(parameterize("?!", '_'), "");
    }

    #[test]
    fn digits_preserved() {
        assert_eq!(parameterize("Address Line 2", '_'), "address_line_2");
    }

    #[test]
    fn unicode_letters_lowercased() {
        assert_eq!(parameterize("Héllo Wörld", '_'), "héllo_wörld");
        assert_eq!(parameterize("お名前", '_'), "お名前");
    }

    #[test]
    fn alternate_separator() {
        assert_eq!(parameterize("Email Address", '-'), "email-address");
    }
}
