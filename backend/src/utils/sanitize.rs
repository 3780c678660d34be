/// Removes HTML tags and comments from `input`.
///
/// A `<` followed by whitespace is kept as text, so "a < b" survives. Quoted
/// attribute values may contain `>` without ending the tag.
pub fn strip_tags(input: &str) -> String {
    #[derive(Clone, Copy)]
    enum State {
        Text,
        Tag { quote: Option<char> },
        Comment,
    }

    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut state = State::Text;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match state {
            State::Text => {
                if c == '<' {
                    match chars.get(i + 1) {
                        Some(next) if next.is_whitespace() => out.push(c),
                        None => {}
                        _ => {
                            if chars[i + 1..].starts_with(&['!', '-', '-']) {
                                state = State::Comment;
                                i += 3;
                            } else {
                                state = State::Tag { quote: None };
                            }
                        }
                    }
                } else if c != '\0' {
                    out.push(c);
                }
            }
            State::Tag { quote: Some(q) } => {
                if c == q {
                    state = State::Tag { quote: None };
                }
            }
            State::Tag { quote: None } => match c {
                '"' | '\'' => state = State::Tag { quote: Some(c) },
                '>' => state = State::Text,
                _ => {}
            },
            State::Comment => {
                if chars[i..].starts_with(&['-', '-', '>']) {
                    state = State::Text;
                    i += 2;
                }
            }
        }
        i += 1;
    }

    out
}

/// Drops every character that cannot appear in an email address.
pub fn sanitize_email(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(*c))
        .collect()
}

/// Trims then strips tags, trimming again so markup-only input ends up empty.
pub fn clean_text(input: &str) -> String {
    strip_tags(input.trim()).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_simple_tags() {
        assert_eq!(strip_tags("<b>Bold</b> move"), "Bold move");
        assert_eq!(strip_tags("<script>alert(1)</script>"), "alert(1)");
    }

    #[test]
    fn keeps_lone_less_than() {
        assert_eq!(strip_tags("budget < 5k"), "budget < 5k");
    }

    #[test]
    fn quoted_gt_does_not_close_tag() {
        assert_eq!(strip_tags(r#"<a title="x > y">link</a>"#), "link");
    }

    #[test]
    fn removes_comments() {
        assert_eq!(strip_tags("before<!-- <b>hidden</b> -->after"), "beforeafter");
    }

    #[test]
    fn unterminated_tag_swallows_rest() {
        assert_eq!(strip_tags("hello <img src=x"), "hello ");
    }

    #[test]
    fn clean_text_collapses_markup_only_input() {
        assert_eq!(clean_text("  <p> </p>  "), "");
        assert_eq!(clean_text("  Ada <em>Lovelace</em>\n"), "Ada Lovelace");
    }

    #[test]
    fn email_keeps_only_address_characters() {
        assert_eq!(sanitize_email("ada (at) example.com"), "adaatexample.com");
        assert_eq!(sanitize_email("<ada@example.com>"), "ada@example.com");
        assert_eq!(sanitize_email("first.last+tag@sub.example.org"), "first.last+tag@sub.example.org");
    }
}
