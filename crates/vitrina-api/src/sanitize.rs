//! Free-text sanitization for outbound payloads.

/// Strip HTML tags and stray angle brackets from user input, then trim.
///
/// Mirrors what the CRM API does on its side so a payload never carries
/// markup: complete `<...>` tags are dropped wholesale, unmatched brackets
/// are removed, everything else passes through.
pub fn sanitize_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match c {
            '<' => {
                // Drop a complete tag; keep the text when no '>' follows.
                let mut pending = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '>' {
                        closed = true;
                        break;
                    }
                    pending.push(n);
                }
                if !closed {
                    out.push_str(&pending);
                }
            }
            '>' => {}
            _ => out.push(c),
        }
    }
    out.trim().to_string()
}

/// Sanitize an optional field, mapping empty results to `None`.
pub fn sanitize_opt(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(sanitize_text)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize_text("  Acme Store  "), "Acme Store");
    }

    #[test]
    fn test_tags_are_dropped() {
        assert_eq!(
            sanitize_text("<script>alert(1)</script>hello"),
            "alert(1)hello"
        );
        assert_eq!(sanitize_text("a <b>bold</b> word"), "a bold word");
    }

    #[test]
    fn test_stray_brackets_are_removed() {
        assert_eq!(sanitize_text("1 > 0 still true"), "1  0 still true");
        assert_eq!(sanitize_text("a < b"), "a  b");
    }

    #[test]
    fn test_sanitize_opt_drops_empty() {
        assert_eq!(sanitize_opt(&Some("<b></b>".to_string())), None);
        assert_eq!(sanitize_opt(&None), None);
        assert_eq!(
            sanitize_opt(&Some(" site.com ".to_string())),
            Some("site.com".to_string())
        );
    }
}
