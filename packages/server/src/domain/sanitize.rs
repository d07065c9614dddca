//! Plain-text sanitization for inbound message fields.
//!
//! Markup is reduced to its text content: tags are dropped, a handful of
//! common character entities are decoded and surrounding whitespace is
//! trimmed. A `<` that does not open a tag (`a < b`) is kept as text.

/// Strip markup from `input` and trim the result.
pub fn strip_markup(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '<' && chars.peek().is_some_and(|next| opens_tag(*next)) {
            let mut tag = String::from('<');
            let mut closed = false;
            for inner in chars.by_ref() {
                tag.push(inner);
                if inner == '>' {
                    closed = true;
                    break;
                }
            }
            // unterminated tag: keep it as text
            if !closed {
                text.push_str(&tag);
            }
        } else {
            text.push(ch);
        }
    }

    decode_entities(&text).trim().to_string()
}

fn opens_tag(next: char) -> bool {
    next.is_ascii_alphabetic() || matches!(next, '/' | '!' | '?')
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
