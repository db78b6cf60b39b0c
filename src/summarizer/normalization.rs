// WHY: Documents arrive as hard-wrapped lines; the segmenter expects one single-spaced blob

/// Collapse every whitespace run (including `\r\n` line breaks) into one space and trim
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize into a caller-supplied buffer so batch processing can reuse it
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !buffer.is_empty();
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}

/// Join document lines with single spaces
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut joined = String::new();
    let mut buffer = String::new();
    for line in lines {
        normalize_whitespace_into(line.as_ref(), &mut buffer);
        if buffer.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(&buffer);
    }
    joined
}
