use super::{Sentence, Token, TokenKind};

/// Closing marks that always hug the preceding token, even when the source spaced them
const ATTACH_LEFT: &[&str] = &[",", ";", ":", ")", "]", "}"];

/// Opening marks that always hug the following token
const ATTACH_RIGHT: &[&str] = &["(", "[", "{"];

fn is_symbol_in(token: &Token, marks: &[&str]) -> bool {
    token.kind == TokenKind::Symbol && marks.contains(&token.text.as_str())
}

fn joins_previous(previous: &Token, token: &Token) -> bool {
    token.attached
        || token.kind == TokenKind::Terminal
        || is_symbol_in(token, ATTACH_LEFT)
        || is_symbol_in(previous, ATTACH_RIGHT)
}

/// Uppercase the first character, leave everything else untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a sentence as readable text. Punctuation rejoins its neighbours and
/// protected periods come out as ordinary periods since they are stored verbatim.
pub fn render_sentence(sentence: &Sentence) -> String {
    let mut rendered = String::new();
    let mut previous: Option<&Token> = None;
    for token in &sentence.tokens {
        if previous.is_some_and(|prev| !joins_previous(prev, token)) {
            rendered.push(' ');
        }
        rendered.push_str(&token.text);
        previous = Some(token);
    }
    capitalize_first(&rendered)
}
