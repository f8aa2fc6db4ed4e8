// parser.rs

/// Split a raw input line into whitespace-delimited tokens and detect a
/// trailing standalone `&`.
///
/// Delimiters are space, tab and newline; runs of delimiters never produce
/// empty tokens. A final `&` token is stripped from the returned vector and
/// reported through the background flag instead. An empty or all-whitespace
/// line yields zero tokens. The same function re-tokenizes expanded history
/// commands, so a stored `... &` suffix round-trips back into the flag.
pub fn tokenize(line: &str) -> (Vec<String>, bool) {
    let mut tokens: Vec<String> = line
        .split([' ', '\t', '\n'])
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect();

    let mut in_background = false;
    if tokens.last().map(String::as_str) == Some("&") {
        in_background = true;
        tokens.pop();
    }
    (tokens, in_background)
}
