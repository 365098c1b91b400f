/// A parsed player command. The alternation is closed: anything outside
/// these five verbs is rejected by `parse`, so the dispatcher can match
/// exhaustively instead of string-comparing verbs at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Take(String),
    Open(String),
    Use(String),
    Look(String),
}

/// Match normalized input against the verb grammar: the first
/// whitespace-delimited token must be exactly one of the five verbs, and
/// everything after it becomes the (possibly empty) trimmed argument.
/// Expects input that already went through `normalize`; the verb check is
/// therefore a plain lowercase comparison.
pub fn parse(normalized: &str) -> Option<Command> {
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (verb, args) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };
    let args = args.to_string();

    match verb {
        "go" => Some(Command::Go(args)),
        "take" => Some(Command::Take(args)),
        "open" => Some(Command::Open(args)),
        "use" => Some(Command::Use(args)),
        "look" => Some(Command::Look(args)),
        _ => None,
    }
}
