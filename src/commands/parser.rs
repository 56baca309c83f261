//! Command line parsing: prefix detection and token extraction.
//!
//! No quoting, escaping, or multi-space collapsing; the line is split once,
//! at the first whitespace run after the prefix.

/// A parsed command line. Stack-local to a single dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// The raw line as received, trimmed at both ends.
    pub raw: String,
    /// Lower-cased command token.
    pub command: String,
    /// Remainder after the first whitespace run, trimmed. Empty when the
    /// line holds only the token.
    pub parameters: String,
}

/// Extract the command token and parameter string from a raw line.
///
/// Returns `None` when the trimmed line is empty or does not start with the
/// configured prefix character. A line that is exactly the prefix yields an
/// empty token, which never matches a registered name (names are non-empty).
pub fn parse_line(line: &str, prefix: char) -> Option<CommandInvocation> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let rest = line.strip_prefix(prefix)?;
    let (command, parameters) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };

    Some(CommandInvocation {
        raw: line.to_string(),
        command: command.to_ascii_lowercase(),
        parameters: parameters.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_and_parameters_split_at_first_whitespace() {
        let inv = parse_line("/foo bar baz", '/').unwrap();
        assert_eq!(inv.command, "foo");
        assert_eq!(inv.parameters, "bar baz");
    }

    #[test]
    fn token_is_lower_cased() {
        let inv = parse_line("/FOO", '/').unwrap();
        assert_eq!(inv.command, "foo");
        assert_eq!(inv.parameters, "");
    }

    #[test]
    fn non_prefixed_line_does_not_match() {
        assert!(parse_line("foo bar", '/').is_none());
        assert!(parse_line("!foo", '/').is_none());
    }

    #[test]
    fn empty_and_whitespace_lines_do_not_match() {
        assert!(parse_line("", '/').is_none());
        assert!(parse_line("   \t ", '/').is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_before_prefix_check() {
        let inv = parse_line("   /foo bar  ", '/').unwrap();
        assert_eq!(inv.command, "foo");
        assert_eq!(inv.parameters, "bar");
        assert_eq!(inv.raw, "/foo bar");
    }

    #[test]
    fn bare_prefix_yields_empty_token() {
        let inv = parse_line("/", '/').unwrap();
        assert_eq!(inv.command, "");
        assert_eq!(inv.parameters, "");
    }

    #[test]
    fn inner_spacing_of_parameters_is_preserved() {
        let inv = parse_line("/say hello   world", '/').unwrap();
        assert_eq!(inv.parameters, "hello   world");
    }

    #[test]
    fn custom_prefix_character() {
        let inv = parse_line("!kick trouble", '!').unwrap();
        assert_eq!(inv.command, "kick");
        assert_eq!(inv.parameters, "trouble");
        assert!(parse_line("/kick trouble", '!').is_none());
    }
}
