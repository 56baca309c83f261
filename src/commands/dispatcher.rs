//! Dispatch entry points: operator console and connection-scoped.

use super::parser::parse_line;
use super::{CommandGroup, Context, Registry};
use crate::error::DispatchError;
use crate::session::Connection;
use crate::telemetry::spans;
use tracing::{debug, error, info};

/// Text shown in place of a handler's output when the handler fails.
/// Handler errors never propagate past the dispatcher.
const INTERNAL_ERROR_TEXT: &str = "An internal error occurred while running the command.";

/// Routes parsed lines to registered command groups.
///
/// Owns the registry and the configured prefix character. Constructed once
/// after the registry build; read-only afterwards and safe to share across
/// threads.
pub struct Dispatcher {
    registry: Registry,
    prefix: char,
}

impl Dispatcher {
    /// Build a dispatcher over a finished registry.
    pub fn new(registry: Registry, prefix: char) -> Self {
        Self { registry, prefix }
    }

    /// The configured prefix character.
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// The registry backing this dispatcher.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse a line typed at the operator console.
    ///
    /// The console is implicitly trusted: no privilege check happens on
    /// this path. The result is written to the log sink; malformed input
    /// never fails. Blank lines are ignored entirely.
    pub fn parse_console(&self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match self.dispatch_line(line, None) {
            None => info!("Unknown command: {}", line.trim()),
            Some(output) => {
                if !output.is_empty() {
                    info!("{output}");
                }
            }
        }
    }

    /// Try to parse a line received from a connected client.
    ///
    /// A missing connection is a caller contract violation, surfaced as
    /// [`DispatchError::MissingConnection`] rather than degraded. Returns
    /// `Ok(false)` when the line is not a command at all, and `Ok(true)`
    /// once it parsed as one, whether or not a group matched.
    ///
    /// The computed text is logged, not delivered back to the connection;
    /// delivery is the session layer's decision and must be wired there.
    pub fn try_parse(
        &self,
        line: &str,
        connection: Option<&Connection>,
    ) -> Result<bool, DispatchError> {
        let connection = connection.ok_or(DispatchError::MissingConnection)?;

        match self.dispatch_line(line, Some(connection)) {
            None => Ok(false),
            Some(output) => {
                if !output.is_empty() {
                    debug!(account = %connection.account.name, "{output}");
                }
                Ok(true)
            }
        }
    }

    /// Shared path behind both entry points.
    ///
    /// `None` means the line did not parse as a command. `Some` carries the
    /// computed text, which is empty when a matched handler produced none.
    fn dispatch_line(&self, line: &str, connection: Option<&Connection>) -> Option<String> {
        let invocation = parse_line(line, self.prefix)?;

        let source = connection.map_or("console", |conn| conn.account.name.as_str());
        let span = spans::command(&invocation.command, source);
        let _guard = span.enter();

        let output = match self.registry.find(&invocation.command) {
            Some((_, group)) => {
                let ctx = Context {
                    registry: &self.registry,
                    connection,
                };
                self.run_handler(group, &ctx, &invocation.parameters, &invocation.command)
            }
            None => format!(
                "Unknown command: {} {}",
                invocation.command, invocation.parameters
            ),
        };

        Some(output)
    }

    /// Invoke a handler, containing any failure it raises.
    fn run_handler(
        &self,
        group: &dyn CommandGroup,
        ctx: &Context<'_>,
        params: &str,
        name: &str,
    ) -> String {
        match group.handle(ctx, params) {
            Ok(text) => text,
            Err(e) => {
                error!(
                    command = %name,
                    error = %e,
                    code = e.error_code(),
                    "command handler failed"
                );
                INTERNAL_ERROR_TEXT.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandDescriptor, Registry};
    use crate::error::CommandError;

    struct Canned(&'static str);

    impl CommandGroup for Canned {
        fn fallback(&self, _ctx: &Context<'_>) -> String {
            self.0.to_string()
        }
    }

    struct Silent;

    impl CommandGroup for Silent {
        fn fallback(&self, _ctx: &Context<'_>) -> String {
            String::new()
        }
    }

    struct Failing;

    impl CommandGroup for Failing {
        fn handle(&self, _ctx: &Context<'_>, _params: &str) -> Result<String, CommandError> {
            Err(CommandError::Internal("boom".into()))
        }

        fn fallback(&self, _ctx: &Context<'_>) -> String {
            String::new()
        }
    }

    fn dispatcher() -> Dispatcher {
        let registry = Registry::builder()
            .with_builtins()
            .register(
                CommandDescriptor::new("kick", "Kicks a player from the server.", 5),
                Box::new(Canned("who?")),
            )
            .register(
                CommandDescriptor::new("mute", "", 0),
                Box::new(Silent),
            )
            .register(
                CommandDescriptor::new("crash", "", 0),
                Box::new(Failing),
            )
            .build();
        Dispatcher::new(registry, '/')
    }

    #[test]
    fn unparseable_line_yields_no_outcome() {
        let d = dispatcher();
        assert!(d.dispatch_line("hello there", None).is_none());
        assert!(d.dispatch_line("   ", None).is_none());
    }

    #[test]
    fn unknown_command_text_carries_token_and_params() {
        let d = dispatcher();
        let output = d.dispatch_line("/frob a b", None).unwrap();
        assert_eq!(output, "Unknown command: frob a b");

        // Trailing space when no parameters were given.
        let output = d.dispatch_line("/frob", None).unwrap();
        assert_eq!(output, "Unknown command: frob ");
    }

    #[test]
    fn bare_prefix_never_matches() {
        let d = dispatcher();
        let output = d.dispatch_line("/", None).unwrap();
        assert_eq!(output, "Unknown command:  ");
    }

    #[test]
    fn matched_group_output_is_returned() {
        let d = dispatcher();
        assert_eq!(d.dispatch_line("/kick", None).unwrap(), "who?");
        // Console path applies no privilege gate.
        assert_eq!(d.dispatch_line("/KICK", None).unwrap(), "who?");
    }

    #[test]
    fn empty_handler_output_is_preserved() {
        let d = dispatcher();
        assert_eq!(d.dispatch_line("/mute", None).unwrap(), "");
    }

    #[test]
    fn handler_failure_is_contained() {
        let d = dispatcher();
        let output = d.dispatch_line("/crash now", None).unwrap();
        assert_eq!(output, INTERNAL_ERROR_TEXT);
    }

    #[test]
    fn console_listing_includes_every_group() {
        let d = dispatcher();
        let output = d.dispatch_line("/commands", None).unwrap();
        assert!(output.starts_with("Available commands: "));
        for name in ["commands", "help", "kick", "mute", "crash"] {
            assert!(output.contains(name), "missing {name} in {output}");
        }
    }

    #[test]
    fn parse_console_never_panics_on_garbage() {
        let d = dispatcher();
        d.parse_console("");
        d.parse_console("   ");
        d.parse_console("no prefix");
        d.parse_console("/");
        d.parse_console("/unknown with args");
        d.parse_console("/crash");
    }
}
