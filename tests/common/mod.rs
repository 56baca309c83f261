//! Shared fixtures for dispatch integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture.

use gamed::commands::{CommandDescriptor, CommandGroup, Context, Dispatcher, Registry};
use gamed::error::CommandError;

/// Group that answers every invocation with a canned line.
pub struct CannedGroup(pub &'static str);

impl CommandGroup for CannedGroup {
    fn fallback(&self, _ctx: &Context<'_>) -> String {
        self.0.to_string()
    }
}

/// Group whose handler always fails, for containment tests.
pub struct FailingGroup;

impl CommandGroup for FailingGroup {
    fn handle(&self, _ctx: &Context<'_>, _params: &str) -> Result<String, CommandError> {
        Err(CommandError::Internal("simulated failure".into()))
    }

    fn fallback(&self, _ctx: &Context<'_>) -> String {
        String::new()
    }
}

/// Registry with the built-ins plus a level-5 `kick` group, matching the
/// smallest realistic operator setup.
pub fn kick_registry() -> Registry {
    Registry::builder()
        .with_builtins()
        .register(
            CommandDescriptor::new("kick", "Kicks a player from the server.", 5),
            Box::new(CannedGroup("kicked")),
        )
        .build()
}

/// Dispatcher over [`kick_registry`] with the default `/` prefix.
pub fn kick_dispatcher() -> Dispatcher {
    Dispatcher::new(kick_registry(), '/')
}
