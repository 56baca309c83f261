//! Command groups and the dispatch registry.
//!
//! This module contains the `CommandGroup` trait and the registry used by
//! the dispatcher to route parsed command lines to handlers.
//!
//! The registry is built exactly once, via [`RegistryBuilder`], before any
//! dispatch call is reachable. Afterwards it is read-only for the life of
//! the process, which is what makes concurrent dispatch safe without a
//! lock.

mod dispatcher;
mod meta;
mod parser;
mod server;

pub use dispatcher::Dispatcher;
pub use meta::{CommandsGroup, HelpGroup};
pub use parser::{CommandInvocation, parse_line};
pub use server::{StatsGroup, UptimeGroup, VersionGroup};

use crate::error::CommandError;
use crate::session::Connection;
use tracing::warn;

/// Immutable metadata identifying a command group.
///
/// Identity is the name, created once when the group registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    name: String,
    description: String,
    min_level: u32,
}

impl CommandDescriptor {
    /// Create a descriptor.
    ///
    /// The name is lower-cased here so that every registered command is
    /// reachable from the lower-cased parse token.
    ///
    /// # Panics
    ///
    /// Panics on an empty name; the parser relies on registered names being
    /// non-empty so that a bare prefix character never matches.
    pub fn new(name: &str, description: &str, min_level: u32) -> Self {
        assert!(!name.trim().is_empty(), "command names must be non-empty");
        Self {
            name: name.trim().to_ascii_lowercase(),
            description: description.to_string(),
            min_level,
        }
    }

    /// The unique, lower-cased command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description, returned verbatim by `help <command>`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Minimum account privilege level at which this command is visible.
    pub fn min_level(&self) -> u32 {
        self.min_level
    }
}

/// Per-call view passed to command group handlers.
///
/// Carries the registry, so meta-commands can introspect it, and the
/// invoking connection. Console dispatch has no connection and is
/// implicitly trusted.
pub struct Context<'a> {
    /// The registry the dispatching call went through.
    pub registry: &'a Registry,
    /// The invoking connection, absent on the console path.
    pub connection: Option<&'a Connection>,
}

/// Trait implemented by all command groups.
///
/// A group owns one top-level command and its sub-commands. The registry
/// never mutates a group after registration; any mutable state inside an
/// implementation is that implementation's own responsibility to protect.
///
/// The dispatcher does not gate access by privilege level. A group that
/// needs gating checks `ctx.connection` itself, typically returning
/// [`CommandError::AccessDenied`].
pub trait CommandGroup: Send + Sync {
    /// Handle an invocation with the given parameter string.
    ///
    /// Errors are contained by the dispatcher and converted to a generic
    /// user-visible message; they never reach the session layer.
    fn handle(&self, ctx: &Context<'_>, params: &str) -> Result<String, CommandError> {
        let _ = params;
        Ok(self.fallback(ctx))
    }

    /// Text produced when the group is invoked without usable parameters.
    fn fallback(&self, ctx: &Context<'_>) -> String;

    /// Help text for one of the group's sub-commands.
    fn help(&self, subcommand: &str) -> String {
        format!("No help available for '{subcommand}'.")
    }
}

/// Registry of command groups.
///
/// An ordered mapping from descriptor to group instance. Built exactly
/// once, then read-only: no entry is ever added, removed, or mutated after
/// [`RegistryBuilder::build`] returns.
pub struct Registry {
    entries: Vec<(CommandDescriptor, Box<dyn CommandGroup>)>,
}

impl Registry {
    /// Start building a registry from an explicit registration list.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// Look up a group by exact (lower-cased) name.
    ///
    /// With duplicate registrations the earliest entry wins.
    pub fn find(&self, name: &str) -> Option<(&CommandDescriptor, &dyn CommandGroup)> {
        self.entries
            .iter()
            .find(|(desc, _)| desc.name() == name)
            .map(|(desc, group)| (desc, group.as_ref()))
    }

    /// Iterate all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&CommandDescriptor, &dyn CommandGroup)> {
        self.entries
            .iter()
            .map(|(desc, group)| (desc, group.as_ref()))
    }

    /// Number of registered entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for the one-time registry construction step.
///
/// Construction is single-threaded and completes fully before the
/// dispatcher becomes reachable by any caller.
pub struct RegistryBuilder {
    entries: Vec<(CommandDescriptor, Box<dyn CommandGroup>)>,
}

impl RegistryBuilder {
    /// Register a group under its descriptor.
    ///
    /// A name collision logs a warning but the entry is still inserted;
    /// lookup resolves to the earlier registration. Collisions compare the
    /// case-normalized name string, not descriptor identity.
    pub fn register(
        mut self,
        descriptor: CommandDescriptor,
        group: Box<dyn CommandGroup>,
    ) -> Self {
        if self
            .entries
            .iter()
            .any(|(existing, _)| existing.name() == descriptor.name())
        {
            warn!(
                name = %descriptor.name(),
                "there exists an already registered command group with this name"
            );
        }
        self.entries.push((descriptor, group));
        self
    }

    /// Register the built-in `commands` and `help` meta-groups.
    pub fn with_builtins(self) -> Self {
        self.register(CommandsGroup::descriptor(), Box::new(CommandsGroup))
            .register(HelpGroup::descriptor(), Box::new(HelpGroup))
    }

    /// Finish construction; the resulting registry is read-only.
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}
