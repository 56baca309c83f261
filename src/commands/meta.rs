//! Built-in meta-command groups.
//!
//! `commands` and `help` are ordinary registry entries whose behavior is
//! defined in terms of the registry itself, reached through the context
//! passed to every handler.

use super::{CommandDescriptor, CommandGroup, Context};
use crate::error::CommandError;

/// `commands` - lists the commands visible at the invoker's privilege
/// level. Console invocations (no connection) see everything.
pub struct CommandsGroup;

impl CommandsGroup {
    pub fn descriptor() -> CommandDescriptor {
        CommandDescriptor::new("commands", "Lists available commands for your user-level.", 0)
    }
}

impl CommandGroup for CommandsGroup {
    fn fallback(&self, ctx: &Context<'_>) -> String {
        let names: Vec<&str> = ctx
            .registry
            .iter()
            .filter(|(desc, _)| match ctx.connection {
                Some(conn) => desc.min_level() <= conn.level(),
                None => true,
            })
            .map(|(desc, _)| desc.name())
            .collect();

        format!(
            "Available commands: {}.\nType 'help <command>' to get help.",
            names.join(", ")
        )
    }
}

/// `help` - nested help lookup over the registry.
///
/// `help` alone prints usage; `help <group>` prints the group's descriptor
/// description verbatim; `help <group> <sub>` asks the group itself.
pub struct HelpGroup;

impl HelpGroup {
    pub fn descriptor() -> CommandDescriptor {
        CommandDescriptor::new(
            "help",
            "Shows help text for a command or one of its sub-commands.",
            0,
        )
    }
}

impl CommandGroup for HelpGroup {
    fn handle(&self, ctx: &Context<'_>, params: &str) -> Result<String, CommandError> {
        if params.is_empty() {
            return Ok(self.fallback(ctx));
        }

        let mut words = params.split_whitespace();
        let group_name = words.next().unwrap_or_default();
        let subcommand = words.next().unwrap_or_default();

        match ctx.registry.find(group_name) {
            Some((desc, group)) => {
                if subcommand.is_empty() {
                    Ok(desc.description().to_string())
                } else {
                    Ok(group.help(subcommand))
                }
            }
            None => Ok(format!("Unknown command: {group_name} {subcommand}")),
        }
    }

    fn fallback(&self, _ctx: &Context<'_>) -> String {
        String::from("usage: help <command>")
    }
}
