//! Operator command groups wired by the console binary.
//!
//! These stay deliberately thin; real game-side groups live with the
//! systems they drive and register alongside them.

use super::{CommandDescriptor, CommandGroup, Context};
use crate::error::CommandError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Sub-command help table for the `stats` group.
const STATS_HELP: &[(&str, &str)] = &[(
    "reset",
    "stats reset: zeroes the query counter (requires level 5).",
)];

/// `version` - prints build information.
pub struct VersionGroup;

impl VersionGroup {
    pub fn descriptor() -> CommandDescriptor {
        CommandDescriptor::new("version", "Prints server build information.", 0)
    }
}

impl CommandGroup for VersionGroup {
    fn fallback(&self, _ctx: &Context<'_>) -> String {
        format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// `uptime` - prints how long the process has been running.
pub struct UptimeGroup {
    started: DateTime<Utc>,
}

impl UptimeGroup {
    pub fn new() -> Self {
        Self {
            started: Utc::now(),
        }
    }

    pub fn descriptor() -> CommandDescriptor {
        CommandDescriptor::new("uptime", "Prints how long the server has been running.", 0)
    }
}

impl Default for UptimeGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandGroup for UptimeGroup {
    fn fallback(&self, _ctx: &Context<'_>) -> String {
        let up = Utc::now() - self.started;
        format!(
            "Up {}d {:02}h {:02}m {:02}s",
            up.num_days(),
            up.num_hours() % 24,
            up.num_minutes() % 60,
            up.num_seconds() % 60
        )
    }
}

/// `stats` - query counters.
///
/// The counter lives behind the group's own lock; the registry and
/// dispatcher never protect per-group state.
pub struct StatsGroup {
    queries: Mutex<u64>,
}

impl StatsGroup {
    pub fn new() -> Self {
        Self {
            queries: Mutex::new(0),
        }
    }

    pub fn descriptor() -> CommandDescriptor {
        CommandDescriptor::new("stats", "Prints dispatch statistics.", 0)
    }
}

impl Default for StatsGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandGroup for StatsGroup {
    fn handle(&self, ctx: &Context<'_>, params: &str) -> Result<String, CommandError> {
        match params.split_whitespace().next() {
            None => Ok(self.fallback(ctx)),
            Some("reset") => {
                // Console is trusted; connections need level 5.
                if let Some(conn) = ctx.connection
                    && conn.level() < 5
                {
                    return Err(CommandError::AccessDenied);
                }
                *self.queries.lock() = 0;
                Ok("Stats counters reset.".to_string())
            }
            Some(_) => Ok(self.fallback(ctx)),
        }
    }

    fn fallback(&self, _ctx: &Context<'_>) -> String {
        let mut queries = self.queries.lock();
        *queries += 1;
        format!("Stats queried {} time(s) since startup.", *queries)
    }

    fn help(&self, subcommand: &str) -> String {
        STATS_HELP
            .iter()
            .find(|(name, _)| *name == subcommand)
            .map(|(_, text)| (*text).to_string())
            .unwrap_or_else(|| format!("No help available for '{subcommand}'."))
    }
}
