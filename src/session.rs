//! Minimal session-layer surface the dispatch core reads.
//!
//! The network layer owns connections and accounts; the dispatch core only
//! needs the invoker's identity and account privilege level. Privilege
//! levels are plain integers compared against a descriptor's minimum.

/// A player account as seen by the command core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account name, used for log correlation.
    pub name: String,
    /// Privilege level, compared against `CommandDescriptor::min_level`.
    pub level: u32,
}

/// A connected client as seen by the command core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    /// The account this connection is authenticated as.
    pub account: Account,
}

impl Connection {
    /// Build a connection for the given account name and privilege level.
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            account: Account {
                name: name.into(),
                level,
            },
        }
    }

    /// The privilege level of this connection's account.
    #[inline]
    pub fn level(&self) -> u32 {
        self.account.level
    }
}
