//! gamed - game server command dispatch core.
//!
//! Turns a line of text, typed at the operator console or sent by a
//! connected player as a chat message, into a routed call against a named,
//! privilege-gated command group and returns a textual result.
//!
//! ## Architecture
//!
//! Data flows one direction: raw line -> parser -> `(token, params)` ->
//! registry lookup -> selected group's `handle` -> text result, which is
//! logged (console path) or left to the session layer to deliver
//! (connection path). The registry is built exactly once at startup and is
//! read-only afterwards, so concurrent dispatch needs no locking here.

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod telemetry;

pub use commands::{
    CommandDescriptor, CommandGroup, Context, Dispatcher, Registry, RegistryBuilder,
};
pub use error::{CommandError, DispatchError};
pub use session::{Account, Connection};
