//! Background execution of the contacts query.
//!
//! The UI thread owns a [`QueryRuntime`]; fetches run on a worker thread and
//! their results are pumped back once per tick.

mod commands;
mod runtime;
mod worker;

pub(crate) use commands::{QueryCommand, QueryResult};
pub use runtime::{QueryRuntime, QueryUpdate};
