//! The `restful` command: one GET or POST against a JSON REST API.
//!
//! # Overview
//! `args` turns the command line into a `Request`, `dispatch` sends it
//! through a `Transport`, `handler` reports the response and `writer`
//! persists the body when an output path is given.

pub mod args;
pub mod dispatch;
pub mod handler;
pub mod transport;
pub mod writer;

pub use args::{Cli, Method};
pub use dispatch::{Dispatcher, Outcome};
pub use transport::{Transport, UreqTransport};
