//! # docwire-client
//!
//! Async collection client for a schemaless document store speaking the
//! DocWire wire protocol.
//!
//! Each operation is one stateless request/response exchange: list a
//! collection, run a field-filter query, point-read, create, update, or
//! delete one document. Wire values are decoded to and encoded from
//! `docwire_value::Value` at the boundary, so callers only ever handle
//! native values.
//!
//! ```ignore
//! use docwire_client::{CollectionClient, FilterOp};
//!
//! let client = CollectionClient::new(base_url)?;
//!
//! let all = client.list_all("quizzes").await?;
//! let math = client
//!     .list_filtered("quizzes", "subject", FilterOp::Equal, "math")
//!     .await?;
//!
//! match client.get_one("quizzes", "abc123").await? {
//!     Some(quiz) => println!("{:?}", quiz.data),
//!     None => println!("no such quiz"),
//! }
//! ```
//!
//! Failures are typed (`Error::Store`, `Error::Transport`,
//! `Error::Decode`) and always returned, never logged or retried here;
//! a missing document on a point read is `Ok(None)`, not an error.

pub mod query;

mod client;
mod error;

pub use client::{CollectionClient, ListOptions};
pub use error::Error;
pub use query::FilterOp;
