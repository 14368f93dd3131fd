//! Report dialects and their schema handlers.
//!
//! A document is classified once by its root element into a [`Dialect`],
//! and the dialect's [`SchemaHandler`] extracts the counts of every
//! result-bearing element in it.

mod dialect;
mod handler;
pub mod handlers;

pub use dialect::Dialect;
pub use handler::{ReportContext, SchemaHandler};
