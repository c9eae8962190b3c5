//! In-memory, fixed-capacity student record store
//!
//! `RecordStore` holds up to a fixed number of `Record`s in insertion order.
//! It supports appending, first-match lookup by identifier and ordered
//! listing. There is no deletion, update, resizing or indexing.

pub mod cli;
pub mod config;
pub mod error;
pub mod name;
pub mod output;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use name::{BoundedName, MAX_NAME_LEN};
pub use record::Record;
pub use store::RecordStore;
