//! Translation table: entries, validation and lookup.

mod entry;
mod error;
mod store;

pub use entry::TranslationEntry;
pub use error::{
    EntryIssue,
    LookupError,
    TableError,
};
pub use store::TranslationTable;
