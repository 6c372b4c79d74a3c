mod error;
mod event_store;

pub use error::{Result, StoreError};
pub use event_store::EventStore;
