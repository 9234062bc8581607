pub mod classify;
pub mod debounce;
pub mod lookup;
pub mod preprocess;
pub mod sequence;
pub mod service;

#[cfg(test)]
mod testing;

pub use debounce::{DebounceCommand, Debouncer};
pub use lookup::{LookupOutcome, lookup};
pub use sequence::{RequestSequence, Ticket};
pub use service::ServiceSelection;
