//! pmmc-util - shared foundation types for the pmmc front end
//!
//! Holds the pieces that don't belong to either analyzer specifically:
//! source positions (`span`), the per-token-class synchronization stacks
//! used by panic-mode recovery (`sync_stack`), the diagnostic collection
//! pipeline (`diagnostic`), and the error type for driver-level failures
//! (`error`).

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod sync_stack;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::{DriverError, DriverResult};
pub use span::Span;
pub use sync_stack::SyncStack;
