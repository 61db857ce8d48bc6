//! Presentation adapters.
//!
//! Thin translations from service results into notifications at the UI
//! boundary. Business logic stays in [`crate::service`].

mod availability;
mod greeting;

pub use availability::{check_availability_interactive, AvailabilityCheck};
pub use greeting::{ViewLoad, ViewSession};
