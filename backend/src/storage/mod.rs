//! # Storage Module
//!
//! Reads the booking widget's content and configuration from the data
//! directory. The domain layer only sees the traits in [`traits`], so the
//! flat-file implementation can be swapped for a CMS or database client
//! without touching the services.
//!
//! Nothing is ever written back: the content is owned by whoever edits the
//! data directory, and selection state stays with the widget.

pub mod file;
pub mod traits;

pub use file::{AvailabilityRepository, BookingConfigRepository, ContentConnection};
pub use traits::{AvailabilityStorage, BookingConfigStorage};
