//! # Domain Module
//!
//! Booking widget logic on the server side. The pure calendar, selection and
//! link building rules live in `shared` so the frontend can run them too;
//! the services here bind them to the loaded content, the widget config and
//! the clock.

pub mod availability_service;
pub mod booking_service;
pub mod calendar;
pub mod clock;

pub use availability_service::{AvailabilityService, LoadedAvailability};
pub use booking_service::{BookingError, BookingService};
pub use calendar::CalendarService;
pub use clock::Clock;
