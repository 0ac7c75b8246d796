pub mod use_booking_content;
pub mod use_booking_selection;
pub mod use_calendar;
