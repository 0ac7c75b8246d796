pub mod availability_calendar;
pub mod booking_modal;
