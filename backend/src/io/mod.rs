//! # IO Module
//!
//! Interface layer between the booking widget and the domain services: the
//! REST API under `/api`, JSON in and out.

pub mod rest;

pub use rest::*;
