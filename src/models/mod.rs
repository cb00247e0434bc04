pub mod booking;

pub use booking::{Booking, BookingPatch, BookingStats, CreateBooking};
