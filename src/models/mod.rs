//! Data models for Shear Magic

pub mod appointment;
pub mod catalog;
pub mod schedule;
pub mod user;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentDetails, AppointmentStatus, NewAppointment, TimeSlot};
pub use catalog::{Barber, Service};
pub use schedule::{DateException, Schedule};
pub use user::{SessionClaims, UserCredentials};
