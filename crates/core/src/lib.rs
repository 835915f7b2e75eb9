//! # SlotBook Core
//!
//! Domain types and decision logic for interview scheduling: time slots,
//! interviews, the conflict rule between slots and the booking state machine.
//!
//! Storage is abstract here. [`store::SchedulingStore`] is implemented by the
//! backends in `slotbook-db`, and [`booking::BookingCoordinator`] drives all
//! writes through it. Nothing in this crate logs; errors are returned as
//! [`errors::SchedulerError`].

pub mod booking;
pub mod conflict;
pub mod errors;
pub mod models;
pub mod store;
pub mod timezone;
