//! # salon-engine
//!
//! Deterministic back-office computations for a salon/service business.
//!
//! The centerpiece is the appointment slot finder: given a technician's
//! existing bookings, a service duration, and a preferred date, it proposes
//! bookable start times that respect working hours, a mandatory buffer
//! around existing appointments, and a preferred-day-with-fallback search
//! order. The engine is pure computation over caller-supplied values; it
//! performs no I/O and owns no durable state.
//!
//! ## Modules
//!
//! - [`slots`] — candidate appointment start times for a technician
//! - [`interval`] — busy intervals and the half-open overlap predicate
//! - [`prioritize`] — rank open tasks by urgency, deadline, and availability
//! - [`segment`] — assign marketing segments from transaction history
//! - [`wire`] — JSON-facing request/response types
//! - [`error`] — error types

pub mod error;
pub mod interval;
pub mod prioritize;
pub mod segment;
pub mod slots;
pub mod wire;

pub use error::EngineError;
pub use interval::{intervals_overlap, BusyInterval};
pub use prioritize::{prioritize_tasks, Task, TaskPriority, Urgency};
pub use segment::{categorize_customers, CustomerRecord, CustomerSegment, Segment};
pub use slots::{find_slots, find_slots_with_policy, SlotPolicy, SlotRequest};
