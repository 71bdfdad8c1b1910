//! # Domain models mirrored from the backend
//!
//! Every struct here is a remote-owned record: the client fetches it, shows
//! it, and throws it away on navigation. Fields the backend may omit (or
//! that drifted between backend iterations, like the embedded location on a
//! client) are `Option` with `#[serde(default)]` so the backend's actual
//! contract stays the ground truth.
//!
//! The only logic colocated with the records is the handful of pure,
//! screen-independent derivations: the payment ledger on [`Invoice`], name
//! matching on [`Client`], and the fixed sort comparators.

mod billing;
mod client;
mod exercise;
mod location;
mod measurement;
mod schedule;
mod user;
mod workout;

pub use billing::{by_due_date, Invoice, InvoiceStatus, Package, Payment, Subscription};
pub use client::{by_active_then_name, Client};
pub use exercise::{Bodypart, Equipment, Exercise, MeasurementKind, Media};
pub use location::ClientLocation;
pub use measurement::Measurement;
pub use schedule::{by_date_time, Schedule};
pub use user::{LoginResponse, User};
pub use workout::{Workout, WorkoutExercise, WorkoutSet};
