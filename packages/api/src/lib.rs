//! # API crate — REST client for the FitDesk backend
//!
//! Everything the pages know about the remote API lives here: the typed
//! domain records the backend owns, the request payloads the forms submit,
//! and the [`Api`] client that issues authenticated HTTP calls against the
//! configured base URL.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Api`] — request helpers attaching the auth header, envelope unwrap, 204 handling, one async method per endpoint |
//! | [`config`] | Base URL (compile-time `API_BASE_URL` override) and auth header name |
//! | [`error`] | [`ApiError`] — typed transport / HTTP-status / decode taxonomy |
//! | [`models`] | Remote-owned records mirrored as serde structs, plus the pure helpers derived from them (payment ledger, name matching, schedule ordering) |
//! | [`payloads`] | `Serialize + Validate` request bodies, one per form screen |
//!
//! The client holds no durable state: records are fetched, rendered, and
//! discarded on navigation. The server is the sole source of truth.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod payloads;

pub use client::Api;
pub use error::ApiError;
pub use models::{
    Bodypart, Client, ClientLocation, Equipment, Exercise, Invoice, InvoiceStatus, LoginResponse,
    Measurement, MeasurementKind, Media, Package, Payment, Schedule, Subscription, User, Workout,
    WorkoutExercise, WorkoutSet,
};
