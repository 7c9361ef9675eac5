//! # grib-nearest
//!
//! Type-keyed construction of nearest-neighbour lookup strategies for GRIB
//! messages.
//!
//! A message declares its nearest strategy as an argument list such as
//! `regular(values, radius, Ni, Nj)`. The factory looks the type name up in a
//! fixed registration table, builds a default instance of the matching
//! variant, and hands it to the caller only after the variant has resolved
//! and validated its own arguments against the message.
//!
//! ## Architecture
//!
//! - **Handles**: decoded messages exposing typed key lookup
//! - **Arguments**: positional argument lists resolved through a handle
//! - **Factory**: the registration table and the create operation
//! - **Variants**: regular, reduced, projected and spectral strategies

pub mod arguments;
pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod message;
pub mod nearest;

pub use arguments::{Argument, Arguments};
pub use config::Config;
pub use error::{NearestError, Result};
pub use handle::{Context, Handle, KeyValue};
pub use logging::{generate_context_id, init_tracing, log_timed_operation};
pub use nearest::{
    create, new_from_handle, registered_types, Nearest, NearestClass, NearestRegistry,
    NearestStrategy, NearestSummary, RegistrationEntry,
};
