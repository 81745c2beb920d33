//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the resolver core and an
//! external system (the clock and the two reading sources).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod error;
pub mod primary;
pub mod secondary;

pub use clock::Clock;
pub use error::SourceError;
pub use primary::PrimarySource;
pub use secondary::SecondarySource;

use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by source ports, keeping the traits dyn-compatible.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;
