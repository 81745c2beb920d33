//! Reading data model shared by the sources, the resolver and the renderer.
//!
//! Types here carry no behavior beyond small accessors; the occasion logic
//! lives in `crate::resolve`.

mod day;
mod raw;
mod resolved;
mod secondary;

pub use day::Day;
pub use raw::{RawReading, ReadingLink, MATINS_GOSPEL};
pub use resolved::ResolvedReading;
pub use secondary::{LiturgicalInfo, LiturgicalTitle, ReadingDescription};
