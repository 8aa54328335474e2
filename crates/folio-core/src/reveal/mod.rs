//! Scroll-triggered reveal engine
//!
//! Two cooperating pieces:
//! - [`observer`] watches element extents and emits each element id at most
//!   once, the first time enough of it enters the trigger zone.
//! - [`stagger`] spaces out the reveals of a batch of cards so they animate
//!   in sequence instead of popping in together.
//!
//! The caller wires them up per tick: feed the current viewport to the
//! observer, schedule the returned batch, then poll for due reveals.

pub mod observer;
pub mod stagger;

pub use observer::RevealObserver;
pub use stagger::StaggerScheduler;
