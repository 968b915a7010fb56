//! A headless scroll viewport for virtualized list renderers.
//!
//! The crate reads the geometry of a scrollable surface (the whole window, or one element),
//! normalizes it into [`Metrics`] (content box, visible box, scroll offsets and ratios), and
//! republishes native input as a small typed event vocabulary:
//!
//! - `scroll` / `resize`, each immediately followed by `change`
//! - `keypress(key_code)`, with OS auto-repeat coalesced
//!
//! It is UI-agnostic. A host layer (see the `viewport-web` crate for the DOM) implements the
//! traits in [`host`] to provide:
//! - bounding boxes and scroll extents
//! - listener registration for resize/scroll/keyboard input
//! - a millisecond clock for keyboard coalescing
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
pub mod host;
mod keys;
mod metrics;
mod types;
mod viewport;


pub use emitter::{Emitter, EventKind, Subscription, ViewportEvent};
pub use keys::{KEY_REPEAT_WINDOW_MS, KeyCoalescer};
pub use metrics::{ratio, read_rect};
pub use types::{KeyCode, Metrics, Overflow, Rect, ScrollState, ScrollTo, TimestampMs};
pub use viewport::{
    ElementSurface, ElementViewport, Surface, Viewport, WindowSurface, WindowViewport,
};
