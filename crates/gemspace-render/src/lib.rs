//! Overlay rendering primitives for gemspace.
//!
//! This crate holds what the proximity engine emits and the collaborators it
//! emits through:
//! - [`RenderCommand`] and the GPU-uploadable [`OverlayVertex`]
//! - [`RingCache`], a bounded cache of unit-circle offsets
//! - [`ColorTier`] and label placement helpers
//! - [`Camera`] and the [`Projector`] trait for world-to-screen mapping
//! - [`RenderSink`] with scoped [`DrawState`] handling

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::struct_excessive_bools)]

pub mod camera;
pub mod command;
pub mod label;
pub mod ring;
pub mod sink;

pub use camera::{Camera, ProjectionMode, Projector};
pub use command::{OverlayVertex, RenderCommand};
pub use label::{format_gap, label_backdrop, ColorTier, PendingLabel, LABEL_TEXT_COLOR};
pub use ring::{circle_offsets, RingCache, DEFAULT_RING_CACHE_CAPACITY, RING_SEGMENTS};
pub use sink::{DrawScope, DrawState, RecordingSink, RenderSink, SinkEvent};
