//! Core value types for gemspace.
//!
//! This crate provides the plain data the proximity overlay works on:
//! - [`SceneObject`] and [`SceneInstance`] describing one frame of the host scene
//! - [`StyleOverride`] and [`ResolvedStyle`] for per-object widget styling
//! - [`WidgetOptions`] holding the host-supplied widget configuration
//! - [`UnitScale`] and the [`DisplayUnitConverter`] trait for scene-to-display lengths

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod object;
pub mod options;
pub mod style;
pub mod transform;
pub mod units;

pub use color::Rgba;
pub use error::{GemspaceError, Result};
pub use object::{ObjectId, SceneInstance, SceneObject};
pub use options::{DrawMode, WidgetOptions};
pub use style::{ResolvedStyle, StyleOverride};
pub use transform::Transform;
pub use units::{DisplayUnitConverter, UnitScale, UnitSystem};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
