#![warn(missing_docs)]
//! Pointer event model and delivery surfaces.
//!
//! This crate defines what a synthetic pointer event looks like
//! ([`PointerEvent`]), which notifications an object can receive
//! ([`EventTarget`] with a [`Capabilities`] set), and how a notification
//! travels up an object's containment hierarchy to the nearest handler
//! ([`dispatch_to_hierarchy`]). [`TargetRegistry`] is a ready-made
//! [`InteractionScene`] for hosts that don't have their own object model.

pub mod button;
pub mod dispatch;
pub mod event;
pub mod registry;
pub mod target;

pub use button::{Button, ButtonColors, ButtonState};
pub use dispatch::{dispatch_to_hierarchy, InteractionScene};
pub use event::{PointerEvent, PointerEventKind};
pub use registry::TargetRegistry;
pub use target::{Capabilities, EventTarget};
