//! Entrance animations
//!
//! Animations are pure functions of elapsed time. A damped spring drives the
//! progress, a [`Transition`] maps progress onto visual [`Frame`]s, and the
//! generator bakes the sampled frames into CSS keyframes so the static pages
//! animate without any script.

mod spring;
mod transition;

pub use spring::SpringConfig;
pub use transition::{Frame, Transition};
