//! Layout engines for computing chevron geometry
//!
//! Both engines are pure: they take an ordered segment list plus a resolved
//! configuration and return fresh geometry on every call.

pub mod config;
pub mod radial;
pub mod straight;
pub mod types;

pub use config::{RadialConfig, RadialOptions, StraightConfig, StraightOptions, StrokeLinejoin};
pub use radial::{RadialLayout, Wedge};
pub use straight::{Chevron, StraightLayout};
pub use types::*;
