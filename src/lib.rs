//! Interactive point-mass and spring sandbox.
//!
//! Click to place points, right click (or control-click) near several points to join them
//! with springs, hold `D` to drag the point nearest the pointer.

pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod render;
pub mod simulation;
pub mod spring;
pub mod vector;

pub use config::SimulationConfig;
pub use error::SimulationError;
pub use frame::FrameClock;
pub use input::{Command, InputTranslator};
pub use render::{Canvas, MacroquadCanvas};
pub use simulation::{Bounds, PointMass, World};
pub use spring::Spring;
pub use vector::Vector2;
