//! Shapes behind one trait object, printed as a report.
//!
//! `Rectangle` and `Circle` both implement [`Shape`]; the [`report`] module
//! renders a mixed `Vec<Box<dyn Shape>>` one line per shape.

pub mod circle;
pub mod error;
pub mod logging;
pub mod rectangle;
pub mod report;
pub mod shape;

pub use circle::Circle;
pub use error::ShapeError;
pub use rectangle::Rectangle;
pub use report::{default_shapes, describe, render, write_report};
pub use shape::Shape;
