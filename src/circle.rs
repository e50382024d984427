use crate::error::ShapeError;
use crate::shape::Shape;
use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn try_new(radius: f64) -> Result<Self, ShapeError> {
        let radius = ShapeError::check_dimension("Circle", "radius", radius)?;
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn dimensions(&self) -> String {
        self.to_string()
    }

    fn type_name(&self) -> &'static str {
        "Circle"
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "radius {:.2} cm", self.radius)
    }
}
