use std::fmt::Debug;

/// Capability shared by every shape in a report.
///
/// Object safe, so mixed variants can live in one `Vec<Box<dyn Shape>>`.
pub trait Shape: Debug {
    /// Geometric area in cm2.
    fn area(&self) -> f64;

    /// Geometric perimeter in cm.
    fn perimeter(&self) -> f64;

    /// Human-readable dimensions, two decimals, unit `cm`.
    fn dimensions(&self) -> String;

    /// Declared name of the concrete variant, e.g. `"Circle"`.
    fn type_name(&self) -> &'static str;
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }

    fn dimensions(&self) -> String {
        (**self).dimensions()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}
