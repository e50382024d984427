use crate::error::ShapeError;
use crate::shape::Shape;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
}

impl Rectangle {
    /// Build without validation; bad values flow straight into the formulas.
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    /// Build from untrusted input.
    /// Role: reject non-finite or non-positive sides, length checked first
    pub fn try_new(length: f64, width: f64) -> Result<Self, ShapeError> {
        let length = ShapeError::check_dimension("Rectangle", "length", length)?;
        let width = ShapeError::check_dimension("Rectangle", "width", width)?;
        Ok(Self { length, width })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.length * self.width
    }

    fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }

    fn dimensions(&self) -> String {
        self.to_string()
    }

    fn type_name(&self) -> &'static str {
        "Rectangle"
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "length {:.2} cm and width {:.2} cm", self.length, self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_area_and_perimeter() {
        let rect = Rectangle::new(2.0, 3.0);
        assert_eq!(rect.area(), 6.0);
        assert_eq!(rect.perimeter(), 10.0);
    }

    #[test]
    fn test_dimensions_template() {
        assert_eq!(
            Rectangle::new(2.0, 3.0).dimensions(),
            "length 2.00 cm and width 3.00 cm"
        );
        assert_eq!(
            Rectangle::new(1.005, 12.3456).dimensions(),
            "length 1.00 cm and width 12.35 cm"
        );
    }

    #[test]
    fn test_unchecked_values_propagate() {
        let rect = Rectangle::new(-2.0, 3.0);
        assert_eq!(rect.area(), -6.0);
        assert!(Rectangle::new(f64::NAN, 1.0).perimeter().is_nan());
    }

    #[test]
    fn test_try_new_reports_first_bad_field() {
        match Rectangle::try_new(0.0, -1.0) {
            Err(ShapeError::InvalidDimension { shape, field, value }) => {
                assert_eq!(shape, "Rectangle");
                assert_eq!(field, "length");
                assert_eq!(value, 0.0);
            }
            other => panic!("expected InvalidDimension, got {:?}", other),
        }

        match Rectangle::try_new(4.0, f64::INFINITY) {
            Err(ShapeError::InvalidDimension { field, .. }) => assert_eq!(field, "width"),
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_try_new_accepts_positive() {
        let rect = Rectangle::try_new(1.0, 4.0).unwrap();
        assert_eq!(rect, Rectangle::new(1.0, 4.0));
        assert_eq!(rect.length(), 1.0);
        assert_eq!(rect.width(), 4.0);
    }

    proptest! {
        #[test]
        fn test_rectangle_formulas(l in 0.001f64..1.0e6, w in 0.001f64..1.0e6) {
            let rect = Rectangle::try_new(l, w).unwrap();
            prop_assert_eq!(rect.area(), l * w);
            prop_assert_eq!(rect.perimeter(), 2.0 * (l + w));
        }

        #[test]
        fn test_rectangle_dimensions_format(l in 0.001f64..1.0e6, w in 0.001f64..1.0e6) {
            let expected = format!("length {:.2} cm and width {:.2} cm", l, w);
            prop_assert_eq!(Rectangle::new(l, w).dimensions(), expected);
        }
    }
}
