use crate::circle::Circle;
use crate::error::ShapeError;
use crate::rectangle::Rectangle;
use crate::shape::Shape;
use std::io::Write;

// =============================================================================
// Line formatting
// =============================================================================

/// One summary sentence for a shape, without the trailing newline.
pub fn describe(shape: &dyn Shape) -> String {
    format!(
        "A {} of {} has an area of {:.2} cm2 and a perimeter of {:.2} cm.",
        shape.type_name(),
        shape.dimensions(),
        shape.area(),
        shape.perimeter(),
    )
}

/// Render every shape in insertion order.
pub fn render(shapes: &[Box<dyn Shape>]) -> Vec<String> {
    shapes
        .iter()
        .map(|shape| {
            tracing::debug!(
                shape = shape.type_name(),
                area = shape.area(),
                perimeter = shape.perimeter(),
                "rendering shape"
            );
            describe(&**shape)
        })
        .collect()
}

// =============================================================================
// Output
// =============================================================================

/// Write one line per shape and flush.
/// Role: the display loop behind the binary; returns the number of lines written
pub fn write_report<W: Write>(
    out: &mut W,
    shapes: &[Box<dyn Shape>],
) -> Result<usize, ShapeError> {
    tracing::info!(count = shapes.len(), "writing shape report");

    let lines = render(shapes);
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(lines.len())
}

/// The collection printed when the binary runs.
pub fn default_shapes() -> Result<Vec<Box<dyn Shape>>, ShapeError> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::try_new(2.0, 3.0)?),
        Box::new(Circle::try_new(1.0)?),
    ];
    Ok(shapes)
}
