//! Collision test between a shape and the field
//!
//! Every occupied shape cell must land on an in-bounds, empty field cell.
//! Out of bounds on any side counts as a collision, including rows above
//! the top edge, so pieces can never hang partly off the field.

use crate::field::Field;
use crate::shape::Shape;

/// Whether `shape` with its top-left corner at column `x`, row `y` overlaps
/// a filled cell or leaves the field.
pub fn collides(field: &Field, shape: &Shape, x: i32, y: i32) -> bool {
    shape.occupied().any(|(r, c)| {
        field
            .get(y + r as i32, x + c as i32)
            .is_none_or(|cell| cell.is_filled())
    })
}
