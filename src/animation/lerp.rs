use crate::foundation::core::{Point, Vec2};
use crate::model::token::Token;

/// Linear interpolation between two values of the same type.
pub trait Lerp: Sized {
    /// Value at progress `t` between `a` (`t = 0`) and `b` (`t = 1`).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Exact at t = 1 so segment endpoints land on the authored pose.
        if t >= 1.0 {
            return *b;
        }
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

/// Only the position moves; id, kind and label come from `a`.
impl Lerp for Token {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.moved_to(<Point as Lerp>::lerp(&a.position, &b.position, t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
