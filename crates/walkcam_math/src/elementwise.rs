//! Chained elementwise arithmetic
//!
//! Both [`Vector3`](crate::Vector3) and [`Orientation3`](crate::Orientation3)
//! are three packed `f32` values. This trait views them as `[f32; 3]` and
//! provides the mutating, chainable operations on top of that view.

use bytemuck::Pod;

/// Mutating elementwise arithmetic over three packed `f32` components
///
/// Every operation except [`copy`](Elementwise::copy) mutates the receiver
/// and returns it, so calls can be chained:
///
/// ```
/// use walkcam_math::{Elementwise, Vector3};
///
/// let mut v = Vector3::new(1.0, 2.0, 3.0);
/// v.scale(2.0).add(&Vector3::new(1.0, 1.0, 1.0));
/// assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));
/// ```
pub trait Elementwise: Pod {
    /// View the components as an array
    #[inline]
    fn components(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    /// Mutable view of the components
    #[inline]
    fn components_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    /// Elementwise addition
    #[inline]
    fn add(&mut self, other: &Self) -> &mut Self {
        zip_apply(self, other, |a, b| *a += b);
        self
    }

    /// Elementwise subtraction
    #[inline]
    fn subtract(&mut self, other: &Self) -> &mut Self {
        zip_apply(self, other, |a, b| *a -= b);
        self
    }

    /// Elementwise (Hadamard) multiplication
    #[inline]
    fn multiply(&mut self, other: &Self) -> &mut Self {
        zip_apply(self, other, |a, b| *a *= b);
        self
    }

    /// Elementwise division
    ///
    /// A zero component in `other` is not guarded against and produces
    /// an infinite or NaN component.
    #[inline]
    fn divide(&mut self, other: &Self) -> &mut Self {
        zip_apply(self, other, |a, b| *a /= b);
        self
    }

    /// Negate every component
    #[inline]
    fn invert(&mut self) -> &mut Self {
        for c in self.components_mut() {
            *c = -*c;
        }
        self
    }

    /// Multiply every component by `k`
    #[inline]
    fn scale(&mut self, k: f32) -> &mut Self {
        for c in self.components_mut() {
            *c *= k;
        }
        self
    }

    /// Independent value with identical components
    #[inline]
    fn copy(&self) -> Self {
        *self
    }
}

#[inline]
fn zip_apply<T: Elementwise>(lhs: &mut T, rhs: &T, op: impl Fn(&mut f32, f32)) {
    let rhs = *rhs.components();
    for (a, b) in lhs.components_mut().iter_mut().zip(rhs) {
        op(a, b);
    }
}
