/*!
`cxdual`: a mutable complex number kept in Cartesian and polar form at
the same time.

The whole crate is the one value type, [`Complex`]. It carries both
coordinate pairs and reconciles them after every mutation, so reading
the magnitude or the angle is always O(1). Arithmetic mutates in
place; the standard operators return new values; the [`log`] module
holds the logarithm factories.
*/

pub mod cx;
pub mod log;

pub use crate::cx::Complex;
