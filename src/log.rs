/*!
Logarithms of complex numbers.

Unlike the in-place arithmetic on [`Complex`], everything here is a
factory: each function returns a freshly constructed value and leaves
its arguments alone. The natural log of a number with polar form
m ∠ a is the point (ln|m|, a); an arbitrary complex base goes through
the change of base identity log_b(x) = ln(x) / ln(b).
*/

use std::f64::consts::PI;

use crate::cx::Complex;

/** The natural log of the complex number `a` + `b`i. */
pub fn ln(a: f64, b: f64) -> Complex {
    ln_polar((a * a + b * b).sqrt(), b.atan2(a))
}

/**
The natural log of the real number `a`.

A negative argument lands on the principal branch: the result is
ln|a| + πi.
*/
pub fn ln_real(a: f64) -> Complex {
    ln_polar(a, if a >= 0.0 { 0.0 } else { PI })
}

/** The natural log of the complex number `z`. */
pub fn ln_cx(z: Complex) -> Complex {
    ln_polar(z.mag(), z.arg())
}

/**
The natural log of the complex number `a` ∠ `b`.

The real part of the result is ln|a|; the imaginary part is the angle
`b`, unchanged. A zero magnitude gives a -∞ real part rather than any
kind of failure.
*/
pub fn ln_polar(a: f64, b: f64) -> Complex {
    Complex::rect(a.abs().ln(), b)
}

/** The log base (`a` + `b`i) of (`c` + `d`i). */
pub fn log(a: f64, b: f64, c: f64, d: f64) -> Complex {
    log_polar(
        (a * a + b * b).sqrt(),
        b.atan2(a),
        (c * c + d * d).sqrt(),
        d.atan2(c),
    )
}

/** The log base `z1` of `z2`. */
pub fn log_cx(z1: Complex, z2: Complex) -> Complex {
    log_polar(z1.mag(), z1.arg(), z2.mag(), z2.arg())
}

/** The log base (`m1` ∠ `a1`) of (`m2` ∠ `a2`). */
pub fn log_polar(m1: f64, a1: f64, m2: f64, a2: f64) -> Complex {
    let mut z = ln_polar(m2, a2);
    z.div_cx(ln_polar(m1, a1));
    z
}
