/*!
A complex number held in Cartesian and polar form at the same time.

Type `Complex` stores four scalars (`re`, `im`, `mag`, `arg`) and keeps
the two coordinate pairs describing the same point after every mutation.
Arithmetic is done in place through methods like `.add()` and
`.mul_polar()`; the `+`, `-`, `*`, `/`, and unary `-` operators are also
implemented and return new values built on the same formulas.
*/

#![allow(clippy::from_over_into)]

use std::f64::consts::PI;
use std::fmt;

use ::serde_derive::{Deserialize, Serialize};

/**
A mutable complex number.

The same point is always held in both coordinate systems: after any
public method returns, `re = mag * arg.cos()`, `im = mag * arg.sin()`,
and `arg` lies in (-π, π]. Within a method body the two pairs may
disagree; every mutator ends by reconciling them.

Every binary operation comes in four argument shapes so a caller never
has to build an intermediate value just to fold in a scalar or a polar
pair: the bare name takes a Cartesian `(f64, f64)` pair, `_real` takes
one real scalar, `_cx` takes another `Complex`, and `_polar` takes a
`(magnitude, angle)` pair. All four shapes funnel into one canonical
formula per operation family.

The serialized form is the Cartesian pair `[re, im]`; deserializing
re-derives the polar pair, so a decoded value always satisfies the
representation invariant.
*/
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Complex {
    re:  f64,
    im:  f64,
    mag: f64,
    arg: f64,
}

impl Complex {
    /** Instantiate from Cartesian coordinates. Same as `rect()`. */
    pub fn new(re: f64, im: f64) -> Complex {
        Complex::rect(re, im)
    }

    /** Instantiate from Cartesian coordinates; the polar pair is derived. */
    pub fn rect(x: f64, y: f64) -> Complex {
        let mut z = Complex { re: x, im: y, mag: 0.0, arg: 0.0 };
        z.update_polar();
        z
    }

    /**
    Instantiate from polar coordinates; the Cartesian pair is derived.

    An out-of-range angle is canonicalized into (-π, π]. A negative
    magnitude is kept as given.
    */
    pub fn polar(m: f64, a: f64) -> Complex {
        let mut z = Complex { re: 0.0, im: 0.0, mag: m, arg: a };
        z.update_cartesian();
        z
    }

    /* Re-derive the polar pair from the Cartesian pair. Every mutator
    whose formula worked on `re`/`im` ends here. */
    fn update_polar(&mut self) {
        self.arg = self.im.atan2(self.re);
        self.mag = (self.re * self.re + self.im * self.im).sqrt();
    }

    /* Re-derive the Cartesian pair from the polar pair. Every mutator
    whose formula worked on `mag`/`arg` ends here.

    The angle is only touched when it has left (-π, π]; it then gets
    canonicalized from the freshly derived Cartesian values. The
    magnitude is never altered, even when negative. */
    fn update_cartesian(&mut self) {
        self.re = self.arg.cos() * self.mag;
        self.im = self.arg.sin() * self.mag;

        if -PI >= self.arg || self.arg > PI {
            self.arg = self.im.atan2(self.re);
        }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    /** The polar radius. Negative only if a negative magnitude was passed in. */
    pub fn mag(&self) -> f64 {
        self.mag
    }

    /** The polar angle in radians, in (-π, π]. */
    pub fn arg(&self) -> f64 {
        self.arg
    }

    pub fn sqmod(&self) -> f64 {
        (self.re * self.re) + (self.im * self.im)
    }

    /** Add the complex number `r` + `i`i. */
    pub fn add(&mut self, r: f64, i: f64) {
        self.re += r;
        self.im += i;

        self.update_polar();
    }

    /** Add the real number `r`. */
    pub fn add_real(&mut self, r: f64) {
        self.add(r, 0.0);
    }

    /** Add the complex number `z`. */
    pub fn add_cx(&mut self, z: Complex) {
        self.add(z.re, z.im);
    }

    /** Add the complex number `m` ∠ `a`. */
    pub fn add_polar(&mut self, m: f64, a: f64) {
        self.re = self.arg.cos() * self.mag + a.cos() * m;
        self.im = self.arg.sin() * self.mag + a.sin() * m;

        self.update_polar();
    }

    /** Subtract the complex number `r` + `i`i. */
    pub fn sub(&mut self, r: f64, i: f64) {
        self.add(-r, -i);
    }

    /** Subtract the real number `r`. */
    pub fn sub_real(&mut self, r: f64) {
        self.add(-r, 0.0);
    }

    /** Subtract the complex number `z`. */
    pub fn sub_cx(&mut self, z: Complex) {
        self.add(-z.re, -z.im);
    }

    /** Subtract the complex number `m` ∠ `a` (negated magnitude, same angle). */
    pub fn sub_polar(&mut self, m: f64, a: f64) {
        self.add_polar(-m, a);
    }

    /** Multiply by the complex number `r` + `i`i. */
    pub fn mul(&mut self, r: f64, i: f64) {
        let re = self.re * r - self.im * i;

        self.im = self.re * i + self.im * r;
        self.re = re;

        self.update_polar();
    }

    /** Multiply by the real number `r`. */
    pub fn mul_real(&mut self, r: f64) {
        self.re *= r;
        self.im *= r;

        self.update_polar();
    }

    /** Multiply by the complex number `z`. */
    pub fn mul_cx(&mut self, z: Complex) {
        self.mag *= z.mag;
        self.arg += z.arg;

        self.update_cartesian();
    }

    /** Multiply by the complex number `m` ∠ `a`. */
    pub fn mul_polar(&mut self, m: f64, a: f64) {
        self.mag *= m;
        self.arg += a;

        self.update_cartesian();
    }

    /**
    Divide by the complex number `r` + `i`i.

    A zero divisor produces infinite or NaN components; nothing panics
    on this path.
    */
    pub fn div(&mut self, r: f64, i: f64) {
        let inv = 1.0 / (r * r + i * i);

        let re = (self.re * r + self.im * i) * inv;

        self.im = (self.im * r - self.re * i) * inv;
        self.re = re;

        self.update_polar();
    }

    /** Divide by the real number `r`. */
    pub fn div_real(&mut self, r: f64) {
        self.mul_real(1.0 / r);
    }

    /** Divide by the complex number `z`. */
    pub fn div_cx(&mut self, z: Complex) {
        self.mul_polar(1.0 / z.mag, -z.arg);
    }

    /**
    Divide by the complex number `m` ∠ `a`.

    Delegates to the Cartesian-pair [`Complex::mul`] with arguments
    `(1/m, -a)`.
    */
    pub fn div_polar(&mut self, m: f64, a: f64) {
        self.mul(1.0 / m, -a);
    }

    /** Raise to the power of the complex exponent `r` + `i`i. */
    pub fn pow(&mut self, r: f64, i: f64) {
        let ln = self.mag.ln();

        self.mag = (ln * r - self.arg * i).exp();
        self.arg = ln * i + self.arg * r;

        self.update_cartesian();
    }

    /** Raise to the power of the real exponent `r`. */
    pub fn pow_real(&mut self, r: f64) {
        self.pow(r, 0.0);
    }

    /**
    Raise to the power of the complex exponent `z`.

    Delegates to the Cartesian-pair [`Complex::pow`] with arguments
    `(z.mag, z.arg)`.
    */
    pub fn pow_cx(&mut self, z: Complex) {
        self.pow(z.mag, z.arg);
    }

    /** Raise to the power of the complex exponent `m` ∠ `a`. */
    pub fn pow_polar(&mut self, m: f64, a: f64) {
        let ln = self.mag.ln();
        let cos = a.cos();
        let sin = a.sin();

        self.mag = (m * (ln * cos - self.arg * sin)).exp();
        self.arg = m * (ln * sin + self.arg * cos);

        self.update_cartesian();
    }
}

impl std::ops::Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut z = self;
        z.add_cx(other);
        z
    }
}

impl std::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        let mut z = self;
        z.sub_cx(other);
        z
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        let mut z = self;
        z.mul_cx(other);
        z
    }
}

impl std::ops::Div for Complex {
    type Output = Self;

    fn div(self, other: Self) -> Self::Output {
        let mut z = self;
        z.div_cx(other);
        z
    }
}

impl std::ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let mut z = self;
        z.mul_real(-1.0);
        z
    }
}

impl From<[f64; 2]> for Complex {
    fn from(a: [f64; 2]) -> Complex {
        Complex::rect(a[0], a[1])
    }
}

impl Into<[f64; 2]> for Complex {
    fn into(self) -> [f64; 2] {
        [self.re, self.im]
    }
}

/*
Fixed-format rendering: five decimals for each part, the imaginary
part's sign set off as an operator, and a leading space when the real
part is non-negative so sign columns line up in tabular output.
Non-finite parts fall through to the default float rendering.
*/
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:.5} {} {:.5} i",
            if self.re >= 0.0 { " " } else { "" },
            self.re,
            if self.im < 0.0 { '-' } else { '+' },
            self.im.abs()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const TOL: f64 = 1.0e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOL
    }

    fn assert_in_range(z: &Complex) {
        assert!(
            -PI < z.arg() && z.arg() <= PI,
            "angle {} out of (-pi, pi]",
            z.arg()
        );
    }

    #[test]
    fn rect_polar_round_trip() {
        let pts = [
            (1.0, 0.0),
            (0.0, 1.0),
            (-3.5, 2.25),
            (1.0e-12, -4.0),
            (1.0e100, 1.0e100),
            (-0.001, -0.002),
        ];
        for &(r, i) in pts.iter() {
            let z = Complex::rect(r, i);
            let w = Complex::polar(z.mag(), z.arg());
            assert!(
                (w.re() - r).abs() <= TOL * r.abs().max(1.0),
                "({}, {}) came back as ({}, {})",
                r, i, w.re(), w.im()
            );
            assert!((w.im() - i).abs() <= TOL * i.abs().max(1.0));
        }

        // Angle of zero is conventionally zero.
        let zero = Complex::rect(0.0, 0.0);
        assert_eq!(zero.arg(), 0.0);
        assert_eq!(zero.mag(), 0.0);
    }

    #[test]
    fn polar_angle_normalized() {
        // Three quarters of the way around, four times over.
        let mut z = Complex::polar(2.0, 0.75 * PI);
        assert_in_range(&z);
        for _ in 0..4 {
            z.mul_polar(1.0, 0.75 * PI);
            assert_in_range(&z);
        }

        // Out-of-range at construction.
        let w = Complex::polar(1.0, 5.0 * PI);
        assert_in_range(&w);
        assert!(close(w.re(), -1.0));

        let mut v = Complex::rect(1.0, 1.0);
        v.pow(3.0, 0.0);
        assert_in_range(&v);
        v.add_polar(2.0, -0.5);
        assert_in_range(&v);
    }

    #[test]
    fn additive_identity() {
        let mut z = Complex::rect(-2.5, 7.125);
        z.add(0.0, 0.0);
        assert_eq!(z.re(), -2.5);
        assert_eq!(z.im(), 7.125);
    }

    #[test]
    fn multiplicative_identity() {
        let mut z = Complex::rect(-2.5, 7.125);
        z.mul(1.0, 0.0);
        assert!(close(z.re(), -2.5));
        assert!(close(z.im(), 7.125));
    }

    #[test]
    fn mul_div_inverse() {
        let zs = [
            Complex::rect(3.0, 4.0),
            Complex::rect(-0.5, 0.25),
            Complex::polar(2.0, 1.0),
        ];
        for &w in zs.iter() {
            let mut z = Complex::rect(1.5, -2.5);
            z.mul_cx(w);
            z.div_cx(w);
            assert!(close(z.re(), 1.5));
            assert!(close(z.im(), -2.5));
        }
    }

    #[test]
    fn conjugate_division() {
        // (1 + 2i) / (3 + 4i) = (0.44, 0.08)
        let mut z = Complex::rect(1.0, 2.0);
        z.div(3.0, 4.0);
        assert!(close(z.re(), 0.44));
        assert!(close(z.im(), 0.08));

        let mut w = Complex::rect(1.0, 2.0);
        w.div_cx(Complex::rect(3.0, 4.0));
        assert!(close(w.re(), 0.44));
        assert!(close(w.im(), 0.08));
    }

    #[test]
    fn pow_squares_two() {
        let mut z = Complex::new(2.0, 0.0);
        z.pow(2.0, 0.0);
        assert!(close(z.mag(), 4.0));
        assert!(close(z.arg(), 0.0));
        assert!(close(z.re(), 4.0));
        assert!(close(z.im(), 0.0));
    }

    #[test]
    fn scalar_forms_match_pair_forms() {
        let mut a = Complex::rect(2.0, -3.0);
        let mut b = a;
        a.add_real(1.5);
        b.add(1.5, 0.0);
        assert_eq!(a, b);

        let mut a = Complex::rect(2.0, -3.0);
        let mut b = a;
        a.sub_real(0.5);
        b.sub(0.5, 0.0);
        assert_eq!(a, b);

        let mut a = Complex::rect(2.0, -3.0);
        a.mul_real(2.0);
        assert!(close(a.re(), 4.0));
        assert!(close(a.im(), -6.0));

        let mut a = Complex::rect(2.0, -3.0);
        a.div_real(2.0);
        assert!(close(a.re(), 1.0));
        assert!(close(a.im(), -1.5));
    }

    #[test]
    fn operators_match_mutators() {
        let a = Complex::rect(1.5, -0.5);
        let b = Complex::rect(-2.0, 3.0);

        let mut m = a;
        m.add_cx(b);
        assert_eq!(a + b, m);

        let mut m = a;
        m.sub_cx(b);
        assert_eq!(a - b, m);

        let mut m = a;
        m.mul_cx(b);
        assert_eq!(a * b, m);

        let mut m = a;
        m.div_cx(b);
        assert_eq!(a / b, m);

        let n = -a;
        assert!(close(n.re(), -1.5));
        assert!(close(n.im(), 0.5));
    }

    #[test]
    fn division_by_zero_does_not_panic() {
        let mut z = Complex::rect(1.0, 2.0);
        z.div(0.0, 0.0);
        assert!(!z.re().is_finite());
        assert!(!z.im().is_finite());

        let mut w = Complex::rect(1.0, 2.0);
        w.div_cx(Complex::rect(0.0, 0.0));
        assert!(!w.mag().is_finite() || w.mag().is_nan());

        // NaN keeps flowing, both through arithmetic and Display.
        w.add(1.0, 1.0);
        let s = format!("{}", w);
        assert!(s.contains("NaN") || s.contains("inf"));
    }

    #[test]
    fn display_format() {
        assert_eq!(
            format!("{}", Complex::new(3.0, -2.0)),
            " 3.00000 - 2.00000 i"
        );
        assert_eq!(
            format!("{}", Complex::new(-1.0, 0.0)),
            "-1.00000 + 0.00000 i"
        );
        assert_eq!(
            format!("{}", Complex::new(0.0, 0.125)),
            " 0.00000 + 0.12500 i"
        );
    }

    #[test]
    fn serde_round_trip() {
        #[derive(Serialize, Deserialize)]
        struct Pair {
            z: Complex,
            w: Complex,
        }

        let p = Pair {
            z: Complex::rect(-3.5, 2.25),
            w: Complex::polar(2.0, 1.0),
        };

        let toml_string = toml::to_string(&p).unwrap();
        let q: Pair = toml::from_str(&toml_string).unwrap();

        // Rect-constructed values come back bit-identical; the decoded
        // polar pair is re-derived from the Cartesian one, so the
        // polar-constructed value only matches within tolerance.
        assert_eq!(p.z, q.z);
        assert!(close(p.w.re(), q.w.re()));
        assert!(close(p.w.im(), q.w.im()));
        assert!(close(p.w.mag(), q.w.mag()));
        assert!(close(p.w.arg(), q.w.arg()));
        assert_in_range(&q.z);
        assert_in_range(&q.w);
    }
}
