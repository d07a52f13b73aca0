/*!
Poking at the `Complex` surface from the outside.
*/

use cxdual::log;
use cxdual::Complex;

fn main() {
    let a = Complex::rect(1.0, 2.0);
    let b = Complex::rect(3.0, 4.0);
    let c = Complex::polar(2.0, std::f64::consts::FRAC_PI_4);

    println!("a = {}    {:?}", a, &a);
    println!("b = {}    {:?}", b, &b);
    println!("c = {}    {:?}", c, &c);

    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / b = {}", a / b);
    println!("   -c = {}", -c);

    let mut z = a;
    z.mul_polar(2.0, std::f64::consts::FRAC_PI_2);
    println!("a rotated a quarter turn and doubled = {}", z);

    let mut w = Complex::new(2.0, 0.0);
    w.pow(2.0, 0.0);
    println!("2^2 = {}", w);

    println!("ln(-1) = {}", log::ln_real(-1.0));
    println!(
        "log_2(8) = {}",
        log::log_cx(Complex::new(2.0, 0.0), Complex::new(8.0, 0.0))
    );

    let mut d = Complex::rect(1.0, 1.0);
    d.div(0.0, 0.0);
    println!("(1 + i) / 0 = {}", d);
}
