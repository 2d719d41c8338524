use log::trace;

/// Returns `a + b`, wrapping around on overflow.
pub fn add(a: i64, b: i64) -> i64 {
    let sum = a.wrapping_add(b);
    trace!("add({}, {}) = {}", a, b, sum);
    sum
}

/// Returns `x * y`, wrapping around on overflow.
pub fn multiply(x: i64, y: i64) -> i64 {
    let product = x.wrapping_mul(y);
    trace!("multiply({}, {}) = {}", x, y, product);
    product
}
