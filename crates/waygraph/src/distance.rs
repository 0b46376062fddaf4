/// Manhattan (L1) distance between two grid positions.
#[inline]
pub fn manhattan(a: [i32; 2], b: [i32; 2]) -> i32 {
    (a[0] - b[0]).abs() + (a[1] - b[1]).abs()
}

/// Chebyshev (L∞) distance between two grid positions.
#[inline]
pub fn chebyshev(a: [i32; 2], b: [i32; 2]) -> i32 {
    (a[0] - b[0]).abs().max((a[1] - b[1]).abs())
}
