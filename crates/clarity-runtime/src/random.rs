use rand::Rng;

/// Uniform integer in an inclusive range (§4.4 "Random"). Per the Open
/// Question in spec.md §9, `max < min` returns `min` rather than
/// erroring — "documented behavior, not an error" — preserved here
/// unchanged.
pub(crate) fn random_int(min: i64, max: i64) -> i64 {
    if max < min {
        return min;
    }
    rand::rng().random_range(min..=max)
}

pub(crate) fn random_float() -> f64 {
    rand::rng().random_range(0.0..1.0)
}
