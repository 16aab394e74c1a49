/// Helper function to use JavaScript's Math.random, returns a value in `0..bound` (`0` when
/// `bound` is `0`).
pub(crate) fn js_random_below(bound: u32) -> u32 {
    use js_sys::Math::random;
    ((bound as f64) * random()).floor().min(bound.saturating_sub(1) as f64) as u32
}
