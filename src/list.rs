use rand::Rng;

/// Draws `size` values uniformly from `min_val..=max_val`.
pub fn generate<R: Rng>(rng: &mut R, size: usize, min_val: i64, max_val: i64) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(min_val..=max_val)).collect()
}

/// The smallest and largest value, used to scale bars.
pub fn bounds(list: &[i64]) -> Option<(i64, i64)> {
    let min = list.iter().min()?;
    let max = list.iter().max()?;
    Some((*min, *max))
}
