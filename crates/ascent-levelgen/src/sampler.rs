use std::collections::BTreeSet;

use ascent_core::random::RandomSource;

/// Pick `count` distinct indices from `[0, population)` that are not in
/// `excluded`, uniformly without replacement.
///
/// Asking for more than is available returns every available index.
pub fn sample_indices<R: RandomSource + ?Sized>(
    rng: &mut R,
    population: usize,
    count: usize,
    excluded: &BTreeSet<usize>,
) -> BTreeSet<usize> {
    let mut available: Vec<usize> = (0..population).filter(|i| !excluded.contains(i)).collect();
    let take = count.min(available.len());

    // Partial Fisher-Yates: the first `take` slots end up holding the sample.
    for i in 0..take {
        let j = i + rng.next_index(available.len() - i);
        available.swap(i, j);
    }

    available.truncate(take);
    available.into_iter().collect()
}

/// Split `total` items into counts proportional to `weights`, flooring each
/// share and giving the remainder to the last weight.
///
/// A zero weight total gives every share to the last weight.
pub fn split_by_weights<const N: usize>(total: usize, weights: [f32; N]) -> [usize; N] {
    let mut counts = [0; N];
    if N == 0 {
        return counts;
    }

    let weight_total: f32 = weights.iter().sum();
    let mut assigned = 0;
    if weight_total > 0.0 {
        for (count, weight) in counts.iter_mut().zip(weights).take(N - 1) {
            let share = ((weight / weight_total) * total as f32) as usize;
            *count = share.min(total - assigned);
            assigned += *count;
        }
    }
    counts[N - 1] = total - assigned;
    counts
}
