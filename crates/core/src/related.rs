//! Random sampling for the related-video rail.

use rand::seq::SliceRandom;

/// Pick a bounded, randomly ordered subset of `candidates`, excluding the
/// entry whose slug equals `exclude_slug` (the video currently playing).
///
/// Each call shuffles independently, so repeated views of the same video
/// surface different recommendations. The candidate pool handed in is
/// already capped by the repository query
/// ([`RELATED_POOL_LIMIT`](crate::paging::RELATED_POOL_LIMIT)), so for very
/// large boards the sample is uniform over that pool rather than the whole
/// board.
pub fn sample_related<T, F>(
    candidates: Vec<T>,
    exclude_slug: &str,
    max_count: usize,
    slug_of: F,
) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut pool: Vec<T> = candidates
        .into_iter()
        .filter(|c| slug_of(c) != exclude_slug)
        .collect();
    pool.shuffle(&mut rand::rng());
    pool.truncate(max_count);
    pool
}
