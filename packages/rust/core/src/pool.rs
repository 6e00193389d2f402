//! Deterministic phrase-pool selection.
//!
//! Every fragment in a generated ebook comes from picking one entry out of a
//! fixed pool by an integer offset. Offsets wrap around the pool in both
//! directions, so any `i64` is a valid offset.

/// Map an offset onto `0..len`. Negative offsets wrap from the end.
fn wrap_offset(offset: i64, len: usize) -> usize {
    offset.rem_euclid(len as i64) as usize
}

/// Pick one entry from a fixed-size pool.
///
/// Empty pools are rejected at compile time.
pub fn pick<T, const N: usize>(pool: &[T; N], offset: i64) -> &T {
    const { assert!(N > 0, "phrase pool must not be empty") };
    &pool[wrap_offset(offset, N)]
}

/// Join the non-empty parts with single spaces.
pub fn paragraph<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref())
        .filter(|part: &&str| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const POOL: [&str; 4] = ["a", "b", "c", "d"];

    #[test]
    fn pick_wraps_positive_offsets() {
        assert_eq!(*pick(&POOL, 0), "a");
        assert_eq!(*pick(&POOL, 3), "d");
        assert_eq!(*pick(&POOL, 4), "a");
        assert_eq!(*pick(&POOL, 1_000_001), "b");
    }

    #[test]
    fn pick_wraps_negative_offsets() {
        assert_eq!(*pick(&POOL, -1), "d");
        assert_eq!(*pick(&POOL, -4), "a");
        assert_eq!(*pick(&POOL, -5), "d");
    }

    fn assert_periodic<const N: usize>() {
        let pool: [usize; N] = std::array::from_fn(|i| i);
        let offsets = (-50i64..50).chain([i64::MIN / 2, i64::MAX / 2]);
        for offset in offsets {
            let picked = *pick(&pool, offset);
            assert!(picked < N, "N={N} offset={offset}");
            assert_eq!(picked, *pick(&pool, offset + N as i64), "N={N} offset={offset}");
            assert_eq!(picked, *pick(&pool, offset - N as i64), "N={N} offset={offset}");
        }
    }

    #[test]
    fn pick_is_periodic_and_in_range() {
        assert_periodic::<1>();
        assert_periodic::<2>();
        assert_periodic::<4>();
        assert_periodic::<6>();
        assert_periodic::<7>();
        assert_periodic::<8>();
    }

    #[test]
    fn single_entry_pool_always_picks_it() {
        let only = ["only"];
        assert_eq!(*pick(&only, i64::MIN / 2), "only");
        assert_eq!(*pick(&only, -1), "only");
        assert_eq!(*pick(&only, 99), "only");
    }

    #[test]
    fn paragraph_skips_empty_parts() {
        assert_eq!(paragraph(&["Next move:", "", "Ship it."]), "Next move: Ship it.");
        assert_eq!(paragraph::<&str>(&[]), "");
    }
}
