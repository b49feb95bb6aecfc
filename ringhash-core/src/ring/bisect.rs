/// Locates the insertion offset for `value` in an ascending, non-empty slice.
///
/// Returns `0` when `value` sits below the first element and `sorted.len()`
/// when it is greater than or equal to the last one. The latter is out of
/// bounds: callers wrap it with `offset % sorted.len()` before indexing.
/// Between those bounds this is the leftmost index whose element is
/// `>= value`.
///
/// # Panics
///
/// Panics if `sorted` is empty.
///
/// # Examples
///
/// ```
/// use ringhash_core::bisect_left;
///
/// let positions = [10, 20, 30];
/// assert_eq!(bisect_left(&positions, 5), 0);
/// assert_eq!(bisect_left(&positions, 15), 1);
/// assert_eq!(bisect_left(&positions, 20), 1);
/// assert_eq!(bisect_left(&positions, 30), 3);
/// ```
pub fn bisect_left(sorted: &[u32], value: u32) -> usize {
    let len = sorted.len();
    let mut low = 0;
    let mut high = len - 1;

    if value < sorted[low] {
        return 0;
    }
    if value >= sorted[high] {
        return len;
    }

    while low < high {
        let middle = low + (high - low) / 2;
        if sorted[middle] < value {
            low = middle + 1;
        } else {
            high = middle;
        }
    }
    high
}
