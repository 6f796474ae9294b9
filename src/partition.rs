/// Splits `items` into exactly `chunks` contiguous slices.
///
/// Sizes differ by at most one: with `base = len / chunks` and
/// `extra = len % chunks`, the first `extra` slices hold `base + 1` items and
/// the rest hold `base`. Order is preserved, so concatenating the slices in
/// index order gives back `items`. When `chunks` exceeds `items.len()` the
/// trailing slices are empty. A `chunks` of zero is treated as one.
pub fn partition<T>(items: &[T], chunks: usize) -> Vec<&[T]> {
    let chunks = chunks.max(1);
    let base = items.len() / chunks;
    let extra = items.len() % chunks;
    let mut out = Vec::with_capacity(chunks);
    let mut start = 0;
    for i in 0..chunks {
        let len = base + usize::from(i < extra);
        out.push(&items[start..start + len]);
        start += len;
    }
    out
}
