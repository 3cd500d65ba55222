#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use rayon::prelude::*;

/// Inputs at or below this size are mapped sequentially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Maps `f` over `collection`, preserving order.
///
/// Runs on rayon when the `parallel` feature is on and the collection is
/// larger than `threshold`. Both paths produce the same output.
#[inline]
pub fn map<T, R, F>(collection: &[T], threshold: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> R + Sync + Send,
{
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    {
        if collection.len() > threshold {
            return collection
                .par_iter()
                .enumerate()
                .map(|(i, item)| f(i, item))
                .collect();
        }
    }
    #[cfg(any(not(feature = "parallel"), target_arch = "wasm32"))]
    let _ = threshold;

    collection.iter().enumerate().map(|(i, item)| f(i, item)).collect()
}
