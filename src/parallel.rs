//! Optional data parallelism, switched by the `rayon` cargo feature.

cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        /// Applies `f` to every item, in parallel, keeping input order.
        pub fn map_in_order<T, U, F>(items: &[T], f: F) -> Vec<U>
            where T: Sync, U: Send, F: Fn(&T) -> U + Sync + Send
        {
            items.par_iter().map(f).collect()
        }

    } else {
        /// Applies `f` to every item, keeping input order.
        pub fn map_in_order<T, U, F>(items: &[T], f: F) -> Vec<U>
            where F: Fn(&T) -> U
        {
            items.iter().map(f).collect()
        }
    }
}
