//! Hash maps for view bookkeeping, such as the recycler's table of held
//! view tags.
//!
//! `rustc-hash` is the default hasher; the `std-hash` feature switches to
//! the standard library's.

#[cfg(feature = "std-hash")]
pub mod map {
    pub use std::collections::HashMap;
}

#[cfg(not(feature = "std-hash"))]
pub mod map {
    pub use rustc_hash::FxHashMap as HashMap;
}

#[cfg(test)]
mod tests {
    use super::map::HashMap;

    #[test]
    fn map_starts_empty_and_keys_by_view_id() {
        let mut map: HashMap<usize, &str> = HashMap::default();
        assert!(map.is_empty());
        map.insert(3, "three");
        assert_eq!(map.get(&3), Some(&"three"));
    }
}
