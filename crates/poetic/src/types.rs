//! # Common Types

/// A vocabulary id.
///
/// `0` is reserved for padding and unknown words.
pub type WordId = u32;

/// The reserved id substituted for any word absent from the vocabulary.
pub const UNKNOWN_ID: WordId = 0;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}
