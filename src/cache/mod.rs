//! Generic bounded caching primitives

pub mod lru;

pub use lru::BoundedLruCache;
