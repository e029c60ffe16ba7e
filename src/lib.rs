//! Solve crossword puzzles with constraint propagation and backtracking search

#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod image;
pub mod puzzle;
pub mod solve;

pub(crate) type HashMap<K, V> = ahash::AHashMap<K, V>;
pub(crate) type HashSet<T> = ahash::AHashSet<T>;
pub(crate) type LinkedHashSet<T> = linked_hash_set::LinkedHashSet<T, ahash::RandomState>;
