//! `reducer_treap` implements an ordered associative container, keyed by a
//! comparable type, that caches a user-supplied monoid fold over every
//! contiguous key range.
//!
//! The container is a sequence of `(key, value)` pairs in key order. In
//! addition to ordinary lookup/insert/erase, every subtree caches a
//! reduction of its entries, so that [`Treap::prefix_lt`] — "fold every
//! entry whose key is strictly less than `q`" — runs in expected
//! logarithmic time rather than scanning the whole tree.
//!
//! In order to specify what gets folded, the user supplies a type that
//! implements the [`reducer::Reducer`] trait, defined in the [`reducer`]
//! module. A few example reducers ([`reducer::Concat`], [`reducer::LenSum`],
//! [`reducer::Count`]) are provided for common cases and for use in tests.
//!
//! Balance comes from a **treap**: the tree is simultaneously ordered by
//! key (binary search tree) and heap-ordered by an independently sampled
//! priority per node, giving expected-logarithmic depth with no explicit
//! rebalancing metadata. The [`node`] module contains the pure recursive
//! functions — `insert`, `erase`, `find`, `split`, `merge`, `prefix_lt`,
//! `for_all`, `validate` — that maintain both invariants together with the
//! cached reductions; [`tree::Treap`] is the small facade that owns the
//! root handle and the running size counter and exposes these as methods.
//!
//! This crate only ever has one writer at a time and no positional cursors:
//! every operation takes a fresh owning handle and returns a fresh one, so
//! there is nothing to invalidate across calls.

pub mod debug;
pub mod node;
pub mod reducer;
pub mod tree;

pub use tree::Treap;
