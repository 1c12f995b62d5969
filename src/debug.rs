//! An optional debug printer producing a parenthesised, human-readable
//! rendering of a tree, for interactive debugging. Not a stable format:
//! exact whitespace is not a contract, only that the output faithfully
//! represents the logical tree to a developer reading it.
//!
//! ```
//! use reducer_treap::Treap;
//! use reducer_treap::reducer::Count;
//! use reducer_treap::debug::fmt_tree;
//!
//! let mut tree: Treap<i32, &str, Count> = Treap::new();
//! tree.insert(1, "a");
//! let rendered = fmt_tree(&tree);
//! assert!(rendered.contains("1 \"a\""));
//! ```

use crate::node::Handle;
use crate::reducer::Reducer;
use crate::tree::Treap;
use std::fmt::Write as _;

/// Renders `tree` as `(key value priority reduced left right)`, with `_`
/// standing in for a null child.
pub fn fmt_tree<K, V, R>(tree: &Treap<K, V, R>) -> String
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
    R: Reducer<K, V> + std::fmt::Debug,
{
    let mut out = String::new();
    fmt_handle(tree.root_for_debug(), &mut out);
    out
}

fn fmt_handle<K, V, R>(handle: &Handle<K, V, R>, out: &mut String)
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
    R: Reducer<K, V> + std::fmt::Debug,
{
    match handle {
        None => {
            out.push('_');
        }
        Some(node) => {
            write!(
                out,
                "({:?} {:?} {} {:?} ",
                node.key, node.value, node.priority, node.reduced
            )
            .expect("writing to a String cannot fail");
            fmt_handle(&node.left, out);
            out.push(' ');
            fmt_handle(&node.right, out);
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::Count;

    #[test]
    fn renders_null_children_as_underscore() {
        let tree: Treap<i32, (), Count> = Treap::new();
        assert_eq!(fmt_tree(&tree), "_");
    }

    #[test]
    fn renders_a_populated_node() {
        let mut tree: Treap<i32, &str, Count> = Treap::new();
        tree.insert(1, "a");
        let rendered = fmt_tree(&tree);
        assert!(rendered.starts_with('('));
        assert!(rendered.ends_with(')'));
        assert!(rendered.contains("1 \"a\""));
        assert!(rendered.contains('_'));
    }
}
