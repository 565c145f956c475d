//! Tree walker — depth-first pre-order traversal over a help source.
//!
//! The walker is generic over [`HelpSource`] so the structural (clap) and
//! external (subprocess) acquisition strategies share one traversal and one
//! set of bounds. It uses an explicit frontier instead of native recursion so
//! the depth bound and cycle avoidance stay auditable.

use std::collections::HashSet;

use crate::model::Record;

/// The capability pair a walk needs: capture a node's help text and
/// enumerate its immediate children.
pub trait HelpSource {
    type Node;

    /// Canonical help text for a node. Total: failures come back as annotated
    /// placeholder text, never as an error.
    fn capture(&mut self, node: &mut Self::Node) -> String;

    /// Immediate children as `(token, node)` pairs, in enumeration order.
    /// `help` is the text just captured for this node, so heuristic sources
    /// never have to re-invoke the target. An enumeration failure is an empty
    /// list.
    fn children(&mut self, node: &Self::Node, help: &str) -> Vec<(String, Self::Node)>;
}

/// Walk a command tree from `root`, emitting one [`Record`] per visited node
/// in pre-order (node before its children, children in enumeration order).
///
/// `max_depth` bounds how far below the root the walk descends; `None` leaves
/// it unbounded (structural trees are finite by construction). A path already
/// in the visited set is never entered twice, so adversarial help text cannot
/// loop the walk.
pub fn walk<S: HelpSource>(
    source: &mut S,
    root: S::Node,
    root_path: Vec<String>,
    max_depth: Option<usize>,
) -> Vec<Record> {
    let mut records = Vec::new();
    let mut visited: HashSet<Vec<String>> = HashSet::new();
    // Children are pushed in reverse so they pop in enumeration order.
    let mut frontier: Vec<(S::Node, Vec<String>, usize)> = vec![(root, root_path, 0)];

    while let Some((mut node, path, depth)) = frontier.pop() {
        if !visited.insert(path.clone()) {
            continue;
        }
        log::debug!("visiting: {}", path.join(" "));

        let help = source.capture(&mut node);

        if max_depth.map_or(true, |limit| depth < limit) {
            let children = source.children(&node, &help);
            for (token, child) in children.into_iter().rev() {
                let mut child_path = path.clone();
                child_path.push(token);
                if !visited.contains(&child_path) {
                    frontier.push((child, child_path, depth + 1));
                }
            }
        }

        records.push(Record { path, help });
    }

    records
}
