use std::collections::{HashSet, VecDeque};

use super::graph::OrgGraph;

/// Full descendant closure of `focus_id`, the focus node included.
/// Returns `None` when the id is unknown, which callers treat as "no
/// focus". The seen-set revisit guard is the defense-in-depth cycle
/// check on top of the builder's structural guarantee.
pub fn descendant_closure(graph: &OrgGraph, focus_id: &str) -> Option<HashSet<String>> {
    if !graph.node_by_id.contains_key(focus_id) {
        return None;
    }

    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(focus_id.to_string());
    queue.push_back(focus_id.to_string());

    while let Some(current) = queue.pop_front() {
        for child in graph.children(&current) {
            if seen.insert(child.clone()) {
                queue.push_back(child.clone());
            }
        }
    }

    Some(seen)
}

/// Restricts `visible` to the focus branch and returns the start set for
/// the leveler: the focus node alone, or all roots when no usable focus
/// was supplied. An empty intersection falls back to the focus node
/// itself rather than an empty view.
pub fn apply_focus(
    graph: &OrgGraph,
    visible: &mut HashSet<String>,
    focus_id: Option<&str>,
) -> Vec<String> {
    let Some(focus_id) = focus_id else {
        return graph.roots.clone();
    };
    let Some(closure) = descendant_closure(graph, focus_id) else {
        return graph.roots.clone();
    };

    visible.retain(|id| closure.contains(id));
    if visible.is_empty() {
        visible.insert(focus_id.to_string());
    }

    vec![focus_id.to_string()]
}
