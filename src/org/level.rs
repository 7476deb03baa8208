use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use super::graph::OrgGraph;

/// Leveled view of the visible part of the forest. `levels[depth]` and
/// `ordered` hold canonical ids in breadth-first order; the truncation
/// flags report which bound, if any, cut the traversal short.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VisibleOrg {
    pub levels: Vec<Vec<String>>,
    pub ordered: Vec<String>,
    pub visible_count: usize,
    pub truncated_by_node_limit: bool,
    pub truncated_by_depth_limit: bool,
    pub total_node_count: usize,
}

/// Bounded breadth-first leveling from `start`. A node outside the
/// visible set is not emitted but its children are still traversed, so
/// matched descendants of hidden managers keep their true depth.
/// Hitting `max_nodes` stops the traversal immediately; the partial
/// result stays consistent, just incomplete.
pub fn level_visible(
    graph: &OrgGraph,
    visible: &HashSet<String>,
    start: &[String],
    max_nodes: usize,
    max_depth: usize,
) -> VisibleOrg {
    let mut out = VisibleOrg {
        total_node_count: graph.node_count(),
        ..Default::default()
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, usize)> = start
        .iter()
        .filter(|id| graph.node_by_id.contains_key(id.as_str()))
        .map(|id| (id.as_str(), 0))
        .collect();

    while let Some((id, level)) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if level > max_depth {
            out.truncated_by_depth_limit = true;
            continue;
        }

        if visible.contains(id) {
            if out.ordered.len() >= max_nodes {
                out.truncated_by_node_limit = true;
                break;
            }
            if out.levels.len() <= level {
                out.levels.resize_with(level + 1, Vec::new);
            }
            out.levels[level].push(id.to_string());
            out.ordered.push(id.to_string());
        }

        if level + 1 > max_depth {
            if !graph.children(id).is_empty() {
                out.truncated_by_depth_limit = true;
            }
            continue;
        }
        for child in graph.children(id) {
            queue.push_back((child.as_str(), level + 1));
        }
    }

    out.visible_count = out.ordered.len();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::graph::{OrgNode, build_org_graph};

    fn node(id: &str, name: &str, manager_id: Option<&str>) -> OrgNode {
        OrgNode {
            id: id.to_string(),
            name: name.to_string(),
            title: String::new(),
            department: "General".to_string(),
            status: "Active".to_string(),
            manager_name: String::new(),
            manager_id: manager_id.map(str::to_string),
            raw_manager_id: None,
            email: String::new(),
            phone: String::new(),
            location: "Remote".to_string(),
            start_date: String::new(),
            employee_type: "Employee".to_string(),
        }
    }

    fn chain_graph() -> OrgGraph {
        build_org_graph(vec![
            node("E1", "CEO", None),
            node("E2", "VP", Some("E1")),
            node("E3", "Eng", Some("E2")),
        ])
    }

    fn all_visible(graph: &OrgGraph) -> HashSet<String> {
        graph.node_by_id.keys().cloned().collect()
    }

    #[test]
    fn levels_follow_depth_from_roots() {
        let graph = chain_graph();
        let out = level_visible(&graph, &all_visible(&graph), &graph.roots, 10, 10);

        assert_eq!(
            out.levels,
            vec![
                vec!["E1".to_string()],
                vec!["E2".to_string()],
                vec!["E3".to_string()],
            ]
        );
        assert_eq!(out.visible_count, 3);
        assert_eq!(out.total_node_count, 3);
        assert!(!out.truncated_by_node_limit);
        assert!(!out.truncated_by_depth_limit);
    }

    #[test]
    fn node_limit_stops_traversal() {
        let graph = chain_graph();
        let out = level_visible(&graph, &all_visible(&graph), &graph.roots, 2, 10);

        assert_eq!(out.ordered, vec!["E1".to_string(), "E2".to_string()]);
        assert!(out.truncated_by_node_limit);
        assert!(!out.truncated_by_depth_limit);
    }

    #[test]
    fn depth_limit_cuts_and_flags() {
        let graph = chain_graph();
        let out = level_visible(&graph, &all_visible(&graph), &graph.roots, 10, 1);

        assert_eq!(out.ordered, vec!["E1".to_string(), "E2".to_string()]);
        assert!(out.truncated_by_depth_limit);
        assert!(!out.truncated_by_node_limit);
    }

    #[test]
    fn hidden_parent_does_not_hide_descendants() {
        let graph = chain_graph();
        let visible = ["E1", "E3"].iter().map(|id| id.to_string()).collect();
        let out = level_visible(&graph, &visible, &graph.roots, 10, 10);

        // E2 is skipped but traversal still descends through it, so E3
        // keeps its depth-2 level.
        assert_eq!(out.ordered, vec!["E1".to_string(), "E3".to_string()]);
        assert_eq!(out.levels[1], Vec::<String>::new());
        assert_eq!(out.levels[2], vec!["E3".to_string()]);
    }

    #[test]
    fn focused_start_levels_from_focus() {
        let graph = chain_graph();
        let visible = ["E2", "E3"].iter().map(|id| id.to_string()).collect();
        let out = level_visible(&graph, &visible, &["E2".to_string()], 10, 10);

        assert_eq!(
            out.levels,
            vec![vec!["E2".to_string()], vec!["E3".to_string()]]
        );
    }

    #[test]
    fn sibling_order_follows_presorted_children() {
        let graph = build_org_graph(vec![
            node("r", "Root", None),
            node("b", "Beta", Some("r")),
            node("a", "Alpha", Some("r")),
            node("c", "alpha", Some("r")),
        ]);
        let out = level_visible(&graph, &all_visible(&graph), &graph.roots, 10, 10);

        // Case-insensitive name order, id as tiebreak.
        assert_eq!(
            out.levels[1],
            vec!["a".to_string(), "c".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn unknown_start_ids_are_ignored() {
        let graph = chain_graph();
        let out = level_visible(
            &graph,
            &all_visible(&graph),
            &["ghost".to_string()],
            10,
            10,
        );

        assert!(out.ordered.is_empty());
        assert_eq!(out.visible_count, 0);
    }
}
