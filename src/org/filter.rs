use std::collections::HashSet;

use super::graph::{OrgGraph, OrgNode};

/// Active predicates are conjunctive: a node must satisfy every one of
/// them to match. `department` is an exact match, `status` a
/// case-insensitive substring, the free-text query a case-insensitive
/// substring over name/title/department/id/type/manager name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrgFilter {
    pub query: String,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl OrgFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.department.is_some() || self.status.is_some()
    }
}

/// Computes the matching id set, expanded with every ancestor of every
/// match so a matched leaf's reporting chain stays navigable. With no
/// active predicate the whole node set is visible.
pub fn visible_set(graph: &OrgGraph, filter: &OrgFilter) -> HashSet<String> {
    if !filter.is_active() {
        return graph.node_by_id.keys().cloned().collect();
    }

    let query = filter.query.trim().to_lowercase();
    let status = filter.status.as_deref().map(str::to_lowercase);

    let mut visible = HashSet::new();
    for node in graph.node_by_id.values() {
        if !query.is_empty() && !matches_query(node, &query) {
            continue;
        }
        if let Some(department) = filter.department.as_deref()
            && node.department != department
        {
            continue;
        }
        if let Some(status) = status.as_deref()
            && !node.status.to_lowercase().contains(status)
        {
            continue;
        }
        visible.insert(node.id.clone());
    }

    let matched = visible.iter().cloned().collect::<Vec<_>>();
    for id in matched {
        for ancestor in graph.ancestors(&id) {
            visible.insert(ancestor);
        }
    }

    visible
}

fn matches_query(node: &OrgNode, query: &str) -> bool {
    [
        node.name.as_str(),
        node.title.as_str(),
        node.department.as_str(),
        node.id.as_str(),
        node.employee_type.as_str(),
        node.manager_name.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}
