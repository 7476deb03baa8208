use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Canonical employee record after normalization. `manager_id` is absent
/// until the resolver has run; nodes whose manager never resolves become
/// roots of the forest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrgNode {
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    pub status: String,
    pub manager_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    #[serde(skip)]
    pub raw_manager_id: Option<String>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub start_date: String,
    pub employee_type: String,
}

/// Derived, immutable per build. Children and roots are kept as canonical
/// ids, sorted by name; callers resolve them through `node_by_id`.
#[derive(Clone, Debug, Default)]
pub struct OrgGraph {
    pub node_by_id: HashMap<String, OrgNode>,
    pub children_by_id: HashMap<String, Vec<String>>,
    pub parent_by_id: HashMap<String, String>,
    pub roots: Vec<String>,
}

impl OrgGraph {
    pub fn node_count(&self) -> usize {
        self.node_by_id.len()
    }

    pub fn node(&self, id: &str) -> Option<&OrgNode> {
        self.node_by_id.get(id)
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.children_by_id.get(id).map_or(&[], Vec::as_slice)
    }

    pub fn direct_report_count(&self, id: &str) -> usize {
        self.children(id).len()
    }

    /// Reporting chain from `id` up to its root, nearest manager first.
    /// The seen-set guard makes the walk terminate even on a graph that
    /// somehow carries a parent loop.
    pub fn ancestors(&self, id: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = id;

        while let Some(parent) = self.parent_by_id.get(cursor) {
            if !seen.insert(parent.as_str()) {
                break;
            }
            chain.push(parent.clone());
            cursor = parent;
        }

        chain
    }
}

pub fn build_org_graph(nodes: Vec<OrgNode>) -> OrgGraph {
    let mut node_by_id = HashMap::with_capacity(nodes.len());
    for node in nodes {
        node_by_id.insert(node.id.clone(), node);
    }

    let mut ids = node_by_id.keys().cloned().collect::<Vec<_>>();
    ids.sort();

    let mut parent_by_id: HashMap<String, String> = HashMap::with_capacity(ids.len());
    let mut children_by_id: HashMap<String, Vec<String>> = HashMap::new();
    let mut roots = Vec::new();

    for id in &ids {
        let node = node_by_id.get(id).expect("node exists");
        let manager = node
            .manager_id
            .as_deref()
            .filter(|manager| *manager != id.as_str() && node_by_id.contains_key(*manager))
            .filter(|manager| !creates_cycle(&parent_by_id, id, manager));

        match manager {
            Some(manager) => {
                parent_by_id.insert(id.clone(), manager.to_string());
                children_by_id
                    .entry(manager.to_string())
                    .or_default()
                    .push(id.clone());
            }
            None => roots.push(id.clone()),
        }
    }

    for children in children_by_id.values_mut() {
        sort_by_name(&node_by_id, children);
    }
    sort_by_name(&node_by_id, &mut roots);

    OrgGraph {
        node_by_id,
        children_by_id,
        parent_by_id,
        roots,
    }
}

// A child->manager edge is dropped when the child already sits on the
// manager's reporting chain; the child stays a root and the forest
// invariant holds by construction.
fn creates_cycle(parent_by_id: &HashMap<String, String>, child: &str, manager: &str) -> bool {
    let mut seen = HashSet::new();
    let mut cursor = manager;

    loop {
        if cursor == child {
            return true;
        }
        let Some(parent) = parent_by_id.get(cursor) else {
            return false;
        };
        if !seen.insert(parent.as_str()) {
            return false;
        }
        cursor = parent;
    }
}

fn sort_by_name(node_by_id: &HashMap<String, OrgNode>, ids: &mut [String]) {
    ids.sort_by(|a, b| {
        let a_name = node_by_id.get(a).map(|node| node.name.to_lowercase());
        let b_name = node_by_id.get(b).map(|node| node.name.to_lowercase());
        a_name.cmp(&b_name).then_with(|| a.cmp(b))
    });
}
