use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use super::graph::OrgNode;

/// Fills in `manager_id` for every node: the raw manager-id field wins when
/// it names a known node, otherwise the manager name is looked up in a
/// case-insensitive, whitespace-trimmed name index. Nodes that resolve to
/// nothing stay roots. Single pass over pre-built indices.
pub fn resolve_managers(nodes: &mut [OrgNode]) {
    let known_ids = nodes
        .iter()
        .map(|node| node.id.clone())
        .collect::<HashSet<_>>();

    let mut id_by_name: HashMap<String, String> = HashMap::with_capacity(nodes.len());
    for node in nodes.iter() {
        let key = normalize_name(&node.name);
        if key.is_empty() {
            continue;
        }
        if let Some(existing) = id_by_name.get(&key) {
            // First-registered id wins; later duplicates may resolve
            // incorrectly but the build still yields a valid forest.
            warn!(
                name = %node.name,
                kept = %existing,
                shadowed = %node.id,
                "duplicate normalized name in name index"
            );
        } else {
            id_by_name.insert(key, node.id.clone());
        }
    }

    for node in nodes.iter_mut() {
        if let Some(raw) = node.raw_manager_id.as_deref()
            && raw != node.id
            && known_ids.contains(raw)
        {
            node.manager_id = Some(raw.to_string());
            continue;
        }

        let key = normalize_name(&node.manager_name);
        if key.is_empty() {
            node.manager_id = None;
            continue;
        }

        match id_by_name.get(&key) {
            Some(manager) if *manager != node.id => {
                debug!(node = %node.id, manager = %manager, "manager resolved via name fallback");
                node.manager_id = Some(manager.clone());
            }
            _ => node.manager_id = None,
        }
    }
}

pub(super) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
