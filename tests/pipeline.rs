use serde_json::{Value, json};

use orgscope::org::{
    OrgFilter, OrgViewParams, build_org_graph_from_records, build_visible_org, visible_set,
};

fn company_records() -> Vec<Value> {
    vec![
        json!({"employeeId": "E1", "name": "Cora Chief", "title": "CEO", "department": "Exec"}),
        json!({"employeeId": "E2", "name": "Vic Vale", "title": "VP Engineering", "department": "Engineering", "managerId": "E1"}),
        json!({"employeeId": "E3", "name": "Sal Sun", "title": "VP Sales", "department": "Sales", "managerId": "E1"}),
        // Dangling manager id, resolvable through the manager name.
        json!({"employeeId": "E4", "name": "Eve East", "title": "Engineer", "department": "Engineering", "managerId": "E99", "manager": "Vic Vale"}),
        json!({"employeeId": "E5", "name": "Ned North", "title": "Engineer", "department": "Engineering", "manager": "Eve East", "status": "On Leave"}),
        json!({"employeeId": "E6", "name": "Ana Able", "title": "Account Exec", "department": "Sales", "manager": "Sal Sun"}),
        // Unresolvable manager: becomes a second root.
        json!({"employeeId": "E7", "name": "Ora Orphan", "title": "Contractor", "manager": "Nobody Here", "type": "Contractor"}),
        // No usable fields at all.
        json!({}),
    ]
}

#[test]
fn messy_records_build_a_forest() {
    let graph = build_org_graph_from_records(&company_records());

    assert_eq!(graph.node_count(), 8);
    assert_eq!(
        graph.roots,
        vec![
            "E1".to_string(),
            "member-7".to_string(),
            "E7".to_string(),
        ]
    );

    // Name fallback linked E4 under E2 despite the dangling id.
    assert_eq!(graph.parent_by_id.get("E4"), Some(&"E2".to_string()));

    // Forest invariant: every parent walk terminates without revisits.
    for id in graph.node_by_id.keys() {
        let chain = graph.ancestors(id);
        assert!(chain.len() < graph.node_count());
        assert!(!chain.contains(id));
    }

    // Count invariant.
    let child_total: usize = graph.children_by_id.values().map(Vec::len).sum();
    assert_eq!(child_total, graph.node_count() - graph.roots.len());
}

#[test]
fn filter_preserves_reporting_chains_end_to_end() {
    let graph = build_org_graph_from_records(&company_records());
    let visible = visible_set(
        &graph,
        &OrgFilter {
            query: "ned".to_string(),
            ..Default::default()
        },
    );

    for id in ["E5", "E4", "E2", "E1"] {
        assert!(visible.contains(id), "missing {id}");
    }
    assert!(!visible.contains("E3"));
}

#[test]
fn focus_and_filter_compose() {
    let graph = build_org_graph_from_records(&company_records());
    let visible = build_visible_org(
        &graph,
        &OrgViewParams {
            focus_id: Some("E2".to_string()),
            ..Default::default()
        },
    );

    assert_eq!(
        visible.levels,
        vec![
            vec!["E2".to_string()],
            vec!["E4".to_string()],
            vec!["E5".to_string()],
        ]
    );

    // A filter that matches nothing inside the branch still shows the
    // focus node instead of an empty view.
    let visible = build_visible_org(
        &graph,
        &OrgViewParams {
            focus_id: Some("E2".to_string()),
            filter: OrgFilter {
                query: "account exec".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
    );
    assert_eq!(visible.ordered, vec!["E2".to_string()]);
}

#[test]
fn truncation_flags_report_each_bound() {
    let graph = build_org_graph_from_records(&company_records());

    let by_nodes = build_visible_org(
        &graph,
        &OrgViewParams {
            max_nodes: 3,
            ..Default::default()
        },
    );
    assert_eq!(by_nodes.ordered.len(), 3);
    assert!(by_nodes.truncated_by_node_limit);

    let by_depth = build_visible_org(
        &graph,
        &OrgViewParams {
            max_depth: 1,
            ..Default::default()
        },
    );
    assert!(by_depth.truncated_by_depth_limit);
    assert!(!by_depth.ordered.contains(&"E5".to_string()));
}

#[test]
fn two_independent_builds_are_identical() {
    let records = company_records();
    let params = OrgViewParams {
        filter: OrgFilter {
            query: "e".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };

    let first = build_visible_org(&build_org_graph_from_records(&records), &params);
    let second = build_visible_org(&build_org_graph_from_records(&records), &params);

    assert_eq!(first.ordered, second.ordered);
    assert_eq!(first.levels, second.levels);
    assert_eq!(first, second);
}

#[test]
fn spec_chain_scenarios() {
    // The three-node chain from the interface contract.
    let records = vec![
        json!({"id": "E1", "name": "CEO"}),
        json!({"id": "E2", "name": "VP", "managerId": "E1"}),
        json!({"id": "E3", "name": "Eng", "managerId": "E2"}),
    ];
    let graph = build_org_graph_from_records(&records);

    let full = build_visible_org(
        &graph,
        &OrgViewParams {
            max_nodes: 10,
            max_depth: 10,
            ..Default::default()
        },
    );
    assert_eq!(
        full.levels,
        vec![
            vec!["E1".to_string()],
            vec!["E2".to_string()],
            vec!["E3".to_string()],
        ]
    );
    assert!(!full.truncated_by_node_limit);

    let capped = build_visible_org(
        &graph,
        &OrgViewParams {
            max_nodes: 2,
            ..Default::default()
        },
    );
    assert_eq!(capped.ordered.len(), 2);
    assert!(capped.truncated_by_node_limit);

    let filtered = visible_set(
        &graph,
        &OrgFilter {
            query: "eng".to_string(),
            ..Default::default()
        },
    );
    assert_eq!(
        filtered,
        ["E1", "E2", "E3"].iter().map(|id| id.to_string()).collect()
    );

    let focused = build_visible_org(
        &graph,
        &OrgViewParams {
            focus_id: Some("E2".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(
        focused.ordered,
        vec!["E2".to_string(), "E3".to_string()]
    );
}
