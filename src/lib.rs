//! Organization hierarchy engine: turns a flat, unreliable list of employee
//! records into a navigable forest with filtered, focused, depth-leveled and
//! windowed views over it.

pub mod org;

pub use org::{
    OrgFilter, OrgGraph, OrgNode, OrgView, OrgViewParams, VisibleOrg, WindowRange,
    build_org_graph, build_org_graph_from_records, build_visible_org, normalize_records,
    parse_records_json, rank_matches, resolve_managers, window_range,
};
