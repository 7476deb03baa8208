use serde_json::Value;

use super::filter::{self, OrgFilter};
use super::focus;
use super::graph::{OrgGraph, build_org_graph};
use super::level::{self, VisibleOrg};
use super::normalize::normalize_records;
use super::resolve::resolve_managers;

pub const DEFAULT_MAX_NODES: usize = 2000;
pub const DEFAULT_MAX_DEPTH: usize = 24;

/// Everything the visible view is a function of. Equal params mean an
/// equal view, which is what the `OrgView` cache keys on.
#[derive(Clone, Debug, PartialEq)]
pub struct OrgViewParams {
    pub filter: OrgFilter,
    pub focus_id: Option<String>,
    pub max_nodes: usize,
    pub max_depth: usize,
}

impl Default for OrgViewParams {
    fn default() -> Self {
        Self {
            filter: OrgFilter::default(),
            focus_id: None,
            max_nodes: DEFAULT_MAX_NODES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Full build pipeline: normalize, resolve managers, index the forest.
pub fn build_org_graph_from_records(records: &[Value]) -> OrgGraph {
    let mut nodes = normalize_records(records);
    resolve_managers(&mut nodes);
    build_org_graph(nodes)
}

/// Filter, focus and level in one pass. Pure function of its inputs;
/// `OrgView` adds the memoization on top.
pub fn build_visible_org(graph: &OrgGraph, params: &OrgViewParams) -> VisibleOrg {
    let mut visible = filter::visible_set(graph, &params.filter);
    let start = focus::apply_focus(graph, &mut visible, params.focus_id.as_deref());
    level::level_visible(graph, &visible, &start, params.max_nodes, params.max_depth)
}

/// Owns one built graph plus the current view parameters, and recomputes
/// the visible view only when the parameters actually change.
pub struct OrgView {
    graph: OrgGraph,
    params: OrgViewParams,
    cached: Option<VisibleOrg>,
}

impl OrgView {
    pub fn from_records(records: &[Value]) -> Self {
        Self::new(build_org_graph_from_records(records))
    }

    pub fn new(graph: OrgGraph) -> Self {
        Self {
            graph,
            params: OrgViewParams::default(),
            cached: None,
        }
    }

    pub fn graph(&self) -> &OrgGraph {
        &self.graph
    }

    pub fn params(&self) -> &OrgViewParams {
        &self.params
    }

    pub fn set_params(&mut self, params: OrgViewParams) {
        if self.params != params {
            self.params = params;
            self.cached = None;
        }
    }

    pub fn visible(&mut self) -> &VisibleOrg {
        let Self {
            graph,
            params,
            cached,
        } = self;
        cached.get_or_insert_with(|| build_visible_org(graph, params))
    }
}
