mod filter;
mod focus;
mod graph;
mod level;
mod normalize;
mod records;
mod resolve;
mod search;
mod view;
mod window;

pub use filter::{OrgFilter, visible_set};
pub use focus::{apply_focus, descendant_closure};
pub use graph::{OrgGraph, OrgNode, build_org_graph};
pub use level::{VisibleOrg, level_visible};
pub use normalize::normalize_records;
pub use records::parse_records_json;
pub use resolve::resolve_managers;
pub use search::rank_matches;
pub use view::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, OrgView, OrgViewParams, build_org_graph_from_records,
    build_visible_org,
};
pub use window::{WindowRange, window_range};
