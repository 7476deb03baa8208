use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::graph::{OrgGraph, OrgNode};

/// Jump-to-person lookup: ranks nodes by fuzzy score over name and title
/// and returns the best `limit` hits. Distinct from the filter engine,
/// which stays substring-exact; this only feeds "find a person"
/// affordances.
pub fn rank_matches<'a>(graph: &'a OrgGraph, query: &str, limit: usize) -> Vec<&'a OrgNode> {
    let query = query.trim();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut ranked = graph
        .node_by_id
        .values()
        .filter_map(|node| {
            let score = fuzzy_match_score(&matcher, &node.name, query)
                .into_iter()
                .chain(fuzzy_match_score(&matcher, &node.title, query))
                .max()?;
            Some((score, node))
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.id.cmp(&b.1.id)));
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, node)| node).collect()
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}
