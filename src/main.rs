use std::fs;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use orgscope::org::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, OrgFilter, OrgView, OrgViewParams, rank_matches,
    window_range,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file with employee records (a bare array, or an object
    /// wrapping one under "employees"/"members"/"data")
    #[arg(long)]
    records: String,

    /// Free-text filter over name/title/department/id/type/manager
    #[arg(long, default_value = "")]
    query: String,

    /// Department filter, exact match; "all" disables it
    #[arg(long, default_value = "all")]
    department: String,

    /// Status filter, substring match; "all" disables it
    #[arg(long, default_value = "all")]
    status: String,

    /// Scope the view to one node's branch; "all" disables it
    #[arg(long, default_value = "all")]
    focus: String,

    #[arg(long, default_value_t = DEFAULT_MAX_NODES)]
    max_nodes: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Fuzzy person lookup, printed instead of the tree
    #[arg(long)]
    find: Option<String>,

    /// Print a directory window as "scroll,viewport,row-height"
    #[arg(long)]
    window: Option<String>,

    /// Emit the visible org as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.records)
        .with_context(|| format!("failed to read records file {}", args.records))?;
    let records = orgscope::org::parse_records_json(&raw)?;

    let mut view = OrgView::from_records(&records);

    if let Some(find) = &args.find {
        for node in rank_matches(view.graph(), find, 10) {
            println!("{} - {} ({})", node.name, node.title, node.id);
        }
        return Ok(());
    }

    view.set_params(OrgViewParams {
        filter: OrgFilter {
            query: args.query.clone(),
            department: unset_if_all(&args.department),
            status: unset_if_all(&args.status),
        },
        focus_id: unset_if_all(&args.focus),
        max_nodes: args.max_nodes,
        max_depth: args.max_depth,
    });

    let visible = view.visible().clone();
    let graph = view.graph();

    if args.json {
        let nodes = visible
            .ordered
            .iter()
            .filter_map(|id| graph.node(id))
            .collect::<Vec<_>>();
        let doc = serde_json::json!({ "visible": visible, "nodes": nodes });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    for (level, ids) in visible.levels.iter().enumerate() {
        for id in ids {
            let Some(node) = graph.node(id) else {
                continue;
            };
            let reports = graph.direct_report_count(id);
            if reports > 0 {
                println!(
                    "{:indent$}{} - {} [{} reports]",
                    "",
                    node.name,
                    node.title,
                    reports,
                    indent = level * 2
                );
            } else {
                println!(
                    "{:indent$}{} - {}",
                    "",
                    node.name,
                    node.title,
                    indent = level * 2
                );
            }
        }
    }

    println!(
        "{} of {} nodes visible",
        visible.visible_count, visible.total_node_count
    );
    if visible.truncated_by_node_limit {
        println!("truncated: node limit {} reached", args.max_nodes);
    }
    if visible.truncated_by_depth_limit {
        println!("truncated: depth limit {} reached", args.max_depth);
    }

    if let Some(spec) = &args.window {
        let (scroll, viewport, row_height) = parse_window_spec(spec)?;
        let range = window_range(visible.ordered.len(), row_height, viewport, scroll, 4);
        if range.is_empty() {
            println!("window is empty");
        } else {
            println!(
                "window rows {}..{} ({} rows)",
                range.start_index,
                range.end_index,
                range.len()
            );
            for id in &visible.ordered[range.start_index..range.end_index] {
                if let Some(node) = graph.node(id) {
                    println!("  {} - {}", node.name, node.title);
                }
            }
        }
    }

    Ok(())
}

fn unset_if_all(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_window_spec(spec: &str) -> Result<(f32, f32, f32)> {
    let parts = spec.split(',').collect::<Vec<_>>();
    let [scroll, viewport, row_height] = parts.as_slice() else {
        return Err(anyhow!("window spec must be \"scroll,viewport,row-height\""));
    };

    Ok((
        scroll.trim().parse().context("invalid scroll offset")?,
        viewport.trim().parse().context("invalid viewport height")?,
        row_height.trim().parse().context("invalid row height")?,
    ))
}
