use clap::Parser;
use keiro::prelude::*;
use std::fs;

/// Inspect a call-flow document: derived graph, layout, and source spans
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the call-flow YAML document
    flow_path: String,

    /// Print the full render model as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Locate a node id and print its source span and definition block
    #[arg(long, value_name = "NODE_ID")]
    locate: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&DocumentError::Io(format!("'{}': {}", cli.flow_path, e)).to_string())
    });

    if let Some(node_id) = cli.locate {
        run_locate(&text, &node_id);
        return;
    }

    // Strict parse so the author sees the YAML error instead of a silently
    // empty graph.
    let doc = parse_document_strict(&text).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let graph = extract(&doc);

    if cli.json {
        let model = render_model(&graph);
        let json = serde_json::to_string_pretty(&model)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode render model: {}", e)));
        println!("{}", json);
        return;
    }

    print_summary(&graph);
}

fn run_locate(text: &str, node_id: &str) {
    match locate(text, node_id) {
        Some(span) => {
            println!("{}..{} ({} bytes)", span.start, span.end, span.len());
            print!("{}", span.slice(text));
        }
        None => exit_with_error(&format!("Node id '{}' not found in the document", node_id)),
    }
}

fn print_summary(graph: &FlowGraph) {
    if graph.is_empty() {
        println!("Empty graph: nothing to render.");
        return;
    }

    let leveling = assign_levels(graph);
    println!("Start node: {}", graph.start_node);
    println!(
        "Nodes: {} ({} reachable)",
        graph.len(),
        leveling.node_count()
    );
    println!("\n{}", leveling.describe());

    println!("\nEdges:");
    for edge in derive_edges(graph) {
        match edge.label {
            Some(role) => println!("  {} -> {} [{}]", edge.source, edge.target, role),
            None => println!("  {} -> {}", edge.source, edge.target),
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
