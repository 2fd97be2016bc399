use clap::{Parser, ValueEnum};
use std::time::Instant;
use tqdm::tqdm;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wavefront::{
    fs::{GraphFile, load_graph},
    graph::{AdjacencyGraph, RandomGraphParams, VertexId},
    statistics::Stats,
    traverse::{parallel_bfs_with, parallel_dfs_with, sequential_bfs, sequential_dfs},
};

/// Graph traversal engine over undirected adjacency-list graphs
#[derive(Parser, Debug)]
#[command(name = "wavefront")]
#[command(about = "A parallel graph traversal engine over adjacency lists", long_about = None)]
struct Args {
    /// Path to a JSON graph file; omitted, a random graph is generated
    #[arg(short, long)]
    graph: Option<String>,

    /// Number of vertices of the generated graph
    #[arg(long, default_value_t = 1000)]
    vertices: usize,

    /// Number of edges of the generated graph
    #[arg(long, default_value_t = 4000)]
    edges: usize,

    /// Seed of the generated graph
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Start vertex for every traversal
    #[arg(short, long, default_value_t = 0)]
    start: VertexId,

    /// Worker counts for the parallel variants (comma-separated list, e.g., "1,2,4,8")
    #[arg(short, long, value_delimiter = ',', default_value = "1,2,4")]
    threads: Vec<usize>,

    /// Number of timed traversals per job
    #[arg(long, default_value_t = 100)]
    trials: usize,

    /// Traversal algorithms to run (comma-separated); all four when omitted
    #[arg(short, long, value_delimiter = ',')]
    algorithms: Option<Vec<Algorithm>>,

    /// Print the adjacency list before running any job
    #[arg(long)]
    display: bool,

    /// Write the benchmarked graph to this JSON path before the sweep
    #[arg(long)]
    dump_graph: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    SequentialDfs,
    ParallelDfs,
    SequentialBfs,
    ParallelBfs,
}

impl Algorithm {
    fn all() -> Vec<Algorithm> {
        vec![
            Algorithm::SequentialDfs,
            Algorithm::ParallelDfs,
            Algorithm::SequentialBfs,
            Algorithm::ParallelBfs,
        ]
    }

    fn is_parallel(self) -> bool {
        matches!(self, Algorithm::ParallelDfs | Algorithm::ParallelBfs)
    }

    fn label(self) -> &'static str {
        match self {
            Algorithm::SequentialDfs => "sequential DFS",
            Algorithm::ParallelDfs => "parallel DFS",
            Algorithm::SequentialBfs => "sequential BFS",
            Algorithm::ParallelBfs => "parallel BFS",
        }
    }
}

fn run_traversal_job(
    graph: &AdjacencyGraph,
    algorithm: Algorithm,
    start: VertexId,
    workers: usize,
    trials: usize,
) {
    println!("\n==========");
    if algorithm.is_parallel() {
        println!("Running {} with workers={}", algorithm.label(), workers);
    } else {
        println!("Running {}", algorithm.label());
    }
    println!("==========");

    let start_time = Instant::now();

    let mut combined_stats = Stats::new();
    let mut checksum = 0usize;

    for _ in tqdm(0..trials) {
        let order = match algorithm {
            Algorithm::SequentialDfs => sequential_dfs(graph, start),
            Algorithm::ParallelDfs => parallel_dfs_with(graph, start, workers),
            Algorithm::SequentialBfs => sequential_bfs(graph, start),
            Algorithm::ParallelBfs => parallel_bfs_with(graph, start, workers),
        }
        .expect("start vertex was validated before the sweep");

        let mut trial_stats = Stats::new();
        trial_stats.bump_runs();
        trial_stats.bump_visited(order.len());
        combined_stats = combined_stats.merge(&trial_stats);

        checksum += order.iter().sum::<usize>();
    }

    let elapsed = start_time.elapsed();
    let avg_visited =
        combined_stats.get_vertices_visited() as f64 / combined_stats.get_runs() as f64;

    println!("Avg per traversal: {:.2} vertices visited", avg_visited);
    println!("Checksum: {checksum}");
    println!(
        "Completed {} traversals in {:.2}s ({:.2} traversals/sec)",
        combined_stats.get_runs(),
        elapsed.as_secs_f64(),
        combined_stats.get_runs() as f64 / elapsed.as_secs_f64()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let full_graph = match &args.graph {
        Some(path) => {
            info!(path = %path, "loading graph file");
            load_graph(path).expect("failed to load the graph file")
        }
        None => {
            info!(
                vertices = args.vertices,
                edges = args.edges,
                seed = args.seed,
                "generating random graph"
            );
            RandomGraphParams {
                vertex_count: args.vertices,
                edge_count: args.edges,
                seed: args.seed,
            }
            .generate()
        }
    };

    info!(
        vertices = full_graph.vertex_count(),
        "adjacency graph ready"
    );

    full_graph
        .validate_start(args.start)
        .expect("start vertex out of range for this graph");

    if args.display {
        print!("{full_graph}");
    }

    if let Some(path) = &args.dump_graph {
        let mut edges: Vec<(VertexId, VertexId)> = Vec::new();
        for vertex in 0..full_graph.vertex_count() {
            let mut self_loop_entries = 0;
            for &neighbor in full_graph.neighbors(vertex) {
                if vertex < neighbor {
                    // each undirected edge shows up in both lists; keep one copy
                    edges.push((vertex, neighbor));
                } else if vertex == neighbor {
                    // a self-loop contributes two entries to a single list
                    self_loop_entries += 1;
                    if self_loop_entries % 2 == 0 {
                        edges.push((vertex, vertex));
                    }
                }
            }
        }
        GraphFile {
            vertex_count: full_graph.vertex_count(),
            edges,
        }
        .store(path)
        .expect("failed to write the graph file");
        info!(path = %path, "graph description written");
    }

    let algorithms = args.algorithms.clone().unwrap_or_else(Algorithm::all);

    println!("\nStarting traversal sweep:");
    println!("  Start vertex: {}", args.start);
    println!("  Workers: {:?}", args.threads);
    println!("  Trials per job: {}", args.trials);

    for &algorithm in &algorithms {
        if algorithm.is_parallel() {
            for &workers in &args.threads {
                run_traversal_job(&full_graph, algorithm, args.start, workers, args.trials);
            }
        } else {
            run_traversal_job(&full_graph, algorithm, args.start, 1, args.trials);
        }
    }

    println!("\n==========");
    println!("All jobs completed!");
    println!("==========");
}
