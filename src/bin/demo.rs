//! Graphs 演示程序
//!
//! 构建一个 5 顶点的小图，打印邻接表、度统计，删除一条边后再次打印

use anyhow::Result;
use clap::Parser;
use graphs::cli::{PrintMode, Printer};
use graphs::graph::{Graph, GraphConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphs-demo")]
#[command(about = "Graphs 邻接表演示")]
struct Args {
    /// 垂直格式输出
    #[arg(short, long)]
    vertical: bool,

    /// 以 JSON 输出统计信息
    #[arg(short, long)]
    json: bool,

    /// 同时打印邻接矩阵、关联矩阵和拉普拉斯矩阵
    #[arg(short, long)]
    matrices: bool,

    /// 简单图模式（拒绝平行边和自环）
    #[arg(short, long)]
    simple: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

const EDGES: [(usize, usize); 8] = [
    (0, 1),
    (0, 3),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 5), // 5 不在图中，不会添加
    (4, 1),
    (4, 3),
];

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = if args.simple {
        GraphConfig::simple()
    } else {
        GraphConfig::default()
    };
    let printer = Printer::new(if args.vertical {
        PrintMode::Vertical
    } else {
        PrintMode::Table
    });

    println!("Graphs 演示");
    println!("===========");

    let mut graph: Graph = Graph::with_config(config);
    for i in 0..5 {
        graph.add_vertex(i);
    }
    for (v1, v2) in EDGES {
        if !graph.add_unweighted_edge(v1, v2) {
            println!("跳过边 ({}, {})", v1, v2);
        }
    }

    print_state(&graph, &printer, &args)?;

    println!("\n删除边 (0, 1)");
    graph.remove_edge(&0, &1);
    println!("边数: {}", graph.edge_count());
    let lists = vec![(0, neighbor_ids(&graph, 0)?)];
    print!("{}", printer.print_adjacency(&lists));

    Ok(())
}

fn neighbor_ids(graph: &Graph, vertex: usize) -> Result<Vec<usize>> {
    Ok(graph
        .neighbors(&vertex)?
        .iter()
        .map(|n| n.vertex)
        .collect())
}

fn print_state(graph: &Graph, printer: &Printer, args: &Args) -> Result<()> {
    let mut lists = Vec::with_capacity(graph.vertex_count());
    for &v in graph.vertices() {
        lists.push((v, neighbor_ids(graph, v)?));
    }
    println!("\n邻接表:");
    print!("{}", printer.print_adjacency(&lists));

    let stats = graph.stats();
    println!("\n统计信息:");
    if args.json {
        println!("{}", stats.to_json()?);
    } else {
        print!("{}", printer.print_stats(&stats));
    }

    if args.matrices {
        println!();
        print!(
            "{}",
            printer.print_matrix("邻接矩阵", graph.adjacency_matrix().matrix())
        );
        print!(
            "{}",
            printer.print_matrix("关联矩阵", graph.incidence_matrix().matrix())
        );
        print!(
            "{}",
            printer.print_matrix("拉普拉斯矩阵", graph.laplacian_matrix().matrix())
        );
    }

    Ok(())
}
