//! AdjGraph 演示脚本
//!
//! 构建示例图，执行遍历和最短路径查询

use adjgraph::{logging, Graph, PathFinder};

fn main() -> anyhow::Result<()> {
    logging::init();

    println!("AdjGraph 演示");
    println!("=============\n");

    let mut graph = Graph::new();

    println!("1. 构建示例图...");
    graph.add_vertices(["s", "a", "b", "c", "d", "e"]);
    // 重复插入不会产生新顶点
    graph.add_vertices(["a", "e"]);
    graph.add_edges([
        ("s", "a"),
        ("s", "b"),
        ("a", "c"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
        ("c", "e"),
        ("d", "e"),
    ])?;
    println!(
        "   当前图大小: {} 顶点, {} 边\n",
        graph.vertex_count(),
        graph.edge_count()
    );

    let s = graph
        .index_of("s")
        .ok_or_else(|| anyhow::anyhow!("缺少顶点 s"))?;

    println!("2. 广度优先遍历...");
    graph.reset();
    graph.bfs(s)?;
    let explored: Vec<&str> = graph
        .explored_vertices()
        .into_iter()
        .filter_map(|v| graph.label_of(v))
        .collect();
    println!("   已访问: {:?}\n", explored);

    println!("3. 最短路径...");
    for (label, distance) in graph.shortest_path(s)? {
        println!("   {} = {}", label, distance);
    }

    if let Some(e) = graph.index_of("e") {
        if let Some(path) = PathFinder::new(&graph).path_between(s, e)? {
            let labels: Vec<&str> = path
                .vertices
                .iter()
                .filter_map(|&v| graph.label_of(v))
                .collect();
            println!("   s -> e: {}", labels.join(" -> "));
        }
    }

    println!("\n4. 未知顶点...");
    if let Err(e) = graph.add_edges([("s", "z")]) {
        println!("   {}", e);
    }

    println!("\n演示完成!");
    Ok(())
}
