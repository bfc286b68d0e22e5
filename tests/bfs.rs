use ailab::search::bfs::shortest_path;
use std::collections::HashMap;

fn graph() -> HashMap<&'static str, Vec<&'static str>> {
    HashMap::from([
        ("a", vec!["b", "c"]),
        ("b", vec!["d"]),
        ("c", vec!["d", "e"]),
        ("d", vec!["f"]),
        ("e", vec![]),
        ("f", vec![]),
        ("isolated", vec![]),
    ])
}

fn neighbors(graph: &HashMap<&'static str, Vec<&'static str>>, node: &&str) -> Vec<((), &'static str)> {
    graph[node].iter().map(|&next| ((), next)).collect()
}

#[test]
fn finds_the_shortest_path() {
    let graph = graph();
    let path = shortest_path("a", |node| *node == "f", |node| neighbors(&graph, node));

    let states: Vec<&str> = path.unwrap().into_iter().map(|(_, state)| state).collect();
    assert_eq!(states.len(), 3);
    assert_eq!(states.last(), Some(&"f"));
}

#[test]
fn start_can_be_the_goal() {
    let graph = graph();
    let path = shortest_path("a", |node| *node == "a", |node| neighbors(&graph, node));
    assert_eq!(path, Some(Vec::new()));
}

#[test]
fn unreachable_goal_returns_none() {
    let graph = graph();
    let path = shortest_path("a", |node| *node == "isolated", |node| {
        neighbors(&graph, node)
    });
    assert_eq!(path, None);
}
