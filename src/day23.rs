use anyhow::{Context, Result};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

type Graph<'a> = FxHashMap<&'a str, FxHashSet<&'a str>>;

fn parse(input: &str) -> Result<Graph<'_>> {
    let mut graph = Graph::default();
    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once('-').with_context(|| format!("cannot parse link {:?}", line))?;
        graph.entry(a).or_default().insert(b);
        graph.entry(b).or_default().insert(a);
    }
    Ok(graph)
}

/// Triangles with at least one computer whose name starts with `t`.
fn chief_triangles(graph: &Graph) -> usize {
    let mut count = 0;
    for (&a, a_links) in graph {
        for &b in a_links.iter().filter(|&&b| b > a) {
            count += a_links.intersection(&graph[b])
                .filter(|&&c| c > b && [a, b, c].iter().any(|name| name.starts_with('t')))
                .count();
        }
    }
    count
}

/// Bron-Kerbosch with pivoting, keeping the largest clique in `best`.
fn largest_clique<'a>(
    graph: &Graph<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: FxHashSet<&'a str>,
    mut excluded: FxHashSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    let Some(&pivot) = candidates.union(&excluded).max_by_key(|&&v| graph[v].len()) else {
        if clique.len() > best.len() {best.clone_from(clique)};
        return;
    };
    let unpivoted = candidates.difference(&graph[pivot]).copied().collect::<Vec<_>>();
    for v in unpivoted {
        let links = &graph[v];
        clique.push(v);
        largest_clique(
            graph, clique,
            candidates.intersection(links).copied().collect(),
            excluded.intersection(links).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let graph = parse(input)?;
    if part == 1 {
        Ok(chief_triangles(&graph).to_string())
    } else {
        let mut best = vec![];
        largest_clique(&graph, &mut vec![], graph.keys().copied().collect(), FxHashSet::default(), &mut best);
        Ok(best.iter().sorted().join(","))
    }
}
