use crate::error::Result;
use crate::graph::types::Graph;
use crate::graph::vertex::{Color, VertexKey};

/// Discovery/finish clock for depth-first search
///
/// Threaded through the search by the caller, so separate runs never share
/// ticks. Starts at 0; the first discovered vertex gets `start = 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DfsClock {
    time: u64,
}

impl DfsClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    fn tick(&mut self) -> u64 {
        self.time += 1;
        self.time
    }
}

/// Depth-first search from `node`
///
/// Expects a graph reset with
/// [`prepare_graph_for_depth_first_search`](super::shared::prepare_graph_for_depth_first_search).
/// Only vertices reachable from `node` are visited. Runs on an explicit
/// stack, visiting in the same order as the recursive formulation.
#[tracing::instrument(skip(graph, clock), fields(node = %node, clock = clock.time()))]
pub fn depth_first_search<K: VertexKey>(
    graph: &mut Graph<K>,
    node: &K,
    clock: &mut DfsClock,
) -> Result<()> {
    discover(graph, node, clock)?;

    // (vertex, index of the next neighbor to look at)
    let mut stack: Vec<(K, usize)> = vec![(node.clone(), 0)];

    while let Some((current, index)) = stack.last_mut() {
        let next = graph.neighbor_at(current, *index).cloned();
        *index += 1;

        match next {
            Some(neighbor) => {
                let parent = current.clone();
                let vertex = graph.require_mut(&neighbor, "depth-first neighbor")?;
                if vertex.color() == Color::White {
                    vertex.parent = Some(parent);
                    discover(graph, &neighbor, clock)?;
                    stack.push((neighbor, 0));
                }
            }
            None => {
                let finished = current.clone();
                stack.pop();
                let vertex = graph.require_mut(&finished, "depth-first stack")?;
                vertex.advance_color(Color::Black);
                vertex.finish = clock.tick();
            }
        }
    }

    tracing::debug!(clock = clock.time(), "depth_first_search_done");
    Ok(())
}

fn discover<K: VertexKey>(graph: &mut Graph<K>, key: &K, clock: &mut DfsClock) -> Result<()> {
    let vertex = graph.require_mut(key, "depth-first search")?;
    vertex.start = clock.tick();
    vertex.advance_color(Color::Grey);
    Ok(())
}
