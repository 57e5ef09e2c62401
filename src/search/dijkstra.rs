use super::Element;
use crate::{distance, Network, Path, StationId};

use hashbrown::{HashMap, HashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Searches the Network using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// for the shortest Paths from `start` to each of the `goals`.
///
/// Unlike [`a_star_search`](super::a_star_search) this uses no Heuristic, which makes it slower
/// but useful as a reference for the optimal Cost.
///
/// ## Returns
/// A Map from every reachable goal to its Path. Unreachable goals are missing from the Map.
///
/// ## Examples
/// ```
/// # use transit_pathfinding::{prelude::*, search::dijkstra_search};
/// let mut builder = Network::builder();
/// let a = builder.add_station("A", (0.0, 0.0))?;
/// let b = builder.add_station("B", (0.0, 1.0))?;
/// let c = builder.add_station("C", (0.0, 2.0))?;
/// let d = builder.add_station("D", (5.0, 5.0))?;
/// builder.add_line("Line", &["A", "B", "C"])?;
/// let network = builder.build();
///
/// let paths = dijkstra_search(&network, a, &[c, d]);
///
/// assert_eq!(paths[&c], vec![a, b, c]);
/// assert_eq!(paths[&c].cost(), 2.0);
/// assert!(!paths.contains_key(&d));
/// # Ok::<(), NetworkError>(())
/// ```
pub fn dijkstra_search(
    network: &Network,
    start: StationId,
    goals: &[StationId],
) -> HashMap<StationId, Path<StationId>> {
    let mut visited = HashMap::new();
    let mut next = BinaryHeap::new();
    next.push(Element(start, 0.0));
    visited.insert(start, (0.0, start));

    let mut remaining_goals: HashSet<StationId> = goals.iter().copied().collect();

    let mut goal_costs = HashMap::with_capacity(goals.len());

    while let Some(Element(current_id, current_cost)) = next.pop() {
        match current_cost.total_cmp(&visited[&current_id].0) {
            Ordering::Greater => continue,
            Ordering::Equal => {}
            Ordering::Less => unreachable!("stored costs only ever decrease"),
        }

        if remaining_goals.remove(&current_id) {
            goal_costs.insert(current_id, current_cost);
            if remaining_goals.is_empty() {
                break;
            }
        }

        let current = &network[current_id];

        for &other_id in current.links() {
            let other_cost = current_cost + distance(current, &network[other_id]);

            let mut needs_visit = true;
            if let Some((prev_cost, prev_id)) = visited.get_mut(&other_id) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                    *prev_id = current_id;
                } else {
                    needs_visit = false;
                }
            } else {
                visited.insert(other_id, (other_cost, current_id));
            }

            if needs_visit {
                next.push(Element(other_id, other_cost));
            }
        }
    }

    let mut goal_data = HashMap::with_capacity(goal_costs.len());

    for (&goal, &cost) in goal_costs.iter() {
        let steps = {
            let mut steps = vec![];
            let mut current = goal;

            while current != start {
                steps.push(current);
                let (_, prev) = visited[&current];
                current = prev;
            }
            steps.push(start);
            steps.reverse();
            steps
        };
        goal_data.insert(goal, Path::new(steps, cost));
    }

    goal_data
}
