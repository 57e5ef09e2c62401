use super::{Candidate, SearchConfig, SearchOutcome};
use crate::{distance, heuristic, Network, Path, StationId};

use hashbrown::HashSet;
use std::collections::BinaryHeap;

/// Searches the Network using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm)
/// between two Stations given by id.
///
/// The Cost of a Link is the straight-line [`distance`] between its Stations and the
/// [`heuristic`] is the straight-line Distance to the goal.
///
/// Every entry of the open set carries the Path that led to it. The search stops the first time
/// the goal is popped, at which point that Path is a shortest one.
///
/// ## Panics
/// If `start` or `goal` is not a Station of `network`. Use [`find_path`](super::find_path) to
/// search by name with proper errors instead.
///
/// ## Examples
/// ```
/// # use transit_pathfinding::{prelude::*, search::a_star_search};
/// let mut builder = Network::builder();
/// let a = builder.add_station("A", (0.0, 0.0))?;
/// let b = builder.add_station("B", (0.0, 1.0))?;
/// let network = builder.build();
///
/// let outcome = a_star_search(&network, a, a, &SearchConfig::default());
/// assert_eq!(outcome.path.unwrap(), vec![a]);
/// assert_eq!((outcome.expanded, outcome.iterations), (0, 1));
///
/// let outcome = a_star_search(&network, a, b, &SearchConfig::default());
/// assert!(outcome.path.is_none());
/// # Ok::<(), NetworkError>(())
/// ```
pub fn a_star_search(
    network: &Network,
    start: StationId,
    goal: StationId,
    config: &SearchConfig,
) -> SearchOutcome {
    let goal_station = &network[goal];
    search_log!(
        debug,
        "searching from {} to {}",
        network[start].name(),
        goal_station.name()
    );

    let mut closed = HashSet::with_capacity(config.size_hint);
    let mut next = BinaryHeap::with_capacity(config.size_hint / 2);
    let mut sequence = 0;
    next.push(Candidate {
        estimate: 0.0,
        cost: 0.0,
        sequence,
        station: start,
        path: vec![start],
    });

    let mut expanded = 0;
    let mut iterations = 0;

    while let Some(Candidate {
        cost: current_cost,
        station: current_id,
        path: current_path,
        ..
    }) = next.pop()
    {
        iterations += 1;

        if current_id == goal {
            search_log!(
                debug,
                "found path of cost {} ({} expanded, {} iterations)",
                current_cost,
                expanded,
                iterations
            );
            return SearchOutcome {
                path: Some(Path::new(current_path, current_cost)),
                expanded,
                iterations,
            };
        }

        if closed.insert(current_id) {
            expanded += 1;
        } else if !config.revisit_closed {
            continue;
        }

        let current = &network[current_id];
        for &other_id in current.links() {
            if closed.contains(&other_id) {
                continue;
            }
            let other = &network[other_id];
            let other_cost = current_cost + distance(current, other);
            let estimate = other_cost + heuristic(other, goal_station);

            let mut other_path = Vec::with_capacity(current_path.len() + 1);
            other_path.extend_from_slice(&current_path);
            other_path.push(other_id);

            sequence += 1;
            next.push(Candidate {
                estimate,
                cost: other_cost,
                sequence,
                station: other_id,
                path: other_path,
            });
        }
    }

    search_log!(
        debug,
        "no path ({} expanded, {} iterations)",
        expanded,
        iterations
    );
    SearchOutcome {
        path: None,
        expanded,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::find_path_with_config;

    // A(0,0) -- B(0,1) -- C(0,2)
    fn straight_line() -> Network {
        let mut builder = Network::builder();
        builder.add_station("A", (0.0, 0.0)).unwrap();
        builder.add_station("B", (0.0, 1.0)).unwrap();
        builder.add_station("C", (0.0, 2.0)).unwrap();
        builder.link("A", "B").unwrap();
        builder.link("B", "C").unwrap();
        builder.build()
    }

    #[test]
    fn basic() {
        let network = straight_line();
        let (a, c) = (network.id_of("A").unwrap(), network.id_of("C").unwrap());

        let outcome = a_star_search(&network, a, c, &SearchConfig::default());

        assert_eq!(outcome.station_names(&network), Some(vec!["A", "B", "C"]));
        assert_eq!(outcome.expanded, 2);
        assert_eq!(outcome.iterations, 3);
        assert_eq!(outcome.path.unwrap().cost(), 2.0);
    }

    #[test]
    fn start_is_goal() {
        let network = straight_line();
        let b = network.id_of("B").unwrap();

        for config in [SearchConfig::default(), SearchConfig::REFERENCE] {
            let outcome = a_star_search(&network, b, b, &config);

            assert_eq!(outcome.path, Some(Path::new(vec![b], 0.0)));
            assert_eq!(outcome.expanded, 0);
            assert_eq!(outcome.iterations, 1);
        }
    }

    #[test]
    fn unreachable_goal() {
        // A -- B -- C    D -- E
        let mut builder = Network::builder();
        for (i, name) in ["A", "B", "C", "D", "E"].iter().enumerate() {
            builder.add_station(*name, (i as f64, 0.0)).unwrap();
        }
        builder.add_line("West", &["A", "B", "C"]).unwrap();
        builder.add_line("East", &["D", "E"]).unwrap();
        let network = builder.build();
        let (a, e) = (network.id_of("A").unwrap(), network.id_of("E").unwrap());

        let outcome = a_star_search(&network, a, e, &SearchConfig::default());

        assert!(outcome.path.is_none());
        assert_eq!(outcome.expanded, 3);
        assert_eq!(outcome.iterations, 3);
    }

    #[test]
    fn prefers_shorter_detour() {
        //        B(1,3)
        //       /      \
        // A(0,0) ------ D(2,0)   direct link is missing, detours via B or C
        //       \      /
        //        C(1,-1)
        let mut builder = Network::builder();
        builder.add_station("A", (0.0, 0.0)).unwrap();
        builder.add_station("B", (1.0, 3.0)).unwrap();
        builder.add_station("C", (1.0, -1.0)).unwrap();
        builder.add_station("D", (2.0, 0.0)).unwrap();
        builder.add_line("North", &["A", "B", "D"]).unwrap();
        builder.add_line("South", &["A", "C", "D"]).unwrap();
        let network = builder.build();

        let outcome = find_path_with_config(&network, "A", "D", &SearchConfig::default()).unwrap();

        assert_eq!(outcome.station_names(&network), Some(vec!["A", "C", "D"]));
        let cost = outcome.path.unwrap().cost();
        assert!((cost - 2.0 * 2f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn revisiting_closed_keeps_path() {
        // square with a diagonal, so some Stations are pushed more than once
        let mut builder = Network::builder();
        builder.add_station("A", (0.0, 0.0)).unwrap();
        builder.add_station("B", (1.0, 0.0)).unwrap();
        builder.add_station("C", (1.0, 1.0)).unwrap();
        builder.add_station("D", (0.0, 1.0)).unwrap();
        builder.add_station("E", (2.0, 2.0)).unwrap();
        builder.add_line("Ring", &["A", "B", "C", "D", "A"]).unwrap();
        builder.link("B", "D").unwrap();
        builder.link("C", "E").unwrap();
        let network = builder.build();

        let skipping = find_path_with_config(&network, "A", "E", &SearchConfig::default()).unwrap();
        let revisiting =
            find_path_with_config(&network, "A", "E", &SearchConfig::REFERENCE).unwrap();

        assert_eq!(skipping.path, revisiting.path);
        assert_eq!(skipping.expanded, revisiting.expanded);
        assert!(revisiting.iterations >= skipping.iterations);
    }

    #[test]
    fn does_not_expand_past_goal() {
        // A -- B -- C -- D, searching A -> B must never expand C or D
        let mut builder = Network::builder();
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            builder.add_station(*name, (0.0, i as f64)).unwrap();
        }
        builder.add_line("Line", &["A", "B", "C", "D"]).unwrap();
        let network = builder.build();

        let outcome = find_path_with_config(&network, "A", "B", &SearchConfig::default()).unwrap();

        assert_eq!(outcome.station_names(&network), Some(vec!["A", "B"]));
        assert_eq!(outcome.expanded, 1);
        assert_eq!(outcome.iterations, 2);
    }
}
