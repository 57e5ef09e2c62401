use rand::Rng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;
use transit_pathfinding::{
    prelude::*,
    search::{a_star_search, dijkstra_search},
};

const SIZE: usize = 2000;
const LINKS_PER_STATION: usize = 3;
const QUERIES: usize = 200;

/// Stations scattered over a square, each linked to some of its closest Stations.
fn random_network(rng: &mut impl Rng) -> Network {
    let positions: Vec<(f64, f64)> = (0..SIZE)
        .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();

    let mut builder = Network::builder();
    for (i, &pos) in positions.iter().enumerate() {
        builder.add_station(i.to_string(), pos).unwrap();
    }

    let closest: Vec<Vec<usize>> = positions
        .par_iter()
        .enumerate()
        .map(|(i, a)| {
            let mut others: Vec<(f64, usize)> = positions
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(j, b)| (Position::from(*a).distance_to(Position::from(*b)), j))
                .collect();
            others.sort_by(|x, y| x.0.total_cmp(&y.0));
            others
                .into_iter()
                .take(LINKS_PER_STATION)
                .map(|(_, j)| j)
                .collect()
        })
        .collect();

    for (i, others) in closest.iter().enumerate() {
        for j in others {
            builder.link(&i.to_string(), &j.to_string()).unwrap();
        }
    }
    builder.build()
}

fn main() {
    let mut rng = rand::thread_rng();

    let configs: HashMap<&str, SearchConfig> = [
        ("default", SearchConfig::default()),
        ("reference", SearchConfig::REFERENCE),
    ]
    .into_iter()
    .collect();

    // (nanoseconds, cost, expanded, iterations)
    let mut results: HashMap<&str, Vec<(u128, Option<f64>, usize, usize)>> =
        configs.keys().map(|name| (*name, vec![])).collect();
    results.insert("dijkstra", vec![]);

    for round in 0..5 {
        let network = random_network(&mut rng);
        println!("finished Network gen {}", round);

        let queries: Vec<(StationId, StationId)> = (0..QUERIES)
            .map(|_| (rng.gen_range(0..SIZE), rng.gen_range(0..SIZE)))
            .collect();

        for &(start, goal) in &queries {
            let start_time = Instant::now();
            let paths = dijkstra_search(&network, start, &[goal]);
            let dt = start_time.elapsed().as_nanos();
            results
                .get_mut("dijkstra")
                .unwrap()
                .push((dt, paths.get(&goal).map(Path::cost), 0, 0));
        }

        for (&name, config) in &configs {
            let results = results.get_mut(name).unwrap();
            for &(start, goal) in &queries {
                let start_time = Instant::now();
                let outcome = a_star_search(&network, start, goal, config);
                let dt = start_time.elapsed().as_nanos();
                results.push((
                    dt,
                    outcome.path.as_ref().map(Path::cost),
                    outcome.expanded,
                    outcome.iterations,
                ));
            }
        }
    }

    let best: Vec<Option<f64>> = results["dijkstra"].iter().map(|r| r.1).collect();

    for (name, results) in results {
        let times = results.iter().map(|r| r.0);
        let min_time = times.clone().min().unwrap() as f64 / 1_000_000.0;
        let max_time = times.clone().max().unwrap() as f64 / 1_000_000.0;
        let avg_time = times.sum::<u128>() as f64 / results.len() as f64 / 1_000_000.0;

        assert!(results
            .iter()
            .zip(best.iter())
            .all(|(a, b)| a.1.is_some() == b.is_some()));
        assert!(results
            .iter()
            .zip(best.iter())
            .filter_map(|(a, b)| Some((a.1?, (*b)?)))
            .all(|(cost, best)| (cost - best).abs() < 1e-6));

        let avg_expanded =
            results.iter().map(|r| r.2).sum::<usize>() as f64 / results.len() as f64;
        let avg_iterations =
            results.iter().map(|r| r.3).sum::<usize>() as f64 / results.len() as f64;

        println!(
            "{} | {:.3}ms - {:.3}ms; {:.3}ms | expanded {:.1}, iterations {:.1}",
            name, min_time, max_time, avg_time, avg_expanded, avg_iterations,
        );
    }
}
