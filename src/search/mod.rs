//! Searching for Paths in a [`Network`].
//!
//! The main entry point is [`find_path`], which resolves Station names and runs
//! [`a_star_search`]. [`dijkstra_search`] computes exhaustive shortest Paths and is mostly
//! useful to double-check A* results.

mod a_star;
pub use a_star::a_star_search;

mod dijkstra;
pub use dijkstra::dijkstra_search;

use crate::{Network, Path, SearchError, StationId};

use std::cmp::Ordering;

/// Options for configuring a search
///
/// Default options:
/// ```
/// # use transit_pathfinding::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         revisit_closed: false,
///         size_hint: 64,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `false` (default): a Station that was already expanded is skipped when it is popped from
    /// the open set again.
    ///
    /// `true`: the neighbors of such a Station are pushed again. This never changes the
    /// resulting Path, but it increases the work done and may increase `iterations`.
    pub revisit_closed: bool,
    /// The number of Stations the search expects to touch. Only used to pre-allocate
    /// (defaults to `64`).
    pub size_hint: usize,
}

impl SearchConfig {
    /// a SearchConfig that keeps expanding the neighbors of already closed Stations
    ///
    /// Values:
    /// ```
    /// # use transit_pathfinding::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         revisit_closed: true,
    ///         size_hint: 64,
    ///     },
    ///     SearchConfig::REFERENCE
    /// );
    /// ```
    pub const REFERENCE: SearchConfig = SearchConfig {
        revisit_closed: true,
        size_hint: 64,
    };
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            revisit_closed: false,
            size_hint: 64,
        }
    }
}

/// The result of a single search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// The Path from start to goal (both inclusive), or `None` if the goal is unreachable
    pub path: Option<Path<StationId>>,
    /// How many distinct Stations were expanded
    pub expanded: usize,
    /// How many entries were popped from the open set
    pub iterations: usize,
}

impl SearchOutcome {
    /// `true` if a Path was found
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The names of the Stations along the Path, or `None` if no Path was found
    pub fn station_names<'a>(&self, network: &'a Network) -> Option<Vec<&'a str>> {
        self.path
            .as_ref()
            .map(|path| path.iter().map(|&id| network[id].name()).collect())
    }
}

/// Finds a shortest Path between the Stations called `start` and `end` with the default
/// [`SearchConfig`].
///
/// ## Examples
/// ```
/// # use transit_pathfinding::prelude::*;
/// // A(0,0) -- B(0,1) -- C(0,2)
/// let mut builder = Network::builder();
/// builder.add_station("A", (0.0, 0.0))?;
/// builder.add_station("B", (0.0, 1.0))?;
/// builder.add_station("C", (0.0, 2.0))?;
/// builder.add_line("Line", &["A", "B", "C"])?;
/// let network = builder.build();
///
/// let outcome = find_path(&network, "A", "C").unwrap();
/// let path = outcome.path.as_ref().unwrap();
///
/// assert_eq!(outcome.station_names(&network), Some(vec!["A", "B", "C"]));
/// assert_eq!(path.cost(), 2.0);
///
/// assert_eq!(
///     find_path(&network, "NotAStation", "C"),
///     Err(SearchError::UnknownStation("NotAStation".into()))
/// );
/// # Ok::<(), NetworkError>(())
/// ```
///
/// ## Returns
/// [`SearchError::UnknownStation`] if either name is not part of the Network. Otherwise the
/// [`SearchOutcome`], whose `path` is `None` if the goal cannot be reached.
pub fn find_path(network: &Network, start: &str, end: &str) -> Result<SearchOutcome, SearchError> {
    find_path_with_config(network, start, end, &SearchConfig::default())
}

/// Like [`find_path`], but with a custom [`SearchConfig`]
pub fn find_path_with_config(
    network: &Network,
    start: &str,
    end: &str,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let start = network.lookup(start)?;
    let goal = network.lookup(end)?;
    Ok(a_star_search(network, start, goal, config))
}

/// Runs [`find_path`] for every `(start, end)` pair.
///
/// With the `parallel` feature the searches are spread over the rayon thread pool. Each search
/// on its own is still sequential, and the results keep the order of `queries`.
pub fn find_paths(
    network: &Network,
    queries: &[(&str, &str)],
) -> Vec<Result<SearchOutcome, SearchError>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        queries
            .par_iter()
            .map(|&(start, end)| find_path(network, start, end))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|&(start, end)| find_path(network, start, end))
            .collect()
    }
}

/// An entry of the open set.
///
/// Ordered so that a [`BinaryHeap`](std::collections::BinaryHeap) pops the lowest `estimate`
/// first. Equal estimates pop in insertion order.
#[derive(Debug)]
pub(crate) struct Candidate {
    pub estimate: f64,
    pub cost: f64,
    pub sequence: u64,
    pub station: StationId,
    pub path: Vec<StationId>,
}

impl PartialEq for Candidate {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for Candidate {}
impl PartialOrd for Candidate {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Candidate {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.estimate
            .total_cmp(&self.estimate)
            .then_with(|| rhs.sequence.cmp(&self.sequence))
    }
}

/// An entry of the Dijkstra frontier, lowest `cost` first.
#[derive(Debug)]
pub(crate) struct Element(pub StationId, pub f64);
impl PartialEq for Element {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for Element {}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.total_cmp(&self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn candidate(estimate: f64, sequence: u64) -> Candidate {
        Candidate {
            estimate,
            cost: 0.0,
            sequence,
            station: sequence as StationId,
            path: vec![],
        }
    }

    #[test]
    fn lowest_estimate_first() {
        let mut heap = BinaryHeap::new();
        heap.push(candidate(3.0, 0));
        heap.push(candidate(1.0, 1));
        heap.push(candidate(2.0, 2));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|c| c.estimate)).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn ties_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        heap.push(candidate(2.0, 5));
        heap.push(candidate(2.0, 3));
        heap.push(candidate(2.0, 4));
        heap.push(candidate(1.0, 6));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|c| c.sequence)).collect();
        assert_eq!(order, vec![6, 3, 4, 5]);
    }

    #[test]
    fn find_paths_keeps_query_order() {
        let mut builder = Network::builder();
        builder.add_station("A", (0.0, 0.0)).unwrap();
        builder.add_station("B", (1.0, 0.0)).unwrap();
        builder.add_station("C", (9.0, 9.0)).unwrap();
        builder.link("A", "B").unwrap();
        let network = builder.build();

        let results = find_paths(&network, &[("A", "B"), ("A", "C"), ("A", "Z"), ("B", "B")]);

        assert_eq!(results.len(), 4);
        assert_eq!(
            results[0].as_ref().unwrap().station_names(&network),
            Some(vec!["A", "B"])
        );
        assert!(!results[1].as_ref().unwrap().is_found());
        assert_eq!(results[2], Err(SearchError::UnknownStation("Z".into())));
        assert_eq!(
            results[3].as_ref().unwrap().station_names(&network),
            Some(vec!["B"])
        );
    }
}
