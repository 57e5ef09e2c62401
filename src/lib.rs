#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to find shortest Routes between named Stations of a Transit Network.
//!
//! ## Introduction
//! A Transit Network is a small, static Graph: every Station has a name, a Position on the map
//! and a set of Links to other Stations. Since the Network is known in full before any search
//! starts, it is built once through a [`NetworkBuilder`] and then only read by the Pathfinder.
//!
//! Searches use [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the straight-line
//! Distance between two Stations as both the Cost of a Link and the Heuristic towards the Goal.
//! Because a straight line is never longer than any chain of Links, the Heuristic never
//! overestimates, and **the first Path that reaches the Goal is a shortest one**.
//!
//! Alongside the Path, every search reports two counters: how many Stations were expanded and how
//! many times the search loop ran. These are handy to compare different [`SearchConfig`]s.
//!
//! ## Examples
//! Building a Network:
//! ```
//! use transit_pathfinding::prelude::*;
//!
//! let mut builder = Network::builder();
//! builder.add_station("A", (0.0, 0.0))?;
//! builder.add_station("B", (0.0, 1.0))?;
//! builder.add_station("C", (0.0, 2.0))?;
//! builder.add_line("Circle", &["A", "B", "C"])?;
//! let network = builder.build();
//!
//! assert_eq!(network.len(), 3);
//! # Ok::<(), NetworkError>(())
//! ```
//!
//! ### Pathfinding
//! Finding the Path between two Stations:
//! ```
//! # use transit_pathfinding::prelude::*;
//! # let mut builder = Network::builder();
//! # builder.add_station("A", (0.0, 0.0)).unwrap();
//! # builder.add_station("B", (0.0, 1.0)).unwrap();
//! # builder.add_station("C", (0.0, 2.0)).unwrap();
//! # builder.add_line("Circle", &["A", "B", "C"]).unwrap();
//! # let network = builder.build();
//! let outcome = find_path(&network, "A", "C")?;
//!
//! assert_eq!(outcome.station_names(&network), Some(vec!["A", "B", "C"]));
//! assert_eq!(outcome.expanded, 2);
//! assert_eq!(outcome.iterations, 3);
//! # Ok::<(), SearchError>(())
//! ```
//! Unknown Station names are reported as an Error, while a Goal that simply cannot be reached
//! results in an outcome without a Path:
//! ```
//! # use transit_pathfinding::prelude::*;
//! # let mut builder = Network::builder();
//! # builder.add_station("A", (0.0, 0.0)).unwrap();
//! # builder.add_station("B", (0.0, 1.0)).unwrap();
//! # let network = builder.build();
//! assert!(find_path(&network, "A", "Nowhere").is_err());
//!
//! let outcome = find_path(&network, "A", "B")?;
//! assert!(outcome.path.is_none());
//! # Ok::<(), SearchError>(())
//! ```
//!
//! ### Configuration
//! [`find_path_with_config`] takes a [`SearchConfig`] to control how the search treats Stations
//! that were already finalized. [`SearchConfig::REFERENCE`] keeps expanding the neighbors of
//! such Stations, which changes the counters but never the resulting Path.

#[macro_use]
mod utils;

mod error;
pub use self::error::{NetworkError, SearchError};

pub mod network;
pub use self::network::{Line, Network, NetworkBuilder, Position, Station, StationId};

mod distance;
pub use self::distance::{distance, heuristic};

mod path;
pub use self::path::Path;

pub mod search;
pub use self::search::{find_path, find_path_with_config, SearchConfig, SearchOutcome};

/// The most commonly used Types and Functions of this crate.
pub mod prelude {
	pub use crate::search::{find_path, find_path_with_config, find_paths, SearchConfig, SearchOutcome};
	pub use crate::{Network, NetworkBuilder, NetworkError, Path, Position, SearchError, StationId};
}
