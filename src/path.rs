/// A Path through the Network
///
/// Stores a sequence of Stations in `path` and the total Cost of travelling along it in `cost`.
/// Note that the Costs of the individual Links cannot be retrieved through this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: f64,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Stations and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use transit_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.5);
    ///
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.cost(), 4.5);
    /// ```
    pub fn new(path: Vec<P>, cost: f64) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// the number of Stations on the Path, including start and goal
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Stations
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns an Iterator over the Path
    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    /// Consumes the Path, returning the sequence of Stations
    pub fn into_inner(self) -> Vec<P> {
        self.path
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::cmp::Ordering;

impl<P: PartialEq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}
