//! Pack topology: how cells are wired together.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult};

/// How the cells of a pack are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connection {
    Series,
    Parallel,
    SeriesParallel,
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Connection::Series => "series",
            Connection::Parallel => "parallel",
            Connection::SeriesParallel => "series-parallel",
        };
        f.write_str(label)
    }
}

impl FromStr for Connection {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "series" => Ok(Connection::Series),
            "parallel" => Ok(Connection::Parallel),
            "series-parallel" | "series_parallel" => Ok(Connection::SeriesParallel),
            other => Err(DesignError::UnknownConnection {
                label: other.to_string(),
            }),
        }
    }
}

/// Requested wiring of `num_cells` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackTopology {
    pub connection: Connection,
    /// Total cell count
    pub num_cells: u32,
    /// Cells per series string; required for series-parallel
    pub series_cells: Option<u32>,
    /// Parallel strings; required for series-parallel
    pub parallel_cells: Option<u32>,
}

impl PackTopology {
    pub fn series(num_cells: u32) -> Self {
        Self {
            connection: Connection::Series,
            num_cells,
            series_cells: None,
            parallel_cells: None,
        }
    }

    pub fn parallel(num_cells: u32) -> Self {
        Self {
            connection: Connection::Parallel,
            num_cells,
            series_cells: None,
            parallel_cells: None,
        }
    }

    pub fn series_parallel(num_cells: u32, series_cells: u32, parallel_cells: u32) -> Self {
        Self {
            connection: Connection::SeriesParallel,
            num_cells,
            series_cells: Some(series_cells),
            parallel_cells: Some(parallel_cells),
        }
    }

    /// Resolve to concrete series/parallel counts.
    ///
    /// Series-parallel requires both counts and rejects non-positive values.
    /// A count product that disagrees with `num_cells` is NOT an error; the
    /// calculation proceeds with the explicit counts and the mismatch flag
    /// set, for downstream rendering to surface as a warning.
    pub fn resolve(&self) -> DesignResult<ResolvedTopology> {
        match self.connection {
            Connection::Series => Ok(ResolvedTopology {
                series: self.num_cells,
                parallel: 1,
                mismatch: false,
            }),
            Connection::Parallel => Ok(ResolvedTopology {
                series: 1,
                parallel: self.num_cells,
                mismatch: false,
            }),
            Connection::SeriesParallel => {
                let series = self.series_cells.unwrap_or(0);
                let parallel = self.parallel_cells.unwrap_or(0);
                if series == 0 || parallel == 0 {
                    return Err(DesignError::InvalidArg {
                        what: "series and parallel counts required for series-parallel",
                    });
                }
                // Widened so extreme counts compare instead of overflowing.
                let product = u64::from(series) * u64::from(parallel);
                Ok(ResolvedTopology {
                    series,
                    parallel,
                    mismatch: product != u64::from(self.num_cells),
                })
            }
        }
    }
}

/// Concrete series/parallel layout after topology resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTopology {
    pub series: u32,
    pub parallel: u32,
    /// Set when declared counts disagree with `num_cells`
    pub mismatch: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_puts_all_cells_in_string() {
        let resolved = PackTopology::series(4).resolve().unwrap();
        assert_eq!(resolved.series, 4);
        assert_eq!(resolved.parallel, 1);
        assert!(!resolved.mismatch);
    }

    #[test]
    fn parallel_puts_all_cells_side_by_side() {
        let resolved = PackTopology::parallel(6).resolve().unwrap();
        assert_eq!(resolved.series, 1);
        assert_eq!(resolved.parallel, 6);
    }

    #[test]
    fn series_parallel_uses_explicit_counts() {
        let resolved = PackTopology::series_parallel(8, 4, 2).resolve().unwrap();
        assert_eq!(resolved.series, 4);
        assert_eq!(resolved.parallel, 2);
        assert!(!resolved.mismatch);
    }

    #[test]
    fn series_parallel_mismatch_is_flagged_not_rejected() {
        let resolved = PackTopology::series_parallel(5, 2, 3).resolve().unwrap();
        assert_eq!(resolved.series, 2);
        assert_eq!(resolved.parallel, 3);
        assert!(resolved.mismatch);
    }

    #[test]
    fn extreme_counts_flag_mismatch_without_overflow() {
        let resolved = PackTopology::series_parallel(10, u32::MAX, u32::MAX)
            .resolve()
            .unwrap();
        assert!(resolved.mismatch);
    }

    #[test]
    fn series_parallel_missing_counts_rejected() {
        let topo = PackTopology {
            connection: Connection::SeriesParallel,
            num_cells: 8,
            series_cells: Some(4),
            parallel_cells: None,
        };
        assert!(matches!(
            topo.resolve(),
            Err(DesignError::InvalidArg { .. })
        ));
    }

    #[test]
    fn connection_parsing() {
        assert_eq!("Series".parse::<Connection>().unwrap(), Connection::Series);
        assert_eq!(
            "series_parallel".parse::<Connection>().unwrap(),
            Connection::SeriesParallel
        );
        let err = "diagonal".parse::<Connection>().unwrap_err();
        assert!(matches!(err, DesignError::UnknownConnection { .. }));
    }
}
