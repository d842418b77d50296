use std::fmt;

use tilepath_core::{GridError, Point};

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointReason {
    /// Outside the grid.
    OutOfBounds,
    /// Inside the grid but on the excluded outer ring.
    Border,
    /// On a blocked cell.
    Blocked,
}

/// Errors reported by [`Pathfinder`](crate::Pathfinder).
///
/// Not finding a path is not an error: searches return `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The walkability source could not be turned into a grid.
    InvalidGrid(GridError),
    /// A start or goal cell cannot be searched from or to.
    InvalidEndpoint {
        which: Endpoint,
        pos: Point,
        reason: EndpointReason,
    },
    /// The search closed `limit` cells without reaching the goal.
    StepBudgetExceeded { limit: usize },
    /// The caller's cancellation check asked the search to stop.
    Cancelled,
    /// Following parent links from `goal` did not reach the start.
    ParentCycle { goal: Point },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            Self::InvalidEndpoint { which, pos, reason } => {
                let why = match reason {
                    EndpointReason::OutOfBounds => "is out of bounds",
                    EndpointReason::Border => "lies on the grid border",
                    EndpointReason::Blocked => "is blocked",
                };
                write!(f, "{which} {pos} {why}")
            }
            Self::StepBudgetExceeded { limit } => {
                write!(f, "search gave up after closing {limit} cells")
            }
            Self::Cancelled => f.write_str("search cancelled"),
            Self::ParentCycle { goal } => {
                write!(f, "parent links from {goal} do not lead back to the start")
            }
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        let e = PathError::InvalidEndpoint {
            which: Endpoint::Goal,
            pos: Point::new(0, 3),
            reason: EndpointReason::Border,
        };
        assert_eq!(e.to_string(), "goal (0, 3) lies on the grid border");
        assert_eq!(
            PathError::StepBudgetExceeded { limit: 5 }.to_string(),
            "search gave up after closing 5 cells"
        );
    }

    #[test]
    fn grid_error_is_source() {
        let e = PathError::from(GridError::Empty);
        assert_eq!(e.to_string(), "invalid grid: grid: input is empty");
        assert!(e.source().is_some());
        assert!(PathError::Cancelled.source().is_none());
    }
}
