// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the union computation.

use core::fmt;

use kurbo::Rect;

/// Error returned when a union cannot be computed.
#[derive(Clone, Debug, PartialEq)]
pub enum UnionError {
    /// A rectangle had a NaN or infinite coordinate, or was inverted
    /// (`x0 > x1` or `y0 > y1`).
    InvalidRect {
        /// Position of the offending rectangle in the caller's list.
        index: usize,
        /// The rectangle as supplied.
        rect: Rect,
    },
    /// A numeric parameter was out of range.
    InvalidParameter {
        /// Name of the parameter (`"inset"` or `"corner_radius"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The sweep or loop assembly broke one of its own invariants.
    ///
    /// This indicates a defect rather than bad input.
    Inconsistent(ConsistencyError),
}

impl fmt::Display for UnionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRect { index, rect } => write!(
                f,
                "rectangle {index} is invalid: ({}, {}) - ({}, {})",
                rect.x0, rect.y0, rect.x1, rect.y1
            ),
            Self::InvalidParameter { name, value } => {
                write!(f, "parameter `{name}` has invalid value {value}")
            }
            Self::Inconsistent(err) => write!(f, "internal consistency violation: {err}"),
        }
    }
}

impl core::error::Error for UnionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Inconsistent(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConsistencyError> for UnionError {
    fn from(err: ConsistencyError) -> Self {
        Self::Inconsistent(err)
    }
}

/// An internal invariant that failed during a union computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConsistencyError {
    /// A rectangle edge coordinate was missing from the coordinate index.
    UnindexedCoordinate,
    /// A tree node's cached status disagreed with its counts and children.
    StatusMismatch {
        /// Arena index of the node.
        node: usize,
    },
    /// A tree node's insertion count went below zero.
    NegativeCount {
        /// Arena index of the node.
        node: usize,
    },
    /// Coverage remained in the tree after every right edge was swept.
    ResidualCoverage,
    /// Two boundary endpoints paired at a y-level were not one end and one start.
    MismatchedVertices {
        /// The y-coordinate of the pairing.
        y: f64,
    },
    /// A boundary side was given a successor twice.
    SuccessorLinkedTwice {
        /// Index of the side.
        side: usize,
    },
    /// A boundary side never received a successor.
    UnlinkedSide {
        /// Index of the side.
        side: usize,
    },
    /// Following successor links from `start` revisited a side without
    /// returning to `start`.
    OpenLoop {
        /// Index of the side the trace started from.
        start: usize,
    },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnindexedCoordinate => f.write_str("edge coordinate missing from index"),
            Self::StatusMismatch { node } => {
                write!(f, "cached status of tree node {node} is stale")
            }
            Self::NegativeCount { node } => {
                write!(f, "insertion count of tree node {node} is negative")
            }
            Self::ResidualCoverage => f.write_str("coverage left in tree after sweep"),
            Self::MismatchedVertices { y } => {
                write!(f, "boundary endpoints at y = {y} do not pair end-to-start")
            }
            Self::SuccessorLinkedTwice { side } => {
                write!(f, "boundary side {side} linked to two successors")
            }
            Self::UnlinkedSide { side } => write!(f, "boundary side {side} has no successor"),
            Self::OpenLoop { start } => {
                write!(f, "loop starting at boundary side {start} does not close")
            }
        }
    }
}

impl core::error::Error for ConsistencyError {}
