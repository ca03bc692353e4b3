//! Error types for the waymark core library.
//!
//! Each public error enum carries a stable machine-readable code so the CLI
//! and downstream tooling can report failures without matching on display
//! strings.

use std::{fmt, io, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Renders a vertex or heap key for inclusion in an error payload.
pub(crate) fn describe<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// `make_set` was called twice for the same vertex.
    #[error("vertex {vertex} already owns a set")]
    DuplicateVertex {
        /// Debug rendering of the duplicated vertex.
        vertex: String,
    },
    /// A vertex was queried before `make_set` registered it.
    #[error("vertex {vertex} was never registered with make_set")]
    UnknownVertex {
        /// Debug rendering of the unregistered vertex.
        vertex: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// `make_set` was called twice for the same vertex.
        DuplicateVertex => DuplicateVertex { .. } => "UNION_FIND_DUPLICATE_VERTEX",
        /// A vertex was queried before `make_set` registered it.
        UnknownVertex => UnknownVertex { .. } => "UNION_FIND_UNKNOWN_VERTEX",
    }
}

/// An error produced by [`crate::MinHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// `extract_min` was called on an empty heap.
    #[error("cannot extract from an empty heap")]
    EmptyHeap,
    /// The key is not (or no longer) present in the heap.
    #[error("key {key} is not present in the heap")]
    UnknownKey {
        /// Debug rendering of the missing key.
        key: String,
    },
    /// The key is already present in the heap.
    #[error("key {key} is already present in the heap")]
    DuplicateKey {
        /// Debug rendering of the duplicated key.
        key: String,
    },
    /// `decrease_key` was asked to raise a priority.
    #[error("decrease_key would raise the priority of key {key}")]
    PriorityIncrease {
        /// Debug rendering of the offending key.
        key: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// `extract_min` was called on an empty heap.
        EmptyHeap => EmptyHeap => "HEAP_EMPTY",
        /// The key is not present in the heap.
        UnknownKey => UnknownKey { .. } => "HEAP_UNKNOWN_KEY",
        /// The key is already present in the heap.
        DuplicateKey => DuplicateKey { .. } => "HEAP_DUPLICATE_KEY",
        /// `decrease_key` was asked to raise a priority.
        PriorityIncrease => PriorityIncrease { .. } => "HEAP_PRIORITY_INCREASE",
    }
}

/// Describes why an edge-list line failed to parse.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum LineDefect {
    /// The line ended before the named field.
    #[error("missing {field}")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
    /// The line carried more than three fields.
    #[error("unexpected trailing field `{extra}`")]
    TrailingField {
        /// First surplus token.
        extra: String,
    },
    /// A vertex token could not be parsed into the requested vertex type.
    #[error("invalid vertex `{raw}`")]
    InvalidVertex {
        /// Raw token as it appeared in the input.
        raw: String,
    },
    /// The weight was not a non-negative integer.
    #[error("invalid weight `{raw}`")]
    InvalidWeight {
        /// Raw token as it appeared in the input.
        raw: String,
    },
}

/// An error produced while reading an edge list.
#[non_exhaustive]
#[derive(Clone, Debug, Error)]
pub enum EdgeListError {
    /// A line did not parse into two vertices and a non-negative weight.
    #[error("line {line}: {defect} in `{content}`")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line with surrounding whitespace trimmed.
        content: String,
        /// What was wrong with the line.
        #[source]
        defect: LineDefect,
    },
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Io {
        /// One-based number of the line being read.
        line: usize,
        /// Error raised by the reader.
        #[source]
        source: Arc<io::Error>,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// A line did not parse into two vertices and a non-negative weight.
        MalformedLine => MalformedLine { .. } => "EDGE_LIST_MALFORMED_LINE",
        /// The underlying reader failed.
        Io => Io { .. } => "EDGE_LIST_IO",
    }
}

/// Error type produced by the graph algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex passed to an algorithm is not part of the graph.
    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex {
        /// Debug rendering of the missing vertex.
        vertex: String,
    },
    /// A tentative distance exceeded `u64::MAX`.
    #[error("distance to vertex {vertex} overflows u64")]
    DistanceOverflow {
        /// Debug rendering of the vertex whose distance overflowed.
        vertex: String,
    },
    /// The priority queue reported an invariant violation.
    #[error("priority queue invariant violated: {0}")]
    Heap(#[from] HeapError),
    /// The disjoint-set forest reported an invariant violation.
    #[error("disjoint-set invariant violated: {0}")]
    UnionFind(#[from] UnionFindError),
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex passed to an algorithm is not part of the graph.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// A tentative distance exceeded `u64::MAX`.
        DistanceOverflow => DistanceOverflow { .. } => "GRAPH_DISTANCE_OVERFLOW",
        /// The priority queue reported an invariant violation.
        Heap => Heap { .. } => "GRAPH_HEAP_INVARIANT",
        /// The disjoint-set forest reported an invariant violation.
        UnionFind => UnionFind { .. } => "GRAPH_UNION_FIND_INVARIANT",
    }
}

impl GraphError {
    /// Retrieve the code of the nested heap or union-find error, if any.
    pub const fn detail_code(&self) -> Option<&'static str> {
        match self {
            Self::Heap(inner) => Some(inner.code().as_str()),
            Self::UnionFind(inner) => Some(inner.code().as_str()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the graph algorithms.
pub type Result<T> = core::result::Result<T, GraphError>;
