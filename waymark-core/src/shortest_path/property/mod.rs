//! Property-based tests for the Dijkstra engine.
//!
//! Compares distances against an exhaustive simple-path search on small
//! graphs and checks predecessor consistency (`d[v] == d[u] + w(u, v)`) on
//! larger generated graphs in both orientations.

mod oracle;
