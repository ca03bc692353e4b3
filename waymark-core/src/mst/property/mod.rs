//! Property-based tests for Kruskal's spanning forest builder.
//!
//! Checks the builder against an exhaustive spanning-forest oracle on small
//! graphs, verifies structural invariants (acyclicity, edge count, component
//! count) on larger generated graphs, and asserts that the compressed and
//! uncompressed forests select identical edges.

mod oracle;
mod structural;
