//! FFT Algorithm Implementations
//!
//! This module contains the stage driver that runs a [`crate::planner::TransformDescriptor`]
//! against a buffer.
//!
//! ## Available Algorithms
//!
//! - **Mixed-radix Stockham**: radix-2/3/4/5 passes in the order the descriptor records
//!   them, ping-ponging between the caller's buffer and a scratch buffer. Input and
//!   output are both in natural order.

pub mod mixed_radix;
