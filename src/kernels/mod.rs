//! FFT Butterfly Kernels
//!
//! This module contains the radix-2, radix-3, radix-4 and radix-5 butterflies and the
//! Stockham pass loops built on them. Each pass exists in two tiers: a portable build and
//! a build dispatched at runtime to the best instruction set the CPU supports.
//!
//! ## Organization
//!
//! - `common`: Butterfly primitives
//! - `stockham`: Pass loops and tier entry points

pub mod common;
pub mod stockham;
