//! Console rendering of lookup results

pub mod console;
