//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the pattern logic
//! against mock adapters. All tests run on the host (x86_64) with no
//! real hardware required.

mod sequencer_tests;
