//! Integration tests, compiled as a single test binary.

mod helpers;

mod config_test;
mod timecode_test;
