//! Integration tests for cutreview

mod authority_test;
mod cli_test;
mod helpers;
