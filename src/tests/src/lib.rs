//! Integration tests for the relay faucet.

pub mod distribution_tests;
