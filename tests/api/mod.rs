//! API integration tests, grouped by endpoint family

pub mod auth_test;
