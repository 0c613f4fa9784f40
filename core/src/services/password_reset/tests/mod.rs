//! Unit tests for the password reset service

mod mocks;
mod service_tests;
