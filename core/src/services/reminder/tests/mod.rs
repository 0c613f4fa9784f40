//! Unit tests for the reminder dispatch service
