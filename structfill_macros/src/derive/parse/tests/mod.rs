//! Unit tests for derive input and attribute parsing.
