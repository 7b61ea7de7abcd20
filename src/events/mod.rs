//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: workflow server interactions
//! - Terminal events: user input and the tick driving the search timer

pub mod network;
pub mod terminal;
