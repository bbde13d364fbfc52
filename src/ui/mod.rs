//! UI utilities for terminal output
//!
//! This module provides progress spinners shown while talking to the server.

mod spinner;

pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_status, update_spinner};
