//! Tests for the markup engine

use super::*;

mod helpers;

mod tokenstream;

mod render_basic;
