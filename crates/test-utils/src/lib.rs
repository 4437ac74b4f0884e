//! Shared test utilities for the weather symbol workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Fragment markup fixtures
//! - Asset directory generators
//! - Path helpers for the bundled assets
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{create_asset_tree, fixtures};
//! ```

pub mod fixtures;
pub mod generators;
pub mod paths;

// Re-export commonly used items at the crate root
pub use generators::*;
pub use paths::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Assert that `needle` occurs exactly `count` times in `haystack`.
#[macro_export]
macro_rules! assert_occurrences {
    ($haystack:expr, $needle:expr, $count:expr) => {{
        let haystack: &str = &$haystack;
        let needle: &str = &$needle;
        let found = haystack.matches(needle).count();
        if found != $count {
            panic!(
                "expected {} occurrence(s) of {:?}, found {}\n--- document ---\n{}",
                $count, needle, found, haystack
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_occurrences() {
        assert_occurrences!("<defs><defs>", "<defs>", 2);
    }

    #[test]
    #[should_panic(expected = "expected 1 occurrence")]
    fn test_assert_occurrences_fails() {
        assert_occurrences!("abab", "ab", 1);
    }
}
