//! Widgets shipped with rowkit.
//!
//! Currently a single widget family: the pull-to-refresh indicator in
//! [`refresh`].

pub mod refresh;
