//! Resource accessors.
//!
//! Each accessor turns typed parameters into a path and optional body,
//! hands them to a [`Transport`](crate::Transport), and decodes the result.

mod repositories;

pub use repositories::RepositoriesService;
