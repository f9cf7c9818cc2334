//! A pattern-path URL router.
//!
//! `routeset` matches request paths against a set of registered path
//! templates and returns *every* matching route, together with the values
//! captured by the template's named parameters. It is a pure set-returning
//! matcher: overlapping routes all show up in the result, in registration
//! order, and any precedence policy is left to the caller.
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use routeset::Router;
//!
//! let mut router = Router::new();
//! router.add("/home", "Welcome!")?;
//! router.add("/users/{id}", "A User")?;
//!
//! let matched = router.destinations("/users/978");
//! assert_eq!(matched.len(), 1);
//! assert_eq!(*matched[0].destination, "A User");
//! assert_eq!(matched[0].params.get("id"), Some("978"));
//! # Ok(())
//! # }
//! ```
//!
//! # Template Syntax
//!
//! A template is a `/`-separated string. Each segment is one of:
//!
//! | Token | Meaning |
//! |---|---|
//! | `{name}` | named parameter, matches one-or-more non-slash characters, non-greedy |
//! | `{name:pattern}` | named parameter constrained to the regex `pattern` |
//! | `**` | unnamed wildcard, matches across slash boundaries, non-greedy |
//! | any other text | literal, matched verbatim |
//!
//! Repeated slashes collapse to one and a single trailing slash is ignored,
//! both in templates and in request paths, so `/users/42` and `/users/42/`
//! are equivalent.
//!
//! # Building and serving
//!
//! Registration takes `&mut self` and lookup takes `&self`, so the borrow
//! checker enforces the intended two-phase lifecycle: register every route
//! during single-threaded setup, then share the router (for example behind
//! an `Arc`) with request-handling workers. Lookup is synchronous, CPU-bound
//! regex evaluation over immutable state.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod path;
mod router;
mod template;

pub use error::TemplateError;
pub use params::{Params, ParamsIter};
pub use router::{RouteMatch, Router};
