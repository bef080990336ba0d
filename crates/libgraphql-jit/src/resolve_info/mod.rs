//! Per-field-position resolver context.
//!
//! A [`ResolveInfoThunk`] is built once, at compile time, for each field
//! position of a query. It does all schema and fragment work up front so that
//! producing a [`ResolveInfo`] for an individual resolver call only clones a
//! handful of [`Arc`](std::sync::Arc)s.

#[allow(clippy::module_inception)]
mod resolve_info;
mod resolve_info_context;
mod resolve_info_thunk;
mod response_path;

pub use resolve_info::ResolveInfo;
pub use resolve_info_context::ResolveInfoContext;
pub use resolve_info_thunk::ResolveInfoThunk;
pub use resolve_info_thunk::create_resolve_info_thunk;
pub use response_path::PathSegment;
pub use response_path::ResponsePath;

#[cfg(test)]
mod tests;
