//! Domain types for the metro route planner.
//!
//! These types represent validated transit identities. Station keys arrive
//! already canonicalized by the upstream name-normalization pipeline; line
//! labels are carried verbatim from the source data and reduced to a
//! canonical form only where loop detection needs it.

mod line;
mod station;

pub use line::{CanonicalLine, LineLabel};
pub use station::StationKey;
