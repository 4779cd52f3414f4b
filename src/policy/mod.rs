mod filter;
mod listing;
mod model;

pub use filter::*;
pub use listing::*;
pub use model::*;
