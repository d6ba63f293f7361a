mod engagement;
mod error;
mod filters;
mod ids;
mod metrics;
mod staff;
mod time_entry;

pub use engagement::*;
pub use error::*;
pub use filters::*;
pub use ids::*;
pub use metrics::*;
pub use staff::*;
pub use time_entry::*;
