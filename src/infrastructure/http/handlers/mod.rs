//! HTTP Handlers

mod line;
mod ping;
mod section;
mod station;

pub use line::*;
pub use ping::*;
pub use section::*;
pub use station::*;
