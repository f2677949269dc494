pub mod forecast;
pub mod historical;
pub mod recommendation;

pub use forecast::*;
pub use historical::*;
pub use recommendation::*;
