pub mod annotation;
pub mod filters;
pub mod macros;
pub mod star;

pub use annotation::*;
pub use filters::*;
pub use star::*;
