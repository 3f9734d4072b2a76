pub mod error;
pub mod value;

pub use error::{CoercionError, Target};
pub use value::Node;
