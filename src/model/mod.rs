//! Product types, their validation, and the records they persist as.

pub mod electronic;
pub mod item;
pub mod perishable;
pub mod product;
pub mod record;
pub mod validation;

pub use electronic::*;
pub use item::*;
pub use perishable::*;
pub use product::*;
pub use record::*;
pub use validation::*;
