pub mod attribute;
pub use attribute::{Attribute, FromAttribute};
pub mod context;
pub use context::ExecutionContext;
