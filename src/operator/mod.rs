pub mod kernel;
pub use kernel::{LibraryType, OpKernel, OpKernelType};
pub mod registry;
pub use registry::OpKernelRegistry;
pub mod shape;
pub use shape::get_shape;
