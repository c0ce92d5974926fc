use crate::{operator::OpKernelRegistry, utils::error::KernelError};

pub mod config;
pub use config::GaussianRandomConfig;
pub mod cpu;
pub mod gaussian_random;
pub use gaussian_random::GaussianRandomKernel;
pub mod gaussian_random_mkldnn;
pub use gaussian_random_mkldnn::GaussianMkldnnKernel;

pub const OP_TYPE: &str = "gaussian_random";
pub const OUTPUT: &str = "Out";

pub fn register_gaussian_random(registry: &mut OpKernelRegistry) -> Result<(), KernelError> {
    registry.register(Box::new(GaussianRandomKernel::<f32>::new()))?;
    registry.register(Box::new(GaussianRandomKernel::<f64>::new()))
}

pub fn register_gaussian_random_mkldnn(
    registry: &mut OpKernelRegistry,
) -> Result<(), KernelError> {
    registry.register(Box::new(GaussianMkldnnKernel::<f32>::new()))
}
