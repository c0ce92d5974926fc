use crate::{operator::OpKernelRegistry, utils::error::KernelError};

pub mod gaussian_random;

pub fn register_all(registry: &mut OpKernelRegistry) -> Result<(), KernelError> {
    gaussian_random::register_gaussian_random(registry)?;
    gaussian_random::register_gaussian_random_mkldnn(registry)
}
