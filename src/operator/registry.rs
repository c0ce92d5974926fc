use std::collections::HashMap;

use log::trace;

use crate::{
    execution::ExecutionContext,
    kernels,
    operator::kernel::{OpKernel, OpKernelType},
    utils::error::KernelError,
};

#[derive(Default)]
pub struct OpKernelRegistry {
    kernels: HashMap<OpKernelType, Box<dyn OpKernel>>,
}

impl OpKernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every kernel this crate provides.
    pub fn with_builtin_kernels() -> Result<Self, KernelError> {
        let mut registry = Self::new();
        kernels::register_all(&mut registry)?;
        Ok(registry)
    }

    pub fn register(&mut self, kernel: Box<dyn OpKernel>) -> Result<(), KernelError> {
        let key = kernel.kernel_type();
        if self.kernels.contains_key(&key) {
            return Err(KernelError::DuplicateKernel(key.to_string()));
        }

        trace!("Registering kernel {}", key);
        self.kernels.insert(key, kernel);
        Ok(())
    }

    pub fn contains(&self, key: &OpKernelType) -> bool {
        self.kernels.contains_key(key)
    }

    pub fn find(&self, key: &OpKernelType) -> Option<&dyn OpKernel> {
        self.kernels.get(key).map(|k| k.as_ref())
    }

    pub fn kernel_types_for(&self, op_type: &str) -> Vec<OpKernelType> {
        self.kernels
            .keys()
            .filter(|k| k.op_type == op_type)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }

    pub fn run(&self, key: &OpKernelType, ctx: &mut ExecutionContext) -> Result<(), KernelError> {
        let kernel = self
            .find(key)
            .ok_or_else(|| KernelError::KernelNotFound(key.to_string()))?;

        trace!("Running {:?} for {}", kernel, key);
        kernel.compute(ctx)
    }
}
