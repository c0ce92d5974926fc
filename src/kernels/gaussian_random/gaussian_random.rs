use num_traits::Float;
use rand_distr::{Distribution, StandardNormal};
use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use crate::{
    execution::ExecutionContext,
    kernels::gaussian_random::{OP_TYPE, cpu::gaussian_random_cpu},
    operator::{LibraryType, OpKernel, OpKernelType},
    tensor::{Element, Place},
    utils::error::KernelError,
};

/// gaussian_random for plain CPU execution. Leaves layout tags untouched.
pub struct GaussianRandomKernel<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> GaussianRandomKernel<T> {
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Default for GaussianRandomKernel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Debug for GaussianRandomKernel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GaussianRandomKernel<{}>", T::DATA_TYPE)
    }
}

impl<T> OpKernel for GaussianRandomKernel<T>
where
    T: Element + Float,
    StandardNormal: Distribution<T>,
{
    fn kernel_type(&self) -> OpKernelType {
        OpKernelType::new(OP_TYPE, Place::Cpu, T::DATA_TYPE, LibraryType::Plain)
    }

    fn compute(&self, ctx: &mut ExecutionContext) -> Result<(), KernelError> {
        gaussian_random_cpu::<T>(ctx)
    }
}
