use log::debug;
use num_traits::Float;
use rand_distr::{Distribution, StandardNormal};
use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    marker::PhantomData,
};

use crate::{
    execution::ExecutionContext,
    kernels::gaussian_random::{OP_TYPE, OUTPUT, cpu::gaussian_random_cpu},
    operator::{LibraryType, OpKernel, OpKernelType},
    tensor::{DataLayout, Element, MemoryFormat, Place},
    utils::error::KernelError,
};

/// gaussian_random for the MKLDNN execution path.
///
/// Samples exactly like the plain CPU kernel, then tags the output for
/// MKLDNN consumers. The format tag is always `Oihw`, whatever the rank of
/// the resolved shape.
pub struct GaussianMkldnnKernel<T> {
    _element: PhantomData<fn() -> T>,
}

impl<T> GaussianMkldnnKernel<T> {
    pub fn new() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<T> Default for GaussianMkldnnKernel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Debug for GaussianMkldnnKernel<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GaussianMkldnnKernel<{}>", T::DATA_TYPE)
    }
}

impl<T> OpKernel for GaussianMkldnnKernel<T>
where
    T: Element + Float,
    StandardNormal: Distribution<T>,
{
    fn kernel_type(&self) -> OpKernelType {
        OpKernelType::new(OP_TYPE, Place::Cpu, T::DATA_TYPE, LibraryType::Mkldnn)
    }

    fn compute(&self, ctx: &mut ExecutionContext) -> Result<(), KernelError> {
        gaussian_random_cpu::<T>(ctx)?;

        let out = ctx.output_mut(OUTPUT)?;
        let format = MemoryFormat::Oihw;
        if format.ndims() != Some(out.dims().len()) {
            debug!(
                "{}: tagging rank-{} output {:?} with {:?}",
                OP_TYPE,
                out.dims().len(),
                out.dims(),
                format
            );
        }
        out.set_layout(DataLayout::Mkldnn);
        out.set_format(format);
        Ok(())
    }
}
