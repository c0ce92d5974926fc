//! gaussian_kernel - the gaussian_random operator kernel and the minimal
//! operator runtime it executes in.
//!
//! Kernels are looked up in an [`OpKernelRegistry`] by operator name, place,
//! element type and library, then run against an [`ExecutionContext`] that
//! carries attributes, tensors and the process random [`Generator`].

mod execution;

mod generator;

mod kernels;

mod operator;

mod tensor;

mod utils;

pub use execution::{Attribute, ExecutionContext, FromAttribute};
pub use generator::{
    DEFAULT_CPU_SEED, Generator, MinstdRand, Mt19937_64, default_generator,
};
pub use kernels::gaussian_random::{
    GaussianMkldnnKernel, GaussianRandomConfig, GaussianRandomKernel, OP_TYPE as GAUSSIAN_RANDOM,
    OUTPUT as GAUSSIAN_RANDOM_OUTPUT, cpu::fill_normal, register_gaussian_random,
    register_gaussian_random_mkldnn,
};
pub use operator::{LibraryType, OpKernel, OpKernelRegistry, OpKernelType, get_shape};
pub use tensor::{DataLayout, DataType, Element, MemoryFormat, Place, Tensor, TensorDesc};
pub use utils::error::KernelError;
