use thiserror::Error;

use crate::tensor::DataType;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Attribute '{0}' not found in execution context")]
    MissingAttribute(String),

    #[error("Attribute '{name}' has type {found}, expected {expected}")]
    AttributeType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid value for attribute '{name}': {message}")]
    InvalidAttribute { name: String, message: String },

    #[error("Output '{0}' not found in execution context")]
    MissingOutput(String),

    #[error("Input '{0}' not found in execution context")]
    MissingInput(String),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Tensor holds {found:?} data, requested {expected:?}")]
    TensorType { expected: DataType, found: DataType },

    #[error("Tensor has no allocated storage")]
    Unallocated,

    #[error("Allocation error: {0}")]
    Allocation(String),

    #[error("No kernel registered for {0}")]
    KernelNotFound(String),

    #[error("Kernel already registered for {0}")]
    DuplicateKernel(String),

    #[error("Generator error: {0}")]
    Generator(String),
}
