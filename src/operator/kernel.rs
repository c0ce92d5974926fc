use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::{
    execution::ExecutionContext,
    tensor::{DataType, Place},
    utils::error::KernelError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LibraryType {
    Plain,
    Mkldnn,
}

/// Dispatch key: one kernel per operator, place, element type and library.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpKernelType {
    pub op_type: String,
    pub place: Place,
    pub data_type: DataType,
    pub library: LibraryType,
}

impl OpKernelType {
    pub fn new(op_type: &str, place: Place, data_type: DataType, library: LibraryType) -> Self {
        Self {
            op_type: op_type.to_string(),
            place,
            data_type,
            library,
        }
    }
}

impl Display for OpKernelType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}[place={:?}, data_type={}, library={:?}]",
            self.op_type, self.place, self.data_type, self.library
        )
    }
}

pub trait OpKernel: Debug + Send + Sync {
    // Key this kernel is registered under
    fn kernel_type(&self) -> OpKernelType;

    // Run once against the context, writing only its outputs
    fn compute(&self, ctx: &mut ExecutionContext) -> Result<(), KernelError>;
}
