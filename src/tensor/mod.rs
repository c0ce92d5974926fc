mod data_type;
pub use data_type::{DataType, Element};
mod desc;
pub use desc::TensorDesc;
mod device;
mod layout;
pub use layout::{DataLayout, MemoryFormat};
mod tensor;
pub use tensor::{Place, Tensor};
