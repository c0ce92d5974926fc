use crate::{
    execution::ExecutionContext,
    tensor::{DataType, Tensor, TensorDesc},
    utils::error::KernelError,
};

pub const SHAPE_TENSOR: &str = "ShapeTensor";
pub const SHAPE_TENSOR_LIST: &str = "ShapeTensorList";
pub const SHAPE_ATTR: &str = "shape";

fn invalid(op_type: &str, message: String) -> KernelError {
    KernelError::InvalidShape(format!("{}: {}", op_type, message))
}

fn integer_values(op_type: &str, name: &str, tensor: &Tensor) -> Result<Vec<i64>, KernelError> {
    match tensor.data_type() {
        DataType::Int32 => Ok(tensor.data::<i32>()?.iter().map(|v| *v as i64).collect()),
        DataType::Int64 => Ok(tensor.data::<i64>()?.to_vec()),
        other => Err(invalid(
            op_type,
            format!("{} must hold int32 or int64 values, got {}", name, other),
        )),
    }
}

/// Resolve an operator's output shape.
///
/// A `ShapeTensor` input wins over a `ShapeTensorList`, which wins over the
/// `shape` attribute.
pub fn get_shape(op_type: &str, ctx: &ExecutionContext) -> Result<Vec<i64>, KernelError> {
    let shape = if ctx.has_input(SHAPE_TENSOR) {
        integer_values(op_type, SHAPE_TENSOR, ctx.input(SHAPE_TENSOR)?)?
    } else if !ctx.multi_input(SHAPE_TENSOR_LIST).is_empty() {
        let mut dims = Vec::new();
        for (i, tensor) in ctx.multi_input(SHAPE_TENSOR_LIST).iter().enumerate() {
            if tensor.numel() != 1 {
                return Err(invalid(
                    op_type,
                    format!(
                        "{}[{}] must hold exactly one element, got shape {:?}",
                        SHAPE_TENSOR_LIST,
                        i,
                        tensor.dims()
                    ),
                ));
            }
            dims.extend(integer_values(op_type, SHAPE_TENSOR_LIST, tensor)?);
        }
        dims
    } else {
        ctx.attr_or::<Vec<i64>>(SHAPE_ATTR, Vec::new())?
    };

    // Negative dims and element counts past usize
    TensorDesc::checked_num_elements(&shape).map_err(|message| invalid(op_type, message))?;

    Ok(shape)
}
