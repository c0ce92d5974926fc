use crate::tensor::DataType;

/// Shape and element type of a tensor.
///
/// Element count and byte size are validated to fit `usize` whenever the
/// dims or the data type change, so the accessors never overflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorDesc {
    dims: Vec<i64>,
    num_elements: usize,
    data_type: DataType,
}

impl TensorDesc {
    pub fn new(dims: Vec<i64>, data_type: DataType) -> Result<Self, String> {
        let num_elements = Self::checked_num_elements(&dims)?;
        Self::checked_size_in_bytes(&dims, num_elements, data_type)?;
        Ok(Self {
            dims,
            num_elements,
            data_type,
        })
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn set_data_type(&mut self, data_type: DataType) -> Result<(), String> {
        Self::checked_size_in_bytes(&self.dims, self.num_elements, data_type)?;
        self.data_type = data_type;
        Ok(())
    }

    // Rank 0 describes a scalar and holds one element
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    // Checked against overflow when dims or data type were set
    pub fn size_in_bytes(&self) -> usize {
        self.num_elements * self.data_type.size_in_bytes()
    }

    /// Byte size the tensor would need if it held `data_type` elements.
    pub fn size_in_bytes_as(&self, data_type: DataType) -> Result<usize, String> {
        Self::checked_size_in_bytes(&self.dims, self.num_elements, data_type)
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    // Replace dimensions; element count is allowed to change
    pub fn set_dims(&mut self, new_dims: Vec<i64>) -> Result<(), String> {
        let num_elements = Self::checked_num_elements(&new_dims)?;
        Self::checked_size_in_bytes(&new_dims, num_elements, self.data_type)?;
        self.dims = new_dims;
        self.num_elements = num_elements;
        Ok(())
    }

    /// Product of `dims`, rejecting negative dimensions and `usize` overflow.
    pub fn checked_num_elements(dims: &[i64]) -> Result<usize, String> {
        dims.iter().try_fold(1usize, |acc, d| {
            let d = usize::try_from(*d).map_err(|_| {
                format!(
                    "Tensor dimensions must be non-negative, got {} in {:?}",
                    d, dims
                )
            })?;
            acc.checked_mul(d)
                .ok_or_else(|| format!("Element count of {:?} overflows usize", dims))
        })
    }

    fn checked_size_in_bytes(
        dims: &[i64],
        num_elements: usize,
        data_type: DataType,
    ) -> Result<usize, String> {
        num_elements
            .checked_mul(data_type.size_in_bytes())
            .ok_or_else(|| format!("Byte size of {:?} {} overflows usize", dims, data_type))
    }
}

impl Default for TensorDesc {
    fn default() -> Self {
        Self {
            dims: vec![0],
            num_elements: 0,
            data_type: DataType::Float32,
        }
    }
}
