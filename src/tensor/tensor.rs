use bytemuck::{try_cast_slice, try_cast_slice_mut};

use crate::{
    tensor::{
        DataLayout, DataType, Element, MemoryFormat, desc::TensorDesc, device::cpu::CpuData,
    },
    utils::error::KernelError,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Place {
    #[default]
    Cpu,
}

pub struct Tensor {
    pub desc: TensorDesc,
    place: Place,
    buffer: Option<CpuData>,
    layout: DataLayout,
    format: MemoryFormat,
}

impl Tensor {
    /// Create an unallocated tensor. Storage is created by `mutable_data`.
    pub fn new_unallocated(dims: Vec<i64>, data_type: DataType) -> Result<Self, KernelError> {
        let desc = TensorDesc::new(dims, data_type).map_err(KernelError::InvalidShape)?;
        Ok(Self {
            desc,
            place: Place::Cpu,
            buffer: None,
            layout: DataLayout::default(),
            format: MemoryFormat::default(),
        })
    }

    /// Create a CPU tensor from host values.
    pub fn from_vec<T: Element>(dims: Vec<i64>, values: &[T]) -> Result<Self, KernelError> {
        let mut tensor = Self::new_unallocated(dims, T::DATA_TYPE)?;
        if tensor.numel() != values.len() {
            return Err(KernelError::Allocation(format!(
                "{} values supplied for shape {:?}",
                values.len(),
                tensor.dims()
            )));
        }
        tensor
            .mutable_data::<T>(Place::Cpu)?
            .copy_from_slice(values);
        Ok(tensor)
    }

    pub fn dims(&self) -> &[i64] {
        self.desc.dims()
    }

    pub fn numel(&self) -> usize {
        self.desc.num_elements()
    }

    pub fn data_type(&self) -> DataType {
        self.desc.data_type()
    }

    pub fn place(&self) -> Place {
        self.place
    }

    pub fn layout(&self) -> DataLayout {
        self.layout
    }

    pub fn format(&self) -> MemoryFormat {
        self.format
    }

    pub fn set_layout(&mut self, layout: DataLayout) {
        self.layout = layout;
    }

    pub fn set_format(&mut self, format: MemoryFormat) {
        self.format = format;
    }

    pub fn is_initialized(&self) -> bool {
        self.buffer.is_some()
    }

    /// Change the shape. Storage is left untouched until the next
    /// `mutable_data` call, which reallocates if the byte size changed.
    /// Negative dims and element or byte counts that overflow `usize` are
    /// rejected and leave the shape unchanged.
    pub fn resize(&mut self, dims: &[i64]) -> Result<(), KernelError> {
        self.desc
            .set_dims(dims.to_vec())
            .map_err(KernelError::InvalidShape)
    }

    /// Writable view over exactly `numel()` elements of `T` on `place`.
    ///
    /// Reallocates (zero-filled) when the current storage does not match the
    /// requested type, size or place; previous contents are not preserved.
    pub fn mutable_data<T: Element>(&mut self, place: Place) -> Result<&mut [T], KernelError> {
        let required = self
            .desc
            .size_in_bytes_as(T::DATA_TYPE)
            .map_err(KernelError::Allocation)?;

        let reusable = self.place == place
            && self
                .buffer
                .as_ref()
                .is_some_and(|b| b.len_bytes() == required);

        if !reusable {
            self.buffer = Some(CpuData::zeroed(required)?);
            self.place = place;
        }
        self.desc
            .set_data_type(T::DATA_TYPE)
            .map_err(KernelError::Allocation)?;

        let numel = self.numel();
        let buffer = self.buffer.as_mut().ok_or(KernelError::Unallocated)?;
        let typed: &mut [T] = try_cast_slice_mut(buffer.as_bytes_mut())
            .map_err(|e| KernelError::Allocation(format!("byte view cast failed: {:?}", e)))?;

        debug_assert_eq!(typed.len(), numel);
        Ok(typed)
    }

    /// Read view over the tensor's elements.
    pub fn data<T: Element>(&self) -> Result<&[T], KernelError> {
        if self.data_type() != T::DATA_TYPE {
            return Err(KernelError::TensorType {
                expected: T::DATA_TYPE,
                found: self.data_type(),
            });
        }

        let buffer = self.buffer.as_ref().ok_or(KernelError::Unallocated)?;
        if buffer.len_bytes() != self.desc.size_in_bytes() {
            // Resized without a following mutable_data call
            return Err(KernelError::Unallocated);
        }

        try_cast_slice(buffer.as_bytes())
            .map_err(|e| KernelError::Allocation(format!("byte view cast failed: {:?}", e)))
    }

    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, KernelError> {
        Ok(self.data::<T>()?.to_vec())
    }
}

impl Default for Tensor {
    fn default() -> Self {
        Self {
            desc: TensorDesc::default(),
            place: Place::Cpu,
            buffer: None,
            layout: DataLayout::default(),
            format: MemoryFormat::default(),
        }
    }
}
