use std::fmt::{Display, Formatter, Result as FmtResult};

/// Logical layout tag consumed by the execution layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataLayout {
    Nhwc,
    Nchw,
    #[default]
    AnyLayout,
    // Data is laid out for the MKLDNN primitives and described by a MemoryFormat
    Mkldnn,
}

/// MKLDNN memory format tags. Only meaningful when the layout is `Mkldnn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MemoryFormat {
    #[default]
    Undef,
    Any,
    X,
    Nc,
    Nchw,
    Nhwc,
    // Convolution weights: output channels, input channels, height, width
    Oihw,
}

impl MemoryFormat {
    /// Rank the format describes, `None` for the untyped tags.
    pub fn ndims(&self) -> Option<usize> {
        match self {
            MemoryFormat::Undef | MemoryFormat::Any => None,
            MemoryFormat::X => Some(1),
            MemoryFormat::Nc => Some(2),
            MemoryFormat::Nchw | MemoryFormat::Nhwc | MemoryFormat::Oihw => Some(4),
        }
    }
}

impl Display for DataLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            DataLayout::Nhwc => "NHWC",
            DataLayout::Nchw => "NCHW",
            DataLayout::AnyLayout => "ANY_LAYOUT",
            DataLayout::Mkldnn => "MKLDNNLAYOUT",
        };
        write!(f, "{}", name)
    }
}
