use crate::utils::error::KernelError;

/// Operator attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    String(String),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
    Floats(Vec<f32>),
}

impl Attribute {
    pub fn type_name(&self) -> &'static str {
        match self {
            Attribute::Bool(_) => "bool",
            Attribute::Int(_) => "int",
            Attribute::Long(_) => "long",
            Attribute::Float(_) => "float",
            Attribute::String(_) => "string",
            Attribute::Ints(_) => "ints",
            Attribute::Longs(_) => "longs",
            Attribute::Floats(_) => "floats",
        }
    }
}

/// Typed extraction of an attribute value.
pub trait FromAttribute: Sized {
    const TYPE_NAME: &'static str;

    fn from_attribute(attr: &Attribute) -> Option<Self>;

    fn extract(name: &str, attr: &Attribute) -> Result<Self, KernelError> {
        Self::from_attribute(attr).ok_or_else(|| KernelError::AttributeType {
            name: name.to_string(),
            expected: Self::TYPE_NAME,
            found: attr.type_name(),
        })
    }
}

impl FromAttribute for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for i32 {
    const TYPE_NAME: &'static str = "int";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for i64 {
    const TYPE_NAME: &'static str = "long";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Long(v) => Some(*v),
            Attribute::Int(v) => Some(*v as i64),
            _ => None,
        }
    }
}

impl FromAttribute for f32 {
    const TYPE_NAME: &'static str = "float";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromAttribute for String {
    const TYPE_NAME: &'static str = "string";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromAttribute for Vec<i32> {
    const TYPE_NAME: &'static str = "ints";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Ints(v) => Some(v.clone()),
            _ => None,
        }
    }
}

// Shapes may be declared with either integer width
impl FromAttribute for Vec<i64> {
    const TYPE_NAME: &'static str = "longs";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Longs(v) => Some(v.clone()),
            Attribute::Ints(v) => Some(v.iter().map(|d| *d as i64).collect()),
            _ => None,
        }
    }
}

impl FromAttribute for Vec<f32> {
    const TYPE_NAME: &'static str = "floats";

    fn from_attribute(attr: &Attribute) -> Option<Self> {
        match attr {
            Attribute::Floats(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl From<bool> for Attribute {
    fn from(v: bool) -> Self {
        Attribute::Bool(v)
    }
}

impl From<i32> for Attribute {
    fn from(v: i32) -> Self {
        Attribute::Int(v)
    }
}

impl From<i64> for Attribute {
    fn from(v: i64) -> Self {
        Attribute::Long(v)
    }
}

impl From<f32> for Attribute {
    fn from(v: f32) -> Self {
        Attribute::Float(v)
    }
}

impl From<&str> for Attribute {
    fn from(v: &str) -> Self {
        Attribute::String(v.to_string())
    }
}

impl From<Vec<i32>> for Attribute {
    fn from(v: Vec<i32>) -> Self {
        Attribute::Ints(v)
    }
}

impl From<Vec<i64>> for Attribute {
    fn from(v: Vec<i64>) -> Self {
        Attribute::Longs(v)
    }
}

impl From<Vec<f32>> for Attribute {
    fn from(v: Vec<f32>) -> Self {
        Attribute::Floats(v)
    }
}
