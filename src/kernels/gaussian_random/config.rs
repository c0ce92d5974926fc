use num_traits::{Float, NumCast};
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::{execution::ExecutionContext, utils::error::KernelError};

/// Attributes of the gaussian_random operator, with the operator's declared
/// defaults filled in for anything the context leaves unset.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianRandomConfig {
    pub mean: f32,
    pub std: f32,
    // 0 asks for a seed from system entropy
    pub seed: i32,
}

impl GaussianRandomConfig {
    pub fn from_context(ctx: &ExecutionContext) -> Result<Self, KernelError> {
        let defaults = Self::default();
        Ok(Self {
            mean: ctx.attr_or("mean", defaults.mean)?,
            std: ctx.attr_or("std", defaults.std)?,
            seed: ctx.attr_or("seed", defaults.seed)?,
        })
    }

    pub fn build(self) -> Result<Self, KernelError> {
        if !self.mean.is_finite() {
            return Err(KernelError::InvalidAttribute {
                name: "mean".to_string(),
                message: format!("must be finite, got {}", self.mean),
            });
        }

        if !self.std.is_finite() || self.std < 0.0 {
            return Err(KernelError::InvalidAttribute {
                name: "std".to_string(),
                message: format!("must be finite and non-negative, got {}", self.std),
            });
        }

        Ok(self)
    }

    /// Seed for a local engine. Negative attribute values wrap to their
    /// two's-complement `u32` bit pattern.
    pub fn fallback_seed(&self) -> u32 {
        self.seed as u32
    }

    pub fn normal<T>(&self) -> Result<Normal<T>, KernelError>
    where
        T: Float,
        StandardNormal: Distribution<T>,
    {
        let cast = |name: &str, v: f32| {
            <T as NumCast>::from(v).ok_or_else(|| KernelError::InvalidAttribute {
                name: name.to_string(),
                message: format!("{} is not representable in the output type", v),
            })
        };

        Normal::new(cast("mean", self.mean)?, cast("std", self.std)?).map_err(|e| {
            KernelError::InvalidAttribute {
                name: "std".to_string(),
                message: e.to_string(),
            }
        })
    }
}

impl Default for GaussianRandomConfig {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std: 1.0,
            seed: 0,
        }
    }
}
