use log::debug;
use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::{
    execution::ExecutionContext,
    generator::MinstdRand,
    kernels::gaussian_random::{OP_TYPE, OUTPUT, config::GaussianRandomConfig},
    operator::get_shape,
    tensor::Element,
    utils::error::KernelError,
};

/// Write one draw per element, element `i` from draw `i`.
pub fn fill_normal<T, R>(out: &mut [T], dist: &Normal<T>, rng: &mut R)
where
    T: Float,
    StandardNormal: Distribution<T>,
    R: Rng + ?Sized,
{
    for v in out.iter_mut() {
        *v = dist.sample(rng);
    }
}

/// Resize `Out` to the resolved shape and fill it with normal samples.
///
/// Draws come from the context's shared generator when the front-end has
/// initialised it, otherwise from a local engine seeded by the `seed`
/// attribute (or system entropy when that is 0).
pub fn gaussian_random_cpu<T>(ctx: &mut ExecutionContext) -> Result<(), KernelError>
where
    T: Element + Float,
    StandardNormal: Distribution<T>,
{
    let config = GaussianRandomConfig::from_context(ctx)?.build()?;
    let shape = get_shape(OP_TYPE, ctx)?;
    let place = ctx.place();
    let generator = ctx.generator().clone();
    let shared = generator.is_init_py()?;
    let dist = config.normal::<T>()?;

    debug!(
        "{}: shape={:?} mean={} std={} shared_generator={}",
        OP_TYPE, shape, config.mean, config.std, shared
    );

    let out = ctx.output_mut(OUTPUT)?;
    out.resize(&shape)?;
    let data = out.mutable_data::<T>(place)?;

    if shared {
        generator.with_cpu_engine(|engine| fill_normal(data, &dist, engine))?;
    } else {
        let mut seed = config.fallback_seed();
        if seed == 0 {
            seed = rand::random::<u32>();
        }
        let mut engine = MinstdRand::new(seed);
        fill_normal(data, &dist, &mut engine);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_normal_is_deterministic_per_engine_state() {
        let dist = Normal::new(0.0f32, 1.0).unwrap();
        let mut a = [0.0f32; 16];
        let mut b = [0.0f32; 16];
        fill_normal(&mut a, &dist, &mut MinstdRand::new(3));
        fill_normal(&mut b, &dist, &mut MinstdRand::new(3));
        assert_eq!(a, b);
        assert!(a.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn fill_normal_statistics() {
        let dist = Normal::new(2.0f64, 0.5).unwrap();
        let mut out = vec![0.0f64; 20000];
        fill_normal(&mut out, &dist, &mut MinstdRand::new(12345));

        let n = out.len() as f64;
        let mean = out.iter().sum::<f64>() / n;
        let var = out.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert!((mean - 2.0).abs() < 0.05, "mean = {}", mean);
        assert!((var - 0.25).abs() < 0.05, "variance = {}", var);
    }

    #[test]
    fn zero_std_collapses_to_mean() {
        let dist = Normal::new(5.0f32, 0.0).unwrap();
        let mut out = [0.0f32; 8];
        fill_normal(&mut out, &dist, &mut MinstdRand::new(1));
        assert!(out.iter().all(|v| *v == 5.0));
    }
}
