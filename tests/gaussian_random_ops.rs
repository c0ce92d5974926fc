//! Integration tests for the gaussian_random kernels driven through the registry
//!
//! Tests verify:
//! - Output size and finiteness for the resolved shape
//! - Seeded determinism and entropy seeding in fallback mode
//! - Shared generator advancement and reseed reproducibility
//! - MKLDNN layout and format tagging
//! - Rejection of shapes whose size overflows, with the output left untagged

use std::sync::Arc;

use gaussian_kernel::{
    DataLayout, DataType, ExecutionContext, GAUSSIAN_RANDOM, GAUSSIAN_RANDOM_OUTPUT, Generator,
    KernelError, LibraryType, MemoryFormat, OpKernelRegistry, OpKernelType, Place, Tensor,
};

fn mkldnn_f32() -> OpKernelType {
    OpKernelType::new(
        GAUSSIAN_RANDOM,
        Place::Cpu,
        DataType::Float32,
        LibraryType::Mkldnn,
    )
}

fn context(
    generator: &Arc<Generator>,
    mean: f32,
    std: f32,
    seed: i32,
    shape: Vec<i64>,
) -> ExecutionContext {
    ExecutionContext::with_generator(generator.clone())
        .with_attr("mean", mean)
        .with_attr("std", std)
        .with_attr("seed", seed)
        .with_attr("shape", shape)
        .with_output(GAUSSIAN_RANDOM_OUTPUT, Tensor::default())
}

fn run(registry: &OpKernelRegistry, ctx: &mut ExecutionContext) -> Vec<f32> {
    registry.run(&mkldnn_f32(), ctx).unwrap();
    ctx.output(GAUSSIAN_RANDOM_OUTPUT)
        .unwrap()
        .to_vec::<f32>()
        .unwrap()
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_builtin_registry_has_single_mkldnn_kernel() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();

    let mkldnn: Vec<_> = registry
        .kernel_types_for(GAUSSIAN_RANDOM)
        .into_iter()
        .filter(|k| k.library == LibraryType::Mkldnn)
        .collect();
    assert_eq!(mkldnn, vec![mkldnn_f32()]);

    let f64_mkldnn = OpKernelType::new(
        GAUSSIAN_RANDOM,
        Place::Cpu,
        DataType::Float64,
        LibraryType::Mkldnn,
    );
    assert!(registry.find(&f64_mkldnn).is_none());
}

#[test]
fn test_registering_builtins_twice_fails() {
    let mut registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    assert!(matches!(
        gaussian_kernel::register_gaussian_random_mkldnn(&mut registry),
        Err(KernelError::DuplicateKernel(_))
    ));
}

// ============================================================================
// Fallback mode
// ============================================================================

#[test]
fn test_seed_42_shape_2x3_is_deterministic() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let first = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![2, 3]));
    let second = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![2, 3]));

    assert_eq!(first.len(), 6);
    assert!(first.iter().all(|v| v.is_finite()));
    let first_bits: Vec<u32> = first.iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u32> = second.iter().map(|v| v.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

#[test]
fn test_fallback_does_not_touch_shared_engine() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());
    let reference = Generator::new();

    run(&registry, &mut context(&generator, 0.0, 1.0, 7, vec![16]));

    assert_eq!(generator.random64().unwrap(), reference.random64().unwrap());
}

#[test]
fn test_different_seeds_differ() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let a = run(&registry, &mut context(&generator, 0.0, 1.0, 1, vec![32]));
    let b = run(&registry, &mut context(&generator, 0.0, 1.0, 2, vec![32]));
    assert_ne!(a, b);
}

#[test]
fn test_seed_zero_uses_entropy() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let a = run(&registry, &mut context(&generator, 0.0, 1.0, 0, vec![64]));
    let b = run(&registry, &mut context(&generator, 0.0, 1.0, 0, vec![64]));
    assert_ne!(a, b);
}

#[test]
fn test_negative_seed_matches_wrapped_seed() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    // -2 wraps to 4294967294 = 2 * (2^31 - 1), so the engine starts from state 1
    let negative = run(&registry, &mut context(&generator, 0.0, 1.0, -2, vec![10]));
    let one = run(&registry, &mut context(&generator, 0.0, 1.0, 1, vec![10]));
    assert_eq!(negative, one);
}

#[test]
fn test_zero_std_yields_mean() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let values = run(&registry, &mut context(&generator, 5.0, 0.0, 1, vec![2, 3]));
    assert_eq!(values.len(), 6);
    assert!(values.iter().all(|v| *v == 5.0));
}

#[test]
fn test_sample_statistics() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let values = run(&registry, &mut context(&generator, 1.0, 2.0, 99, vec![100, 100]));
    let n = values.len() as f64;
    let mean = values.iter().map(|v| *v as f64).sum::<f64>() / n;
    let var = values
        .iter()
        .map(|v| (*v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;

    assert!((mean - 1.0).abs() < 0.1, "mean = {}", mean);
    assert!((var - 4.0).abs() < 0.3, "variance = {}", var);
}

// ============================================================================
// Shared generator mode
// ============================================================================

#[test]
fn test_shared_generator_advances_between_calls() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::with_seed(2020));

    let first = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![2, 3]));
    let second = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![2, 3]));
    assert_ne!(first, second);

    generator.manual_seed(2020).unwrap();
    let replay = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![2, 3]));
    assert_eq!(first, replay);
}

#[test]
fn test_shared_generator_ignores_seed_attribute() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let a = Arc::new(Generator::with_seed(11));
    let b = Arc::new(Generator::with_seed(11));

    let with_seed_1 = run(&registry, &mut context(&a, 0.0, 1.0, 1, vec![8]));
    let with_seed_2 = run(&registry, &mut context(&b, 0.0, 1.0, 2, vec![8]));
    assert_eq!(with_seed_1, with_seed_2);
}

#[test]
fn test_concurrent_kernels_share_generator() {
    let registry = Arc::new(OpKernelRegistry::with_builtin_kernels().unwrap());
    let generator = Arc::new(Generator::with_seed(3));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = registry.clone();
            let generator = generator.clone();
            std::thread::spawn(move || {
                run(
                    &registry,
                    &mut context(&generator, 0.0, 1.0, 0, vec![64]),
                )
            })
        })
        .collect();

    let mut outputs: Vec<Vec<u32>> = handles
        .into_iter()
        .map(|h| h.join().unwrap().iter().map(|v| v.to_bits()).collect())
        .collect();

    // Each call drew a distinct block from the one engine
    outputs.sort();
    outputs.dedup();
    assert_eq!(outputs.len(), 4);
}

// ============================================================================
// Shape resolution and tagging
// ============================================================================

#[test]
fn test_shape_tensor_overrides_attribute() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());
    let shape = Tensor::from_vec(vec![2], &[4i64, 5]).unwrap();

    let mut ctx = context(&generator, 0.0, 1.0, 42, vec![2, 3]).with_input("ShapeTensor", shape);
    registry.run(&mkldnn_f32(), &mut ctx).unwrap();

    let out = ctx.output(GAUSSIAN_RANDOM_OUTPUT).unwrap();
    assert_eq!(out.dims(), &[4, 5]);
    assert_eq!(out.numel(), 20);
}

#[test]
fn test_layout_tags_for_non_4d_output() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let mut ctx = context(&generator, 0.0, 1.0, 42, vec![7]);
    registry.run(&mkldnn_f32(), &mut ctx).unwrap();

    let out = ctx.output(GAUSSIAN_RANDOM_OUTPUT).unwrap();
    assert_eq!(out.layout(), DataLayout::Mkldnn);
    assert_eq!(out.format(), MemoryFormat::Oihw);
}

#[test]
fn test_empty_shape_produces_empty_tensor() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    let values = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![3, 0]));
    assert!(values.is_empty());
}

#[test]
fn test_output_is_resized_from_previous_shape() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());
    let stale = Tensor::from_vec(vec![2], &[9.0f32, 9.0]).unwrap();

    let mut ctx = context(&generator, 0.0, 1.0, 42, vec![2, 2])
        .with_output(GAUSSIAN_RANDOM_OUTPUT, stale);
    let values = run(&registry, &mut ctx);
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|v| *v != 9.0));
}

#[test]
fn test_overflowing_shapes_rejected_and_untagged() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());

    for shape in [vec![1i64 << 62], vec![1i64 << 32, 1i64 << 32]] {
        let mut ctx = context(&generator, 0.0, 1.0, 42, shape.clone());
        let result = registry.run(&mkldnn_f32(), &mut ctx);
        assert!(
            matches!(result, Err(KernelError::InvalidShape(_))),
            "shape {:?} gave {:?}",
            shape,
            result
        );

        let out = ctx.output(GAUSSIAN_RANDOM_OUTPUT).unwrap();
        assert_eq!(out.layout(), DataLayout::AnyLayout);
        assert_eq!(out.format(), MemoryFormat::Undef);
        assert!(!out.is_initialized());
    }
}

#[test]
fn test_plain_kernels_fill_without_tagging() {
    let registry = OpKernelRegistry::with_builtin_kernels().unwrap();
    let generator = Arc::new(Generator::new());
    let plain_f32 = OpKernelType::new(
        GAUSSIAN_RANDOM,
        Place::Cpu,
        DataType::Float32,
        LibraryType::Plain,
    );

    let mut plain_ctx = context(&generator, 0.0, 1.0, 42, vec![2, 3]);
    registry.run(&plain_f32, &mut plain_ctx).unwrap();
    let out = plain_ctx.output(GAUSSIAN_RANDOM_OUTPUT).unwrap();
    assert_eq!(out.layout(), DataLayout::AnyLayout);
    assert_eq!(out.format(), MemoryFormat::Undef);

    let tagged = run(&registry, &mut context(&generator, 0.0, 1.0, 42, vec![2, 3]));
    assert_eq!(out.to_vec::<f32>().unwrap(), tagged);

    let plain_f64 = OpKernelType::new(
        GAUSSIAN_RANDOM,
        Place::Cpu,
        DataType::Float64,
        LibraryType::Plain,
    );
    let mut f64_ctx = context(&generator, 0.0, 1.0, 42, vec![4]);
    registry.run(&plain_f64, &mut f64_ctx).unwrap();
    let values = f64_ctx
        .output(GAUSSIAN_RANDOM_OUTPUT)
        .unwrap()
        .to_vec::<f64>()
        .unwrap();
    assert_eq!(values.len(), 4);
    assert!(values.iter().all(|v| v.is_finite()));
}
