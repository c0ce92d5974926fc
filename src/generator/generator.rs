use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use log::trace;

use crate::{generator::mt19937_64::Mt19937_64, utils::error::KernelError};

pub const DEFAULT_CPU_SEED: u64 = 34_342_423_252;

struct GeneratorState {
    engine: Mt19937_64,
    current_seed: u64,
    is_init_py: bool,
}

/// Process-wide CPU random generator.
///
/// Kernels receive it through the execution context. When the interactive
/// front-end has seeded it (`is_init_py`), kernels draw from the shared engine
/// so a session is reproducible end to end; otherwise they build local engines.
pub struct Generator {
    state: Mutex<GeneratorState>,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GeneratorState {
                engine: Mt19937_64::new(DEFAULT_CPU_SEED),
                current_seed: DEFAULT_CPU_SEED,
                is_init_py: false,
            }),
        }
    }

    /// Generator already seeded by the front-end.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: Mutex::new(GeneratorState {
                engine: Mt19937_64::new(seed),
                current_seed: seed,
                is_init_py: true,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GeneratorState>, KernelError> {
        self.state
            .lock()
            .map_err(|e| KernelError::Generator(format!("generator lock poisoned: {}", e)))
    }

    pub fn is_init_py(&self) -> Result<bool, KernelError> {
        Ok(self.lock()?.is_init_py)
    }

    pub fn set_init_py(&self, is_init_py: bool) -> Result<(), KernelError> {
        self.lock()?.is_init_py = is_init_py;
        Ok(())
    }

    /// Reseed the shared engine and switch kernels over to it.
    pub fn manual_seed(&self, seed: u64) -> Result<(), KernelError> {
        let mut state = self.lock()?;
        state.engine.reseed(seed);
        state.current_seed = seed;
        state.is_init_py = true;
        trace!("Generator manually seeded with {}", seed);
        Ok(())
    }

    /// Reseed from system entropy and return the seed used.
    pub fn seed(&self) -> Result<u64, KernelError> {
        let seed = rand::random::<u64>();
        let mut state = self.lock()?;
        state.engine.reseed(seed);
        state.current_seed = seed;
        trace!("Generator reseeded from entropy with {}", seed);
        Ok(seed)
    }

    pub fn current_seed(&self) -> Result<u64, KernelError> {
        Ok(self.lock()?.current_seed)
    }

    pub fn random64(&self) -> Result<u64, KernelError> {
        Ok(self.lock()?.engine.next_raw())
    }

    /// Run `f` with exclusive access to the shared engine. Draws made inside
    /// advance the engine for every later user of this generator.
    pub fn with_cpu_engine<R>(
        &self,
        f: impl FnOnce(&mut Mt19937_64) -> R,
    ) -> Result<R, KernelError> {
        let mut state = self.lock()?;
        Ok(f(&mut state.engine))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_GENERATOR: OnceLock<Arc<Generator>> = OnceLock::new();

/// Lazily created process generator used by contexts that are not given one.
pub fn default_generator() -> Arc<Generator> {
    DEFAULT_GENERATOR
        .get_or_init(|| Arc::new(Generator::new()))
        .clone()
}
