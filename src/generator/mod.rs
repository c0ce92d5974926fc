mod generator;
pub use generator::{DEFAULT_CPU_SEED, Generator, default_generator};
pub mod minstd_rand;
pub use minstd_rand::MinstdRand;
pub mod mt19937_64;
pub use mt19937_64::Mt19937_64;
