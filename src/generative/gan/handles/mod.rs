//! Framework handles referenced by the GAN records.
//!
//! Every handle is `Arc`-backed, so cloning one into a record shares the
//! underlying object rather than copying it.

mod distribution;
mod network_fn;
mod tensor;
mod train_op;
mod variable;

pub use distribution::{Categorical, Distribution, DistributionRef, Normal};
pub use network_fn::{DiscriminatorFn, GeneratorFn};
pub use tensor::Tensor;
pub use train_op::{GlobalStep, TrainOp};
pub use variable::{Scope, Variable};
