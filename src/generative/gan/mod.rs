//! GAN pipeline records
//!
//! Immutable records with named fields for handing GAN components between
//! pipeline stages:
//!
//! ```text
//! noise z ─┬─► generator_fn ─► generated_data ─┬─► discriminator_fn ─► gen outputs
//!          │                                   │
//!          │   real_data ──────────────────────┴─► discriminator_fn ─► real outputs
//!          │
//!          └── GanModel ─► GanLoss ─► GanTrainOps (run GanTrainSteps times)
//! ```
//!
//! [`InfoGanModel`] and [`AcGanModel`] carry a full [`GanModel`] followed by
//! their own fields. Field lists are fixed at compile time and exposed through
//! [`Record::FIELDS`].
//!
//! # Example
//!
//! ```rust
//! use gan_schema::generative::{GanTrainSteps, Record};
//!
//! let steps = GanTrainSteps::new(1, 5);
//! assert_eq!(steps.discriminator_train_steps, 5);
//! assert_eq!(GanTrainSteps::FIELDS.len(), 2);
//! ```

mod error;
mod field;
mod handles;
mod loss;
mod model;
mod record;
mod train_ops;
mod train_steps;

pub use error::{GanError, Result};
pub use field::FieldValue;
pub use handles::{
    Categorical, DiscriminatorFn, Distribution, DistributionRef, GeneratorFn, GlobalStep, Normal,
    Scope, Tensor, TrainOp, Variable,
};
pub use loss::GanLoss;
pub use model::{AcGanModel, GanModel, InfoGanModel};
pub use record::Record;
pub use train_ops::GanTrainOps;
pub use train_steps::GanTrainSteps;
