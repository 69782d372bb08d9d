//! Typed records for GAN training pipelines.
//!
//! The records group the pieces one pipeline stage hands to the next:
//! the generator/discriminator pair ([`GanModel`] and its InfoGAN and ACGAN
//! variants), the two losses ([`GanLoss`]), the update ops ([`GanTrainOps`])
//! and the step schedule ([`GanTrainSteps`]).
//!
//! ```rust
//! use gan_schema::generative::{GanLoss, Record, Tensor};
//!
//! let loss = GanLoss::new(Tensor::scalar("gen_loss", 0.7), Tensor::scalar("dis_loss", 1.3));
//! assert_eq!(GanLoss::FIELDS, &["generator_loss", "discriminator_loss"]);
//! assert_eq!(loss.generator_loss.as_scalar(), Some(0.7));
//! ```

pub mod generative;

pub use generative::{GanError, Result};
