//! Generative Adversarial Network records
//!
//! This module defines the values a GAN training pipeline passes around:
//! - Model records: generator and discriminator tensors, variables, scopes and functions
//! - Loss records: generator and discriminator losses
//! - Train op records: the update ops and the global step increment
//! - Train step configuration: update counts per GAN step

pub mod gan;

pub use gan::{
    AcGanModel, Categorical, DiscriminatorFn, Distribution, DistributionRef, FieldValue, GanError,
    GanLoss, GanModel, GanTrainOps, GanTrainSteps, GeneratorFn, GlobalStep, InfoGanModel, Normal,
    Record, Result, Scope, Tensor, TrainOp, Variable,
};
