//! Training op record.

use super::error::Result;
use super::field::{FieldCursor, FieldValue};
use super::handles::TrainOp;
use super::record::Record;

/// The ops that advance GAN training
#[derive(Debug, Clone, PartialEq)]
pub struct GanTrainOps {
    /// Performs a generator update step
    pub generator_train_op: TrainOp,
    /// Performs a discriminator update step
    pub discriminator_train_op: TrainOp,
    /// Increments the shared global step
    pub global_step_inc_op: TrainOp,
}

impl GanTrainOps {
    pub fn new(
        generator_train_op: TrainOp,
        discriminator_train_op: TrainOp,
        global_step_inc_op: TrainOp,
    ) -> Self {
        Self { generator_train_op, discriminator_train_op, global_step_inc_op }
    }
}

impl Record for GanTrainOps {
    const NAME: &'static str = "GanTrainOps";
    const FIELDS: &'static [&'static str] =
        &["generator_train_op", "discriminator_train_op", "global_step_inc_op"];

    fn from_fields(values: Vec<FieldValue>) -> Result<Self> {
        let mut cursor = FieldCursor::new(Self::NAME, Self::FIELDS, values)?;
        Ok(Self {
            generator_train_op: cursor.train_op()?,
            discriminator_train_op: cursor.train_op()?,
            global_step_inc_op: cursor.train_op()?,
        })
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.generator_train_op.into(),
            self.discriminator_train_op.into(),
            self.global_step_inc_op.into(),
        ]
    }
}
