//! Train step configuration for GAN training.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::field::{FieldCursor, FieldValue};
use super::record::Record;

/// Number of generator and discriminator updates in each GAN step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanTrainSteps {
    /// Generator steps per GAN step
    pub generator_train_steps: usize,
    /// Discriminator steps per GAN step
    pub discriminator_train_steps: usize,
}

impl GanTrainSteps {
    #[must_use]
    pub fn new(generator_train_steps: usize, discriminator_train_steps: usize) -> Self {
        Self { generator_train_steps, discriminator_train_steps }
    }
}

impl Default for GanTrainSteps {
    fn default() -> Self {
        Self { generator_train_steps: 1, discriminator_train_steps: 1 }
    }
}

impl Record for GanTrainSteps {
    const NAME: &'static str = "GanTrainSteps";
    const FIELDS: &'static [&'static str] = &["generator_train_steps", "discriminator_train_steps"];

    fn from_fields(values: Vec<FieldValue>) -> Result<Self> {
        let mut cursor = FieldCursor::new(Self::NAME, Self::FIELDS, values)?;
        Ok(Self { generator_train_steps: cursor.steps()?, discriminator_train_steps: cursor.steps()? })
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![self.generator_train_steps.into(), self.discriminator_train_steps.into()]
    }
}
