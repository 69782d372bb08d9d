//! Generator and discriminator loss record.

use super::error::Result;
use super::field::{FieldCursor, FieldValue};
use super::handles::Tensor;
use super::record::Record;

/// The generator and discriminator losses
#[derive(Debug, Clone, PartialEq)]
pub struct GanLoss {
    /// Loss the generator minimizes
    pub generator_loss: Tensor,
    /// Loss the discriminator minimizes
    pub discriminator_loss: Tensor,
}

impl GanLoss {
    pub fn new(generator_loss: Tensor, discriminator_loss: Tensor) -> Self {
        Self { generator_loss, discriminator_loss }
    }
}

impl Record for GanLoss {
    const NAME: &'static str = "GanLoss";
    const FIELDS: &'static [&'static str] = &["generator_loss", "discriminator_loss"];

    fn from_fields(values: Vec<FieldValue>) -> Result<Self> {
        let mut cursor = FieldCursor::new(Self::NAME, Self::FIELDS, values)?;
        Ok(Self { generator_loss: cursor.tensor()?, discriminator_loss: cursor.tensor()? })
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![self.generator_loss.into(), self.discriminator_loss.into()]
    }
}
