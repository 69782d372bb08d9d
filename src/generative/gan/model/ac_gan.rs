//! ACGAN model record.

use super::gan_model::GanModel;
use crate::generative::gan::error::Result;
use crate::generative::gan::field::{FieldCursor, FieldValue};
use crate::generative::gan::handles::Tensor;
use crate::generative::gan::record::{gan_model_fields, Record};

/// Everything needed for ACGAN training (<https://arxiv.org/abs/1610.09585>).
#[derive(Debug, Clone, PartialEq)]
pub struct AcGanModel {
    /// The base GAN fields
    pub gan: GanModel,
    /// One-hot labels for the batch
    pub one_hot_labels: Tensor,
    /// Classification logits for real data
    pub discriminator_real_classification_logits: Tensor,
    /// Classification logits for generated data
    pub discriminator_gen_classification_logits: Tensor,
}

impl AcGanModel {
    /// Create an ACGAN record; values are stored as given
    pub fn new(
        gan: GanModel,
        one_hot_labels: Tensor,
        discriminator_real_classification_logits: Tensor,
        discriminator_gen_classification_logits: Tensor,
    ) -> Self {
        Self {
            gan,
            one_hot_labels,
            discriminator_real_classification_logits,
            discriminator_gen_classification_logits,
        }
    }

    /// The embedded base GAN fields
    #[must_use]
    pub fn as_gan_model(&self) -> &GanModel {
        &self.gan
    }

    /// Number of classes, read from the last axis of the labels
    #[must_use]
    pub fn num_classes(&self) -> Option<usize> {
        self.one_hot_labels.shape().last().copied()
    }
}

impl AsRef<GanModel> for AcGanModel {
    fn as_ref(&self) -> &GanModel {
        &self.gan
    }
}

impl Record for AcGanModel {
    const NAME: &'static str = "AcGanModel";
    const FIELDS: &'static [&'static str] = gan_model_fields!(
        "one_hot_labels",
        "discriminator_real_classification_logits",
        "discriminator_gen_classification_logits",
    );

    fn from_fields(values: Vec<FieldValue>) -> Result<Self> {
        let mut cursor = FieldCursor::new(Self::NAME, Self::FIELDS, values)?;
        Ok(Self {
            gan: GanModel::read(&mut cursor)?,
            one_hot_labels: cursor.tensor()?,
            discriminator_real_classification_logits: cursor.tensor()?,
            discriminator_gen_classification_logits: cursor.tensor()?,
        })
    }

    fn into_fields(self) -> Vec<FieldValue> {
        let mut fields = self.gan.into_fields();
        fields.push(self.one_hot_labels.into());
        fields.push(self.discriminator_real_classification_logits.into());
        fields.push(self.discriminator_gen_classification_logits.into());
        fields
    }
}
