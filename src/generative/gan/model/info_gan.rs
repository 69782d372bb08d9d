//! InfoGAN model record.

use super::gan_model::GanModel;
use crate::generative::gan::error::{GanError, Result};
use crate::generative::gan::field::{FieldCursor, FieldValue};
use crate::generative::gan::handles::{DistributionRef, Tensor};
use crate::generative::gan::record::{gan_model_fields, Record};

/// Everything needed for InfoGAN training (<https://arxiv.org/abs/1606.03657>).
///
/// Carries a full [`GanModel`] plus the structured noise and the
/// distributions the recognizer predicts for it. The two lists are expected
/// to have the same length; construction does not check this, call
/// [`InfoGanModel::check_structured_inputs`] where it matters.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoGanModel {
    /// The base GAN fields
    pub gan: GanModel,
    /// Noise that should keep high mutual information with the generator output
    pub structured_generator_inputs: Vec<Tensor>,
    /// Recognizer predictions, one per structured input
    pub predicted_distributions: Vec<DistributionRef>,
}

impl InfoGanModel {
    /// Create an InfoGAN record; list lengths are not checked here
    pub fn new(
        gan: GanModel,
        structured_generator_inputs: Vec<Tensor>,
        predicted_distributions: Vec<DistributionRef>,
    ) -> Self {
        Self { gan, structured_generator_inputs, predicted_distributions }
    }

    /// The embedded base GAN fields
    #[must_use]
    pub fn as_gan_model(&self) -> &GanModel {
        &self.gan
    }

    /// Error if the structured inputs and predicted distributions differ in length
    pub fn check_structured_inputs(&self) -> Result<()> {
        let left_len = self.structured_generator_inputs.len();
        let right_len = self.predicted_distributions.len();
        if left_len != right_len {
            return Err(GanError::LengthMismatch {
                schema: Self::NAME,
                left: "structured_generator_inputs",
                left_len,
                right: "predicted_distributions",
                right_len,
            });
        }
        Ok(())
    }

    /// Pair each structured input with its predicted distribution
    pub fn structured_pairs(&self) -> Result<Vec<(&Tensor, &DistributionRef)>> {
        self.check_structured_inputs()?;
        Ok(self.structured_generator_inputs.iter().zip(&self.predicted_distributions).collect())
    }
}

impl AsRef<GanModel> for InfoGanModel {
    fn as_ref(&self) -> &GanModel {
        &self.gan
    }
}

impl Record for InfoGanModel {
    const NAME: &'static str = "InfoGanModel";
    const FIELDS: &'static [&'static str] =
        gan_model_fields!("structured_generator_inputs", "predicted_distributions");

    fn from_fields(values: Vec<FieldValue>) -> Result<Self> {
        let mut cursor = FieldCursor::new(Self::NAME, Self::FIELDS, values)?;
        Ok(Self {
            gan: GanModel::read(&mut cursor)?,
            structured_generator_inputs: cursor.tensors()?,
            predicted_distributions: cursor.distributions()?,
        })
    }

    fn into_fields(self) -> Vec<FieldValue> {
        let mut fields = self.gan.into_fields();
        fields.push(self.structured_generator_inputs.into());
        fields.push(self.predicted_distributions.into());
        fields
    }
}
