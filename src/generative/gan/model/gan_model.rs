//! Base GAN model record.

use crate::generative::gan::error::Result;
use crate::generative::gan::field::{FieldCursor, FieldValue};
use crate::generative::gan::handles::{DiscriminatorFn, GeneratorFn, Scope, Tensor, Variable};
use crate::generative::gan::record::{gan_model_fields, Record};

/// Everything needed for GAN training.
///
/// Generative Adversarial Networks (<https://arxiv.org/abs/1406.2661>) learn
/// an implicit generative model by playing a two agent game: the generator
/// produces candidates meant to match the data distribution, and the
/// discriminator tries to tell real examples from generated ones.
#[derive(Debug, Clone, PartialEq)]
pub struct GanModel {
    /// Random noise fed to the generator
    pub generator_inputs: Tensor,
    /// Generator output
    pub generated_data: Tensor,
    /// All generator variables
    pub generator_variables: Vec<Variable>,
    /// Scope the generator variables live in
    pub generator_scope: Scope,
    /// The generator computation
    pub generator_fn: GeneratorFn,
    /// A batch of real data
    pub real_data: Tensor,
    /// Discriminator output on real data
    pub discriminator_real_outputs: Tensor,
    /// Discriminator output on generated data
    pub discriminator_gen_outputs: Tensor,
    /// All discriminator variables
    pub discriminator_variables: Vec<Variable>,
    /// Scope the discriminator variables live in
    pub discriminator_scope: Scope,
    /// The discriminator computation
    pub discriminator_fn: DiscriminatorFn,
}

impl GanModel {
    /// Create a model record; values are stored as given
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        generator_inputs: Tensor,
        generated_data: Tensor,
        generator_variables: Vec<Variable>,
        generator_scope: Scope,
        generator_fn: GeneratorFn,
        real_data: Tensor,
        discriminator_real_outputs: Tensor,
        discriminator_gen_outputs: Tensor,
        discriminator_variables: Vec<Variable>,
        discriminator_scope: Scope,
        discriminator_fn: DiscriminatorFn,
    ) -> Self {
        Self {
            generator_inputs,
            generated_data,
            generator_variables,
            generator_scope,
            generator_fn,
            real_data,
            discriminator_real_outputs,
            discriminator_gen_outputs,
            discriminator_variables,
            discriminator_scope,
            discriminator_fn,
        }
    }

    /// Read the eleven base fields off a cursor
    pub(super) fn read(cursor: &mut FieldCursor) -> Result<Self> {
        Ok(Self {
            generator_inputs: cursor.tensor()?,
            generated_data: cursor.tensor()?,
            generator_variables: cursor.variables()?,
            generator_scope: cursor.scope()?,
            generator_fn: cursor.generator_fn()?,
            real_data: cursor.tensor()?,
            discriminator_real_outputs: cursor.tensor()?,
            discriminator_gen_outputs: cursor.tensor()?,
            discriminator_variables: cursor.variables()?,
            discriminator_scope: cursor.scope()?,
            discriminator_fn: cursor.discriminator_fn()?,
        })
    }
}

impl Record for GanModel {
    const NAME: &'static str = "GanModel";
    const FIELDS: &'static [&'static str] = gan_model_fields!();

    fn from_fields(values: Vec<FieldValue>) -> Result<Self> {
        let mut cursor = FieldCursor::new(Self::NAME, Self::FIELDS, values)?;
        Self::read(&mut cursor)
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.generator_inputs.into(),
            self.generated_data.into(),
            self.generator_variables.into(),
            self.generator_scope.into(),
            self.generator_fn.into(),
            self.real_data.into(),
            self.discriminator_real_outputs.into(),
            self.discriminator_gen_outputs.into(),
            self.discriminator_variables.into(),
            self.discriminator_scope.into(),
            self.discriminator_fn.into(),
        ]
    }
}
