//! Name-based access shared by every GAN record.

use std::fmt;

use super::error::{GanError, Result};
use super::field::FieldValue;

/// Field names of [`GanModel`](super::GanModel), optionally followed by extra names.
///
/// Extended models build their field list from this at compile time.
macro_rules! gan_model_fields {
    ($($extra:literal),* $(,)?) => {
        &[
            "generator_inputs",
            "generated_data",
            "generator_variables",
            "generator_scope",
            "generator_fn",
            "real_data",
            "discriminator_real_outputs",
            "discriminator_gen_outputs",
            "discriminator_variables",
            "discriminator_scope",
            "discriminator_fn",
            $($extra,)*
        ]
    };
}

pub(crate) use gan_model_fields;

/// A fixed-shape record with named, ordered fields.
///
/// Typed constructors (`new`) take one argument per field. This trait adds
/// the positional and keyword forms, which check arity and field kinds at
/// run time.
pub trait Record: Sized + Clone + PartialEq + fmt::Debug + Send + Sync {
    /// Record name used in error messages
    const NAME: &'static str;

    /// Field names in declaration order
    const FIELDS: &'static [&'static str];

    /// Build from one value per field, in [`Record::FIELDS`] order
    fn from_fields(values: Vec<FieldValue>) -> Result<Self>;

    /// All field values in [`Record::FIELDS`] order
    fn into_fields(self) -> Vec<FieldValue>;

    /// Position of `name` in [`Record::FIELDS`]
    fn field_index(name: &str) -> Result<usize> {
        Self::FIELDS
            .iter()
            .position(|&f| f == name)
            .ok_or_else(|| GanError::UnknownField { schema: Self::NAME, field: name.to_string() })
    }

    /// Value of the field called `name`
    fn field(&self, name: &str) -> Result<FieldValue> {
        let index = Self::field_index(name)?;
        self.clone()
            .into_fields()
            .into_iter()
            .nth(index)
            .ok_or_else(|| GanError::UnknownField { schema: Self::NAME, field: name.to_string() })
    }

    /// `(name, value)` pairs in declaration order
    fn to_pairs(&self) -> Vec<(&'static str, FieldValue)> {
        Self::FIELDS.iter().copied().zip(self.clone().into_fields()).collect()
    }

    /// Copy of this record with one field swapped out
    fn replace(&self, name: &str, value: FieldValue) -> Result<Self> {
        let index = Self::field_index(name)?;
        let mut values = self.clone().into_fields();
        if let Some(slot) = values.get_mut(index) {
            *slot = value;
        }
        Self::from_fields(values)
    }

    /// Build from `(name, value)` pairs in any order; every field exactly once
    fn from_named<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        let mut slots: Vec<Option<FieldValue>> = vec![None; Self::FIELDS.len()];
        for (name, value) in pairs {
            let index = Self::field_index(name)?;
            if slots[index].replace(value).is_some() {
                return Err(GanError::DuplicateField { schema: Self::NAME, field: name.to_string() });
            }
        }
        let values = slots
            .into_iter()
            .zip(Self::FIELDS)
            .map(|(slot, &field)| slot.ok_or(GanError::MissingField { schema: Self::NAME, field }))
            .collect::<Result<Vec<_>>>()?;
        Self::from_fields(values)
    }
}
