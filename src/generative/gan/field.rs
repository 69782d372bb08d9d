//! Dynamic field values for name-based record access.

use super::error::{GanError, Result};
use super::handles::{DiscriminatorFn, DistributionRef, GeneratorFn, Scope, Tensor, TrainOp, Variable};

/// One field of a record, tagged with its kind
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Tensor(Tensor),
    Tensors(Vec<Tensor>),
    Variables(Vec<Variable>),
    Scope(Scope),
    GeneratorFn(GeneratorFn),
    DiscriminatorFn(DiscriminatorFn),
    Distributions(Vec<DistributionRef>),
    TrainOp(TrainOp),
    Steps(usize),
}

impl FieldValue {
    /// Human readable kind, used in error messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Tensor(_) => "tensor",
            Self::Tensors(_) => "tensor list",
            Self::Variables(_) => "variable list",
            Self::Scope(_) => "scope",
            Self::GeneratorFn(_) => "generator fn",
            Self::DiscriminatorFn(_) => "discriminator fn",
            Self::Distributions(_) => "distribution list",
            Self::TrainOp(_) => "train op",
            Self::Steps(_) => "step count",
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    Tensor(Tensor),
    Tensors(Vec<Tensor>),
    Variables(Vec<Variable>),
    Scope(Scope),
    GeneratorFn(GeneratorFn),
    DiscriminatorFn(DiscriminatorFn),
    Distributions(Vec<DistributionRef>),
    TrainOp(TrainOp),
    Steps(usize),
);

/// Reads positional values against a record's field list.
///
/// Arity is checked once on creation; each typed read then checks the kind.
pub(crate) struct FieldCursor {
    schema: &'static str,
    names: std::slice::Iter<'static, &'static str>,
    values: std::vec::IntoIter<FieldValue>,
}

macro_rules! take {
    ($($method:ident => $variant:ident($ty:ty), $kind:literal;)*) => {
        $(
            pub(crate) fn $method(&mut self) -> Result<$ty> {
                match self.next()? {
                    (_, FieldValue::$variant(value)) => Ok(value),
                    (field, other) => Err(GanError::FieldType {
                        schema: self.schema,
                        field,
                        expected: $kind,
                        got: other.kind(),
                    }),
                }
            }
        )*
    };
}

impl FieldCursor {
    pub(crate) fn new(
        schema: &'static str,
        fields: &'static [&'static str],
        values: Vec<FieldValue>,
    ) -> Result<Self> {
        if values.len() != fields.len() {
            return Err(GanError::ArityMismatch {
                schema,
                expected: fields.len(),
                got: values.len(),
            });
        }
        Ok(Self { schema, names: fields.iter(), values: values.into_iter() })
    }

    fn next(&mut self) -> Result<(&'static str, FieldValue)> {
        match (self.names.next(), self.values.next()) {
            (Some(&name), Some(value)) => Ok((name, value)),
            (Some(&name), None) => Err(GanError::MissingField { schema: self.schema, field: name }),
            (None, _) => Err(GanError::ArityMismatch {
                schema: self.schema,
                expected: 0,
                got: self.values.len() + 1,
            }),
        }
    }

    take! {
        tensor => Tensor(Tensor), "tensor";
        tensors => Tensors(Vec<Tensor>), "tensor list";
        variables => Variables(Vec<Variable>), "variable list";
        scope => Scope(Scope), "scope";
        generator_fn => GeneratorFn(GeneratorFn), "generator fn";
        discriminator_fn => DiscriminatorFn(DiscriminatorFn), "discriminator fn";
        distributions => Distributions(Vec<DistributionRef>), "distribution list";
        train_op => TrainOp(TrainOp), "train op";
        steps => Steps(usize), "step count";
    }
}
