//! Generator and discriminator function handles.

use std::fmt;
use std::sync::Arc;

use super::tensor::Tensor;
use crate::generative::gan::error::Result;

type GenerateFn = dyn Fn(&Tensor) -> Result<Tensor> + Send + Sync;
type DiscriminateFn = dyn Fn(&Tensor, &Tensor) -> Result<Tensor> + Send + Sync;

/// Generator computation: maps generator inputs to generated data.
///
/// Two handles are equal only if they wrap the same function object.
#[derive(Clone)]
pub struct GeneratorFn {
    name: Arc<str>,
    f: Arc<GenerateFn>,
}

impl GeneratorFn {
    pub fn new<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&Tensor) -> Result<Tensor> + Send + Sync + 'static,
    {
        Self { name: name.into(), f: Arc::new(f) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the generator on its inputs
    pub fn call(&self, generator_inputs: &Tensor) -> Result<Tensor> {
        (self.f)(generator_inputs)
    }
}

impl PartialEq for GeneratorFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for GeneratorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratorFn").field(&self.name).finish()
    }
}

/// Discriminator computation: scores data given the generator inputs it
/// was conditioned on.
///
/// Two handles are equal only if they wrap the same function object.
#[derive(Clone)]
pub struct DiscriminatorFn {
    name: Arc<str>,
    f: Arc<DiscriminateFn>,
}

impl DiscriminatorFn {
    pub fn new<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&Tensor, &Tensor) -> Result<Tensor> + Send + Sync + 'static,
    {
        Self { name: name.into(), f: Arc::new(f) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Score `data` (real or generated)
    pub fn call(&self, data: &Tensor, generator_inputs: &Tensor) -> Result<Tensor> {
        (self.f)(data, generator_inputs)
    }
}

impl PartialEq for DiscriminatorFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for DiscriminatorFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DiscriminatorFn").field(&self.name).finish()
    }
}
