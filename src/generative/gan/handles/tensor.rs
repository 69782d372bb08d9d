//! Named tensor handle shared between records.

use std::sync::Arc;

use ndarray::{Array1, Array2, ArrayD, IxDyn};
use rand::Rng;

use crate::generative::gan::error::{GanError, Result};

/// Named n-dimensional `f32` tensor.
///
/// Clones share the same buffer. Equality compares name, shape and values;
/// handles sharing a buffer are always equal, even if it holds NaN.
#[derive(Debug, Clone)]
pub struct Tensor {
    name: Arc<str>,
    data: Arc<ArrayD<f32>>,
}

impl Tensor {
    /// Wrap an existing array
    pub fn new(name: impl Into<Arc<str>>, data: ArrayD<f32>) -> Self {
        Self { name: name.into(), data: Arc::new(data) }
    }

    /// Build a 1-D tensor from a vector
    pub fn from_vec(name: impl Into<Arc<str>>, values: Vec<f32>) -> Self {
        Self::new(name, Array1::from(values).into_dyn())
    }

    /// Build a 0-D tensor, the usual shape of a loss
    pub fn scalar(name: impl Into<Arc<str>>, value: f32) -> Self {
        Self::new(name, ArrayD::from_elem(IxDyn(&[]), value))
    }

    /// Build a `[labels.len(), num_classes]` one-hot batch
    pub fn one_hot(name: impl Into<Arc<str>>, labels: &[usize], num_classes: usize) -> Result<Self> {
        let mut data = Array2::<f32>::zeros((labels.len(), num_classes));
        for (row, &label) in labels.iter().enumerate() {
            if label >= num_classes {
                return Err(GanError::InvalidLabel { label, num_classes });
            }
            data[[row, label]] = 1.0;
        }
        Ok(Self::new(name, data.into_dyn()))
    }

    /// Sample from a standard normal distribution using Box-Muller transform
    pub fn sample_normal<R: Rng>(
        rng: &mut R,
        name: impl Into<Arc<str>>,
        shape: &[usize],
    ) -> Result<Self> {
        let len = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| GanError::ShapeMismatch { expected: shape.to_vec(), got: Vec::new() })?;
        let values: Vec<f32> = (0..len)
            .map(|_| {
                let u1: f64 = rng.random::<f64>().max(1e-10);
                let u2: f64 = rng.random::<f64>();
                ((-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()) as f32
            })
            .collect();
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|_| {
            GanError::ShapeMismatch { expected: shape.to_vec(), got: vec![len] }
        })?;
        Ok(Self::new(name, data))
    }

    /// Name the tensor was created with
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying array
    #[must_use]
    pub fn data(&self) -> &ArrayD<f32> {
        &self.data
    }

    #[must_use]
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value of a single-element tensor
    #[must_use]
    pub fn as_scalar(&self) -> Option<f32> {
        if self.data.len() == 1 {
            self.data.iter().next().copied()
        } else {
            None
        }
    }

    /// True if both handles point at the same buffer
    #[must_use]
    pub fn shares_data(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name {
            return false;
        }
        Arc::ptr_eq(&self.data, &other.data) || self.data == other.data
    }
}
