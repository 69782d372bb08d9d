//! Predicted distributions for InfoGAN structured noise.

use std::fmt;
use std::sync::Arc;

use ndarray::{ArrayD, Ix2, Zip};

use super::tensor::Tensor;
use crate::generative::gan::error::{GanError, Result};

/// A probability distribution predicted by the recognizer network
pub trait Distribution: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Log-likelihood of `value` under this distribution
    fn log_prob(&self, value: &Tensor) -> Result<Tensor>;
}

/// Shared handle to a predicted distribution.
///
/// Two handles are equal only if they point at the same distribution.
#[derive(Debug, Clone)]
pub struct DistributionRef(Arc<dyn Distribution>);

impl DistributionRef {
    pub fn new<D: Distribution + 'static>(distribution: D) -> Self {
        Self(Arc::new(distribution))
    }
}

impl std::ops::Deref for DistributionRef {
    type Target = dyn Distribution;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for DistributionRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Categorical distribution over the last axis of `[batch, classes]` logits
#[derive(Debug, Clone)]
pub struct Categorical {
    pub logits: Tensor,
}

impl Categorical {
    #[must_use]
    pub fn new(logits: Tensor) -> Self {
        Self { logits }
    }
}

impl Distribution for Categorical {
    fn name(&self) -> &str {
        "Categorical"
    }

    /// `value` is a one-hot `[batch, classes]` tensor; returns `[batch]`
    fn log_prob(&self, value: &Tensor) -> Result<Tensor> {
        if value.shape() != self.logits.shape() {
            return Err(GanError::ShapeMismatch {
                expected: self.logits.shape().to_vec(),
                got: value.shape().to_vec(),
            });
        }
        let logits = self.logits.data().view().into_dimensionality::<Ix2>().map_err(|_| {
            GanError::ShapeMismatch { expected: vec![0, 0], got: self.logits.shape().to_vec() }
        })?;
        let one_hot = value.data().view().into_dimensionality::<Ix2>().map_err(|_| {
            GanError::ShapeMismatch { expected: vec![0, 0], got: value.shape().to_vec() }
        })?;

        let log_probs = logits
            .outer_iter()
            .zip(one_hot.outer_iter())
            .map(|(row, target)| {
                // Stable log-sum-exp
                let max = row.fold(f32::NEG_INFINITY, |a, &b| a.max(b));
                let lse = max + row.iter().map(|&x| (x - max).exp()).sum::<f32>().ln();
                row.iter().zip(target.iter()).map(|(&l, &t)| t * (l - lse)).sum::<f32>()
            })
            .collect();

        Ok(Tensor::from_vec(format!("{}/log_prob", self.logits.name()), log_probs))
    }
}

/// Elementwise normal distribution
#[derive(Debug, Clone)]
pub struct Normal {
    pub loc: Tensor,
    pub scale: Tensor,
}

impl Normal {
    pub fn new(loc: Tensor, scale: Tensor) -> Result<Self> {
        if loc.shape() != scale.shape() {
            return Err(GanError::ShapeMismatch {
                expected: loc.shape().to_vec(),
                got: scale.shape().to_vec(),
            });
        }
        if let Some(&bad) = scale.data().iter().find(|&&s| s <= 0.0 || s.is_nan()) {
            return Err(GanError::InvalidScale(bad));
        }
        Ok(Self { loc, scale })
    }
}

impl Distribution for Normal {
    fn name(&self) -> &str {
        "Normal"
    }

    fn log_prob(&self, value: &Tensor) -> Result<Tensor> {
        if value.shape() != self.loc.shape() {
            return Err(GanError::ShapeMismatch {
                expected: self.loc.shape().to_vec(),
                got: value.shape().to_vec(),
            });
        }
        let half_ln_2pi = 0.5 * (2.0 * std::f32::consts::PI).ln();
        let log_probs: ArrayD<f32> = Zip::from(value.data())
            .and(self.loc.data())
            .and(self.scale.data())
            .map_collect(|&x, &mu, &sigma| {
                let z = (x - mu) / sigma;
                -0.5 * z * z - sigma.ln() - half_ln_2pi
            });
        Ok(Tensor::new(format!("{}/log_prob", self.loc.name()), log_probs))
    }
}
