//! Variables and the scopes that group them.

use std::fmt;
use std::sync::Arc;

use super::tensor::Tensor;

/// Named model parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Fully qualified name, e.g. `generator/dense/kernel`
    pub name: Arc<str>,
    /// Current value
    pub value: Tensor,
    /// Whether optimizers should update this variable
    pub trainable: bool,
}

impl Variable {
    /// Create a trainable variable
    pub fn trainable(name: impl Into<Arc<str>>, value: Tensor) -> Self {
        Self { name: name.into(), value, trainable: true }
    }

    /// Create a non-trainable variable (moving averages, counters)
    pub fn frozen(name: impl Into<Arc<str>>, value: Tensor) -> Self {
        Self { name: name.into(), value, trainable: false }
    }
}

/// Namespace identifier grouping a component's variables
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(Arc<str>);

impl Scope {
    /// Create a scope; a trailing `/` is dropped, so `generator/` names `generator`
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name: Arc<str> = name.into();
        match name.strip_suffix('/') {
            Some(trimmed) => Self(trimmed.trim_end_matches('/').into()),
            None => Self(name),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Nested scope `self/name`
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self::new(self.variable_name(name))
    }

    /// Fully qualified name for a variable created in this scope
    #[must_use]
    pub fn variable_name(&self, local: &str) -> String {
        if self.0.is_empty() {
            local.to_string()
        } else {
            format!("{}/{local}", self.0)
        }
    }

    /// True if the variable lives in this scope or a nested one
    #[must_use]
    pub fn contains(&self, variable: &Variable) -> bool {
        if self.0.is_empty() {
            return true;
        }
        variable
            .name
            .strip_prefix(&*self.0)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Trainable variables under this scope, in their original order
    #[must_use]
    pub fn filter_variables(&self, variables: &[Variable]) -> Vec<Variable> {
        variables.iter().filter(|v| v.trainable && self.contains(v)).cloned().collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
