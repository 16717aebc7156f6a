//! Ordered parameter collection
//!
//! This module provides the [`ParameterSet`] struct, the ordered mapping from
//! parameter name to [`Parameter`] that a model binds to its function.
//! Order matters: the n-th parameter receives the n-th value of a parameter
//! vector when the model is evaluated.

use crate::parameters::parameter::{Parameter, ParameterError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::Index;

/// An ordered collection of parameters keyed by name
///
/// Inserting a parameter under a name that is already present replaces the
/// stored parameter but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Parameter>", into = "Vec<Parameter>")]
pub struct ParameterSet {
    /// Parameters in declaration order
    params: Vec<Parameter>,

    /// Position of each parameter in `params`
    index: HashMap<String, usize>,
}

impl ParameterSet {
    /// Create a new empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the one it replaced (if any)
    ///
    /// # Examples
    ///
    /// ```
    /// use grblc::parameters::{Parameter, ParameterSet};
    ///
    /// let mut params = ParameterSet::new();
    /// params.insert(Parameter::new("T").unwrap());
    /// params.insert(Parameter::new("F").unwrap());
    /// let old = params.insert(Parameter::new("T").unwrap().with_vary(false));
    ///
    /// assert!(old.is_some());
    /// assert_eq!(params.names(), vec!["T", "F"]);
    /// assert!(!params["T"].vary());
    /// ```
    pub fn insert(&mut self, param: Parameter) -> Option<Parameter> {
        match self.index.get(param.name()) {
            Some(&pos) => Some(std::mem::replace(&mut self.params[pos], param)),
            None => {
                self.index.insert(param.name().to_string(), self.params.len());
                self.params.push(param);
                None
            }
        }
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&pos| &self.params[pos])
    }

    /// Get a mutable reference to a parameter by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        match self.index.get(name) {
            Some(&pos) => Some(&mut self.params[pos]),
            None => None,
        }
    }

    /// Get a parameter by name, failing with [`ParameterError::ParameterNotFound`]
    pub fn try_get(&self, name: &str) -> Result<&Parameter, ParameterError> {
        self.get(name)
            .ok_or_else(|| ParameterError::ParameterNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Position of a parameter in the declaration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name()).collect()
    }

    /// Iterate over parameters in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.params.iter()
    }

    /// Parameters an optimizer may adjust, in declaration order
    pub fn varying(&self) -> Vec<&Parameter> {
        self.params.iter().filter(|p| p.vary()).collect()
    }

    /// Parameters held fixed during fitting, in declaration order
    pub fn fixed(&self) -> Vec<&Parameter> {
        self.params.iter().filter(|p| !p.vary()).collect()
    }

    /// Serialize the parameter metadata to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load parameter metadata from a JSON string
    ///
    /// The JSON is an array of parameters; order is preserved.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromIterator<Parameter> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for param in iter {
            set.insert(param);
        }
        set
    }
}

impl From<Vec<Parameter>> for ParameterSet {
    fn from(params: Vec<Parameter>) -> Self {
        params.into_iter().collect()
    }
}

impl From<ParameterSet> for Vec<Parameter> {
    fn from(set: ParameterSet) -> Self {
        set.params
    }
}

impl Index<&str> for ParameterSet {
    type Output = Parameter;

    fn index(&self, name: &str) -> &Parameter {
        match self.get(name) {
            Some(param) => param,
            None => panic!("no parameter named '{}'", name),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
