//! Lightcurve models.
//!
//! A [`Model`] binds a [`ModelFunction`] (a numeric function together with the
//! ordered names of its arguments) to a [`ParameterSet`] describing those
//! arguments. The independent variable is never part of the argument list.
//!
//! Models are built once, either from one of the presets in
//! [`models`](crate::models) or from a custom function, and are then evaluated
//! many times with different parameter vectors by an optimizer or plotter.

use crate::config::EvalOptions;
use crate::error::{GrbError, Result};
use crate::parameters::{Parameter, ParameterError, ParameterSet};
use ndarray::{Array1, ArrayView1};
use std::fmt;
use std::ops::Index;
use std::sync::Arc;

/// Signature of the numeric function wrapped by a [`ModelFunction`].
///
/// The slice always holds exactly one value per declared argument, in
/// declaration order.
pub type EvalFn =
    dyn Fn(ArrayView1<'_, f64>, &[f64], &EvalOptions) -> Result<Array1<f64>> + Send + Sync;

/// Which family a model function belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Willingale et al. (2007)
    W07,
    /// Sharply broken power law
    SimpleBpl,
    /// Smoothly broken power law
    SmoothBpl,
    /// User-supplied function
    Custom,
}

/// A numeric model function and its argument schema.
#[derive(Clone)]
pub struct ModelFunction {
    kind: ModelKind,
    name: String,
    arg_names: Vec<String>,
    eval: Arc<EvalFn>,
}

impl ModelFunction {
    /// Create a custom model function
    ///
    /// `arg_names` lists the function's parameters in the order their values
    /// appear in the slice handed to `eval`. Names must be non-empty and unique.
    ///
    /// # Examples
    ///
    /// ```
    /// use grblc::model::ModelFunction;
    ///
    /// let line = ModelFunction::new("line", &["m", "b"], |x, p, _| {
    ///     Ok(x.mapv(|x| p[0] * x + p[1]))
    /// })
    /// .unwrap();
    /// assert_eq!(line.arg_names(), &["m".to_string(), "b".to_string()]);
    /// ```
    pub fn new<F>(name: &str, arg_names: &[&str], eval: F) -> Result<Self>
    where
        F: Fn(ArrayView1<'_, f64>, &[f64], &EvalOptions) -> Result<Array1<f64>>
            + Send
            + Sync
            + 'static,
    {
        for (i, arg) in arg_names.iter().enumerate() {
            if arg.is_empty() {
                return Err(ParameterError::EmptyName.into());
            }
            if arg_names[..i].contains(arg) {
                return Err(GrbError::InvalidInput(format!(
                    "argument '{}' is declared twice in function '{}'",
                    arg, name
                )));
            }
        }

        Ok(Self::preset(ModelKind::Custom, name, arg_names, eval))
    }

    /// Built-in functions have fixed, known-good schemas.
    pub(crate) fn preset<F>(kind: ModelKind, name: &str, arg_names: &[&str], eval: F) -> Self
    where
        F: Fn(ArrayView1<'_, f64>, &[f64], &EvalOptions) -> Result<Array1<f64>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            kind,
            name: name.to_string(),
            arg_names: arg_names.iter().map(|s| s.to_string()).collect(),
            eval: Arc::new(eval),
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared argument names, excluding the independent variable
    pub fn arg_names(&self) -> &[String] {
        &self.arg_names
    }

    pub fn arity(&self) -> usize {
        self.arg_names.len()
    }

    /// Evaluate the function. `params` must hold exactly one value per argument.
    pub fn call(
        &self,
        x: ArrayView1<'_, f64>,
        params: &[f64],
        options: &EvalOptions,
    ) -> Result<Array1<f64>> {
        if params.len() != self.arity() {
            return Err(GrbError::DimensionMismatch(format!(
                "function '{}' takes {} parameters {:?}, got {}",
                self.name,
                self.arity(),
                self.arg_names,
                params.len()
            )));
        }

        let y = (self.eval)(x, params, options)?;
        if y.len() != x.len() {
            return Err(GrbError::DimensionMismatch(format!(
                "function '{}' returned {} values for {} inputs",
                self.name,
                y.len(),
                x.len()
            )));
        }
        Ok(y)
    }
}

impl fmt::Debug for ModelFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelFunction")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("arg_names", &self.arg_names)
            .finish_non_exhaustive()
    }
}

const UNBOUNDED: [f64; 4] = [
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
];

/// A model function bound to its parameter descriptions.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    slug: Option<String>,
    func: ModelFunction,
    func_args: ParameterSet,
    bounds: [f64; 4],
}

impl Model {
    /// Wrap a function, generating one unbounded, varying parameter per
    /// declared argument. The model is named after the function.
    pub fn new(func: ModelFunction) -> Result<Self> {
        let func_args = func
            .arg_names()
            .iter()
            .map(|name| Parameter::new(name))
            .collect::<std::result::Result<ParameterSet, _>>()?;

        log::debug!(
            "built model '{}' with default parameters {:?}",
            func.name(),
            func.arg_names()
        );

        Ok(Self {
            name: func.name().to_string(),
            slug: None,
            func,
            func_args,
            bounds: UNBOUNDED,
        })
    }

    /// Assemble a preset model whose parameters are known to match `func`.
    pub(crate) fn preset(
        name: &str,
        slug: &str,
        func: ModelFunction,
        func_args: Vec<Parameter>,
    ) -> Self {
        debug_assert!(func_args
            .iter()
            .all(|p| func.arg_names().iter().any(|a| a == p.name())));

        Self {
            name: name.to_string(),
            slug: Some(slug.to_string()),
            func,
            func_args: func_args.into(),
            bounds: UNBOUNDED,
        }
    }

    /// Set the human-readable name. The slug follows the name unless set explicitly.
    pub fn with_name(mut self, name: &str) -> Self {
        if !name.is_empty() {
            self.name = name.to_string();
        }
        self
    }

    /// Set the short identifier
    pub fn with_slug(mut self, slug: &str) -> Self {
        self.slug = (!slug.is_empty()).then(|| slug.to_string());
        self
    }

    /// Replace the parameter descriptions.
    ///
    /// Every parameter must name an argument of the wrapped function. Later
    /// parameters with a name already seen replace the earlier one.
    ///
    /// ```
    /// use grblc::models::w07_function;
    /// use grblc::model::Model;
    /// use grblc::parameters::Parameter;
    ///
    /// let model = Model::new(w07_function())
    ///     .unwrap()
    ///     .with_func_args(vec![Parameter::new("beta").unwrap()]);
    /// assert!(model.is_err());
    /// ```
    pub fn with_func_args<I>(mut self, func_args: I) -> Result<Self>
    where
        I: IntoIterator<Item = Parameter>,
    {
        let mut set = ParameterSet::new();
        for param in func_args {
            if !self.func.arg_names().iter().any(|a| a == param.name()) {
                return Err(GrbError::InvalidArgument {
                    name: param.name().to_string(),
                    model: self.name.clone(),
                    expected: self.func.arg_names().to_vec(),
                });
            }
            set.insert(param);
        }

        self.func_args = set;
        Ok(self)
    }

    /// Set the plotting/domain bounds `[x_min, x_max, y_min, y_max]`
    pub fn with_bounds(mut self, bounds: &[f64]) -> Result<Self> {
        self.bounds = bounds
            .try_into()
            .map_err(|_| GrbError::BoundsLength(bounds.len()))?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short identifier, defaulting to the name
    pub fn slug(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.name)
    }

    pub fn func(&self) -> &ModelFunction {
        &self.func
    }

    pub fn kind(&self) -> ModelKind {
        self.func.kind()
    }

    /// The parameter descriptions in declaration order
    pub fn func_args(&self) -> &ParameterSet {
        &self.func_args
    }

    /// `[x_min, x_max, y_min, y_max]`
    pub fn bounds(&self) -> &[f64; 4] {
        &self.bounds
    }

    /// Number of declared parameters
    pub fn len(&self) -> usize {
        self.func_args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.func_args.is_empty()
    }

    /// Iterate over parameter names in declaration order
    pub fn iter(&self) -> Names<'_> {
        Names(self.func_args.iter())
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.func_args.get(name)
    }

    /// Toggle whether a parameter may be adjusted by an optimizer
    pub fn set_vary(&mut self, name: &str, vary: bool) -> Result<()> {
        let param = self
            .func_args
            .get_mut(name)
            .ok_or_else(|| ParameterError::ParameterNotFound {
                name: name.to_string(),
            })?;
        param.set_vary(vary);
        Ok(())
    }

    /// Evaluate the model with the default [`EvalOptions`].
    ///
    /// Only the first `self.len()` values of `params` are used; any further
    /// values are ignored. Supplying fewer values is an error.
    pub fn eval(&self, x: &Array1<f64>, params: &[f64]) -> Result<Array1<f64>> {
        self.eval_with(x, params, &EvalOptions::default())
    }

    /// Evaluate the model, forwarding `options` to the wrapped function.
    pub fn eval_with(
        &self,
        x: &Array1<f64>,
        params: &[f64],
        options: &EvalOptions,
    ) -> Result<Array1<f64>> {
        let n = self.len();
        if params.len() < n {
            return Err(GrbError::DimensionMismatch(format!(
                "model '{}' has {} parameters, got {} values",
                self.name,
                n,
                params.len()
            )));
        }

        self.func.call(x.view(), &params[..n], options)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Model({})", self.name)
    }
}

impl Index<&str> for Model {
    type Output = Parameter;

    fn index(&self, name: &str) -> &Parameter {
        &self.func_args[name]
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a str;
    type IntoIter = Names<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the parameter names of a [`Model`].
#[derive(Debug, Clone)]
pub struct Names<'a>(std::slice::Iter<'a, Parameter>);

impl<'a> Iterator for Names<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(|p| p.name())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Names<'_> {}
