use std::{collections::HashMap, sync::Arc};

use crate::{
    execution::attribute::{Attribute, FromAttribute},
    generator::{Generator, default_generator},
    tensor::{Place, Tensor},
    utils::error::KernelError,
};

/// Everything a kernel sees during one invocation: attributes, named input and
/// output tensors, the target place and the process generator.
pub struct ExecutionContext {
    attrs: HashMap<String, Attribute>,
    inputs: HashMap<String, Vec<Tensor>>,
    outputs: HashMap<String, Tensor>,
    place: Place,
    generator: Arc<Generator>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::with_generator(default_generator())
    }

    pub fn with_generator(generator: Arc<Generator>) -> Self {
        Self {
            attrs: HashMap::new(),
            inputs: HashMap::new(),
            outputs: HashMap::new(),
            place: Place::Cpu,
            generator,
        }
    }

    pub fn with_place(mut self, place: Place) -> Self {
        self.place = place;
        self
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<Attribute>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_input(mut self, name: &str, tensor: Tensor) -> Self {
        self.inputs.insert(name.to_string(), vec![tensor]);
        self
    }

    pub fn with_input_list(mut self, name: &str, tensors: Vec<Tensor>) -> Self {
        self.inputs.insert(name.to_string(), tensors);
        self
    }

    pub fn with_output(mut self, name: &str, tensor: Tensor) -> Self {
        self.outputs.insert(name.to_string(), tensor);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<Attribute>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn attr<T: FromAttribute>(&self, name: &str) -> Result<T, KernelError> {
        let attr = self
            .attrs
            .get(name)
            .ok_or_else(|| KernelError::MissingAttribute(name.to_string()))?;
        T::extract(name, attr)
    }

    /// Like `attr`, but an absent attribute yields `default`. A present
    /// attribute of the wrong type is still an error.
    pub fn attr_or<T: FromAttribute>(&self, name: &str, default: T) -> Result<T, KernelError> {
        match self.attrs.get(name) {
            Some(attr) => T::extract(name, attr),
            None => Ok(default),
        }
    }

    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.get(name).is_some_and(|list| !list.is_empty())
    }

    pub fn input(&self, name: &str) -> Result<&Tensor, KernelError> {
        self.inputs
            .get(name)
            .and_then(|list| list.first())
            .ok_or_else(|| KernelError::MissingInput(name.to_string()))
    }

    /// All tensors bound to a duplicable input; empty when unbound.
    pub fn multi_input(&self, name: &str) -> &[Tensor] {
        self.inputs.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn output(&self, name: &str) -> Result<&Tensor, KernelError> {
        self.outputs
            .get(name)
            .ok_or_else(|| KernelError::MissingOutput(name.to_string()))
    }

    pub fn output_mut(&mut self, name: &str) -> Result<&mut Tensor, KernelError> {
        self.outputs
            .get_mut(name)
            .ok_or_else(|| KernelError::MissingOutput(name.to_string()))
    }

    pub fn take_output(&mut self, name: &str) -> Option<Tensor> {
        self.outputs.remove(name)
    }

    pub fn place(&self) -> Place {
        self.place
    }

    pub fn generator(&self) -> &Arc<Generator> {
        &self.generator
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
