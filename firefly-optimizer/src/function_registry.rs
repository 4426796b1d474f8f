/// Shared objective registry for Firefly runs and benchmarks
use crate::error::{FireflyError, Result};
use crate::objective::ObjectiveDescriptor;
use firefly_test_functions::get_function_metadata;
use std::collections::HashMap;

/// Registry mapping names to objective descriptors.
pub struct ObjectiveRegistry {
    objectives: HashMap<String, ObjectiveDescriptor>,
}

impl ObjectiveRegistry {
    /// Creates a new registry holding the whole benchmark catalogue.
    pub fn new() -> Self {
        let objectives = get_function_metadata()
            .into_iter()
            .map(|(name, meta)| (name, ObjectiveDescriptor::from_metadata(&meta)))
            .collect();
        Self { objectives }
    }

    /// Creates a registry with no objectives.
    pub fn empty() -> Self {
        Self {
            objectives: HashMap::new(),
        }
    }

    /// Looks up an objective by name, falling back to a case-insensitive match.
    pub fn get(&self, name: &str) -> Option<&ObjectiveDescriptor> {
        self.objectives.get(name).or_else(|| {
            self.objectives
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, descriptor)| descriptor)
        })
    }

    /// Looks up an objective by name.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::UnknownFunction` if no objective matches.
    pub fn descriptor_or_err(&self, name: &str) -> Result<&ObjectiveDescriptor> {
        self.get(name).ok_or_else(|| FireflyError::UnknownFunction {
            name: name.to_string(),
        })
    }

    /// Adds or replaces an objective, keyed by its name.
    pub fn register(&mut self, descriptor: ObjectiveDescriptor) {
        self.objectives
            .insert(descriptor.name().to_string(), descriptor);
    }

    /// Lists all registered objective names, sorted.
    pub fn list_functions(&self) -> Vec<String> {
        let mut names: Vec<String> = self.objectives.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered objectives.
    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }
}

impl Default for ObjectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{DimensionConstraint, FnObjective};
    use ndarray::{Array1, array};

    #[test]
    fn test_function_registry() {
        let registry = ObjectiveRegistry::new();

        assert_eq!(registry.len(), 23);
        assert!(registry.get("sphere").is_some());
        assert!(registry.get("rastrigin").is_some());
        assert!(registry.get("nonexistent").is_none());

        let sphere = registry.get("sphere").unwrap();
        let x = array![1.0, 2.0];
        assert_eq!(sphere.evaluate(&x), 5.0);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let registry = ObjectiveRegistry::new();
        let easom = registry.get("Easom").unwrap();
        assert_eq!(easom.name(), "easom");
        assert_eq!(easom.dimension(), DimensionConstraint::Exact(2));
    }

    #[test]
    fn test_unknown_function_error() {
        let registry = ObjectiveRegistry::new();
        let err = registry.descriptor_or_err("bogus").unwrap_err();
        assert!(err.is_precondition_error());
        assert_eq!(err.to_string(), "unknown objective function 'bogus'");
    }

    #[test]
    fn test_register_custom_objective() {
        let mut registry = ObjectiveRegistry::empty();
        assert!(registry.is_empty());

        let shifted = ObjectiveDescriptor::new(
            "shifted_sphere",
            DimensionConstraint::Any,
            (-3.0, 3.0),
            FnObjective::new(|x: &Array1<f64>| x.iter().map(|v| (v - 1.0).powi(2)).sum()),
        )
        .unwrap();
        registry.register(shifted);

        assert_eq!(registry.list_functions(), vec!["shifted_sphere".to_string()]);
        let d = registry.get("shifted_sphere").unwrap();
        assert_eq!(d.evaluate(&array![1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_list_is_sorted() {
        let names = ObjectiveRegistry::new().list_functions();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first().map(String::as_str), Some("ackley"));
    }
}
