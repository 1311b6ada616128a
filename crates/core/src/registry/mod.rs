use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    search::generate_optional,
    step::{Step, Value},
    Result, VisualiserError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmCategory {
    Search,
    Sort,
    Graph,
    Tree,
    Other,
}

impl AlgorithmCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "search" => Some(Self::Search),
            "sort" => Some(Self::Sort),
            "graph" => Some(Self::Graph),
            "tree" => Some(Self::Tree),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Layout a presentation layer should use for an algorithm's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizerKind {
    Array,
    Graph,
    Tree,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// Array plus optional target an algorithm starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayData {
    pub array: Vec<Value>,
    pub target: Option<Value>,
}

/// Static description of a visualisable algorithm.
#[derive(Clone, Copy, Serialize)]
pub struct AlgorithmDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: AlgorithmCategory,
    pub visualizer: VisualizerKind,
    pub description: &'static str,
    pub complexity: Complexity,
    pub use_cases: &'static [&'static str],
    initial_array: &'static [Value],
    initial_target: Option<Value>,
    #[serde(skip)]
    generate: fn(&[Value], Option<Value>) -> Vec<Step>,
}

impl AlgorithmDefinition {
    pub fn initial_data(&self) -> ArrayData {
        ArrayData {
            array: self.initial_array.to_vec(),
            target: self.initial_target,
        }
    }

    pub fn generate_steps(&self, data: &ArrayData) -> Vec<Step> {
        (self.generate)(&data.array, data.target)
    }

    /// Plain step-generation function, usable as a
    /// [`crate::search::StepGenerator`].
    pub fn generator(&self) -> fn(&[Value], Option<Value>) -> Vec<Step> {
        self.generate
    }
}

impl fmt::Debug for AlgorithmDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDefinition")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("visualizer", &self.visualizer)
            .finish_non_exhaustive()
    }
}

pub const LINEAR_SEARCH: AlgorithmDefinition = AlgorithmDefinition {
    id: "linear-search",
    name: "Linear Search",
    category: AlgorithmCategory::Search,
    visualizer: VisualizerKind::Array,
    description: "Walks the array from the front until the target value turns up.",
    complexity: Complexity {
        best: "O(1)",
        average: "O(n)",
        worst: "O(n)",
        space: "O(1)",
    },
    use_cases: &[
        "Searching small arrays",
        "Unsorted data",
        "Returning the first matching element",
    ],
    initial_array: &[23, 45, 12, 78, 34, 56, 89, 23, 67],
    initial_target: Some(34),
    generate: generate_optional,
};

/// Lookup table of every algorithm the visualiser knows about.
#[derive(Debug, Clone)]
pub struct AlgorithmRegistry {
    algorithms: Vec<AlgorithmDefinition>,
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new(vec![LINEAR_SEARCH])
    }
}

impl AlgorithmRegistry {
    pub fn new(algorithms: Vec<AlgorithmDefinition>) -> Self {
        Self { algorithms }
    }

    pub fn get(&self, id: &str) -> Option<&AlgorithmDefinition> {
        self.algorithms.iter().find(|algorithm| algorithm.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&AlgorithmDefinition> {
        self.get(id)
            .ok_or_else(|| VisualiserError::UnknownAlgorithm(id.to_string()))
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|algorithm| algorithm.id).collect()
    }

    pub fn by_category(&self, category: AlgorithmCategory) -> Vec<&AlgorithmDefinition> {
        self.algorithms
            .iter()
            .filter(|algorithm| algorithm.category == category)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmDefinition> {
        self.algorithms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_linear_search() {
        let registry = AlgorithmRegistry::default();

        assert_eq!(registry.ids(), vec!["linear-search"]);
        let definition = registry.require("linear-search").unwrap();
        let steps = definition.generate_steps(&definition.initial_data());
        assert_eq!(steps.len(), 5);
        assert!(steps[4].found);
    }

    #[test]
    fn unknown_ids_are_errors() {
        let registry = AlgorithmRegistry::default();

        assert!(registry.get("bubble-sort").is_none());
        let err = registry.require("bubble-sort").unwrap_err();
        assert!(format!("{err}").contains("bubble-sort"));
    }

    #[test]
    fn filters_by_category() {
        let registry = AlgorithmRegistry::default();

        assert_eq!(registry.by_category(AlgorithmCategory::Search).len(), 1);
        assert!(registry.by_category(AlgorithmCategory::Sort).is_empty());
        assert_eq!(
            AlgorithmCategory::parse(" Search "),
            Some(AlgorithmCategory::Search)
        );
        assert_eq!(AlgorithmCategory::parse("heap"), None);
    }

    #[test]
    fn definition_generator_drives_a_controller() {
        let mut ctrl = crate::PlaybackController::with_generator(
            crate::ManualClock::new(),
            LINEAR_SEARCH.generator(),
        );
        ctrl.set_data(vec![3, 1, 2], Some(2));

        assert_eq!(ctrl.total_steps(), 3);
    }
}
