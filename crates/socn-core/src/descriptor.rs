//! Molecular descriptor engines.
//!
//! Topological descriptors of small molecules (the Chi connectivity indices)
//! are computed by an external engine. This module only fixes the shape of
//! that collaboration: a descriptor is a configuration value handed to a
//! single `evaluate` capability, never a separate code path.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Chi connectivity descriptors an engine can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
pub enum ChiDescriptor {
    ChiChain,
    ChiCluster,
    ChiPath,
    ChiPathCluster,
}

impl ChiDescriptor {
    /// Fully qualified descriptor class understood by CDK-compatible engines.
    pub fn engine_id(&self) -> &'static str {
        match self {
            ChiDescriptor::ChiChain => "org.openscience.cdk.qsar.descriptors.molecular.ChiChainDescriptor",
            ChiDescriptor::ChiCluster => "org.openscience.cdk.qsar.descriptors.molecular.ChiClusterDescriptor",
            ChiDescriptor::ChiPath => "org.openscience.cdk.qsar.descriptors.molecular.ChiPathDescriptor",
            ChiDescriptor::ChiPathCluster => "org.openscience.cdk.qsar.descriptors.molecular.ChiPathClusterDescriptor",
        }
    }
}

/// Named values returned for one molecule, in engine order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorValues {
    pub names: Vec<String>,
    pub values: Vec<f64>,
}

impl DescriptorValues {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .and_then(|i| self.values.get(i).copied())
    }
}

/// An engine that evaluates a descriptor on a parsed molecule.
pub trait MolecularDescriptorEngine {
    type Molecule;
    type Error;

    fn evaluate(
        &self,
        molecule: &Self::Molecule,
        descriptor: ChiDescriptor,
    ) -> Result<DescriptorValues, Self::Error>;

    /// One result per molecule, stopping at the first failure.
    fn evaluate_many(
        &self,
        molecules: &[Self::Molecule],
        descriptor: ChiDescriptor,
    ) -> Result<Vec<DescriptorValues>, Self::Error> {
        molecules
            .iter()
            .map(|molecule| self.evaluate(molecule, descriptor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    /// Counts characters of a SMILES string; enough to check the plumbing.
    struct CountingEngine;

    impl MolecularDescriptorEngine for CountingEngine {
        type Molecule = String;
        type Error = String;

        fn evaluate(&self, molecule: &String, descriptor: ChiDescriptor) -> Result<DescriptorValues, String> {
            if molecule.is_empty() {
                return Err(format!("empty molecule for {descriptor}"));
            }
            Ok(DescriptorValues {
                names: vec![format!("{descriptor}.atoms")],
                values: vec![molecule.len() as f64],
            })
        }
    }

    #[test]
    fn test_engine_ids_are_distinct() {
        let ids: Vec<&str> = ChiDescriptor::iter().map(|d| d.engine_id()).collect();
        assert_eq!(ids.len(), 4);
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
            assert!(id.ends_with("Descriptor"));
        }
        assert_eq!("ChiPath".parse::<ChiDescriptor>().unwrap(), ChiDescriptor::ChiPath);
    }

    #[test]
    fn test_get_with_ragged_values() {
        let values = DescriptorValues {
            names: vec!["a".to_string(), "b".to_string()],
            values: vec![1.5],
        };
        assert_eq!(values.get("a"), Some(1.5));
        assert_eq!(values.get("b"), None);
    }

    #[test]
    fn test_evaluate_many() {
        let engine = CountingEngine;
        let molecules = vec!["CCO".to_string(), "c1ccccc1".to_string()];
        let out = engine.evaluate_many(&molecules, ChiDescriptor::ChiChain).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].get("ChiChain.atoms"), Some(8.0));
        assert_eq!(out[0].get("missing"), None);

        let molecules = vec!["CCO".to_string(), String::new()];
        let err = engine.evaluate_many(&molecules, ChiDescriptor::ChiCluster).unwrap_err();
        assert_eq!(err, "empty molecule for ChiCluster");
    }
}
