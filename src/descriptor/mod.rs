//! Molecular descriptors.
//!
//! Every descriptor is a variant of the closed [`Descriptor`] enum. Variants
//! carry their own parameters and deserialize from a tagged map such as
//! `{"descriptor": "atom_count", "element": "O"}`, so a descriptor list can
//! live in a JSON or TOML file owned by the caller.
//!
//! Descriptors are independent of one another: each takes the input
//! molecule, derives whatever private copy it needs (hydrogens suppressed
//! or made explicit) and returns a fixed-shape [`DescriptorResult`].

mod autocorrelation;
mod constitutional;
mod error;
mod groups;
mod topological;

use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;

pub use autocorrelation::{
    autocorrelation_charge, autocorrelation_mass, autocorrelation_polarizability,
    polarizability_factor, AUTOCORRELATION_LAGS,
};
pub use constitutional::{
    aromatic_atoms_count, aromatic_bonds_count, atom_count, bond_count, hybridization_ratio,
};
pub use error::DescriptorError;
pub use groups::{acidic_group_count, basic_group_count};
pub use topological::{
    eccentric_connectivity_index, petitjean_number, spiro_atom_count, wiener_numbers,
};

/// Bond filter for [`Descriptor::BondCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BondKind {
    Single,
    Double,
    Triple,
    Aromatic,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "descriptor", rename_all = "snake_case")]
pub enum Descriptor {
    /// All atoms (implicit hydrogens included) or atoms of one element.
    AtomCount {
        #[serde(default)]
        element: Option<String>,
    },
    /// Bonds between non-hydrogen atoms, optionally of a single kind.
    BondCount {
        #[serde(default)]
        order: Option<BondKind>,
    },
    AromaticAtomsCount,
    AromaticBondsCount,
    HybridizationRatio,
    SpiroAtomCount,
    AcidicGroupCount,
    BasicGroupCount,
    WienerNumbers,
    EccentricConnectivityIndex,
    PetitjeanNumber,
    AutocorrelationMass,
    AutocorrelationCharge,
    AutocorrelationPolarizability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorResult {
    Integer(i64),
    Double(f64),
    DoubleArray(Vec<f64>),
}

impl DescriptorResult {
    /// Number of scalar values, always equal to the number of result names.
    pub fn len(&self) -> usize {
        match self {
            DescriptorResult::Integer(_) | DescriptorResult::Double(_) => 1,
            DescriptorResult::DoubleArray(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            DescriptorResult::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match *self {
            DescriptorResult::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[f64]> {
        match self {
            DescriptorResult::DoubleArray(values) => Some(values),
            _ => None,
        }
    }

    /// Every value widened to `f64`, in name order.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            DescriptorResult::Integer(v) => vec![*v as f64],
            DescriptorResult::Double(v) => vec![*v],
            DescriptorResult::DoubleArray(values) => values.clone(),
        }
    }
}

/// A computed result together with what produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorValue {
    pub descriptor: Descriptor,
    pub names: Vec<String>,
    pub result: DescriptorResult,
}

impl Descriptor {
    /// Every descriptor with default parameters.
    pub fn all() -> Vec<Descriptor> {
        vec![
            Descriptor::AtomCount { element: None },
            Descriptor::BondCount { order: None },
            Descriptor::AromaticAtomsCount,
            Descriptor::AromaticBondsCount,
            Descriptor::HybridizationRatio,
            Descriptor::SpiroAtomCount,
            Descriptor::AcidicGroupCount,
            Descriptor::BasicGroupCount,
            Descriptor::WienerNumbers,
            Descriptor::EccentricConnectivityIndex,
            Descriptor::PetitjeanNumber,
            Descriptor::AutocorrelationMass,
            Descriptor::AutocorrelationCharge,
            Descriptor::AutocorrelationPolarizability,
        ]
    }

    /// Identifier used as the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            Descriptor::AtomCount { .. } => "atom_count",
            Descriptor::BondCount { .. } => "bond_count",
            Descriptor::AromaticAtomsCount => "aromatic_atoms_count",
            Descriptor::AromaticBondsCount => "aromatic_bonds_count",
            Descriptor::HybridizationRatio => "hybridization_ratio",
            Descriptor::SpiroAtomCount => "spiro_atom_count",
            Descriptor::AcidicGroupCount => "acidic_group_count",
            Descriptor::BasicGroupCount => "basic_group_count",
            Descriptor::WienerNumbers => "wiener_numbers",
            Descriptor::EccentricConnectivityIndex => "eccentric_connectivity_index",
            Descriptor::PetitjeanNumber => "petitjean_number",
            Descriptor::AutocorrelationMass => "autocorrelation_mass",
            Descriptor::AutocorrelationCharge => "autocorrelation_charge",
            Descriptor::AutocorrelationPolarizability => "autocorrelation_polarizability",
        }
    }

    /// Result names, one per value; fixed for given parameters.
    pub fn names(&self) -> Vec<String> {
        let single = |name: &str| vec![name.to_string()];
        let lagged = |prefix: &str| {
            (1..=AUTOCORRELATION_LAGS)
                .map(|i| format!("{prefix}{i}"))
                .collect::<Vec<String>>()
        };
        match self {
            Descriptor::AtomCount { element } => match element.as_deref() {
                None | Some("*") => single("nAtom"),
                Some(symbol) => vec![format!("n{symbol}")],
            },
            Descriptor::BondCount { order } => single(match order {
                None => "nB",
                Some(BondKind::Single) => "nBs",
                Some(BondKind::Double) => "nBd",
                Some(BondKind::Triple) => "nBt",
                Some(BondKind::Aromatic) => "nBa",
            }),
            Descriptor::AromaticAtomsCount => single("naAromAtom"),
            Descriptor::AromaticBondsCount => single("nAromBond"),
            Descriptor::HybridizationRatio => single("HybRatio"),
            Descriptor::SpiroAtomCount => single("nSpiro"),
            Descriptor::AcidicGroupCount => single("nAcid"),
            Descriptor::BasicGroupCount => single("nBase"),
            Descriptor::WienerNumbers => vec!["WPATH".to_string(), "WPOL".to_string()],
            Descriptor::EccentricConnectivityIndex => single("ECCEN"),
            Descriptor::PetitjeanNumber => single("PetitjeanNumber"),
            Descriptor::AutocorrelationMass => lagged("ATSm"),
            Descriptor::AutocorrelationCharge => lagged("ATSc"),
            Descriptor::AutocorrelationPolarizability => lagged("ATSp"),
        }
    }

    pub fn calculate(&self, mol: &Mol<Atom, Bond>) -> Result<DescriptorValue, DescriptorError> {
        log::debug!("calculating {} for {} atoms", self.name(), mol.atom_count());

        let result = match self {
            Descriptor::AtomCount { element } => {
                DescriptorResult::Integer(atom_count(mol, element.as_deref())?)
            }
            Descriptor::BondCount { order } => DescriptorResult::Integer(bond_count(mol, *order)),
            Descriptor::AromaticAtomsCount => DescriptorResult::Integer(aromatic_atoms_count(mol)),
            Descriptor::AromaticBondsCount => DescriptorResult::Integer(aromatic_bonds_count(mol)),
            Descriptor::HybridizationRatio => DescriptorResult::Double(hybridization_ratio(mol)),
            Descriptor::SpiroAtomCount => DescriptorResult::Integer(spiro_atom_count(mol)),
            Descriptor::AcidicGroupCount => DescriptorResult::Integer(acidic_group_count(mol)),
            Descriptor::BasicGroupCount => DescriptorResult::Integer(basic_group_count(mol)),
            Descriptor::WienerNumbers => {
                DescriptorResult::DoubleArray(wiener_numbers(mol).to_vec())
            }
            Descriptor::EccentricConnectivityIndex => {
                DescriptorResult::Integer(eccentric_connectivity_index(mol)?)
            }
            Descriptor::PetitjeanNumber => DescriptorResult::Double(petitjean_number(mol)?),
            Descriptor::AutocorrelationMass => {
                DescriptorResult::DoubleArray(autocorrelation_mass(mol)?.to_vec())
            }
            Descriptor::AutocorrelationCharge => {
                DescriptorResult::DoubleArray(autocorrelation_charge(mol)?.to_vec())
            }
            Descriptor::AutocorrelationPolarizability => {
                DescriptorResult::DoubleArray(autocorrelation_polarizability(mol)?.to_vec())
            }
        };

        Ok(DescriptorValue {
            descriptor: self.clone(),
            names: self.names(),
            result,
        })
    }
}

/// Runs each descriptor on `mol`; a failure in one does not affect the rest.
pub fn calculate_all(
    mol: &Mol<Atom, Bond>,
    descriptors: &[Descriptor],
) -> Vec<Result<DescriptorValue, DescriptorError>> {
    descriptors
        .iter()
        .map(|descriptor| {
            descriptor.calculate(mol).inspect_err(|err| {
                log::warn!("{} failed: {err}", descriptor.name());
            })
        })
        .collect()
}

/// A descriptor selection, typically read from a file.
///
/// A missing `descriptors` key selects every descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorConfig {
    #[serde(default = "Descriptor::all")]
    pub descriptors: Vec<Descriptor>,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            descriptors: Descriptor::all(),
        }
    }
}

impl DescriptorConfig {
    pub fn calculate(
        &self,
        mol: &Mol<Atom, Bond>,
    ) -> Vec<Result<DescriptorValue, DescriptorError>> {
        calculate_all(mol, &self.descriptors)
    }
}
