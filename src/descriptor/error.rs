use thiserror::Error;

use crate::charges::ChargeError;

/// Why a descriptor could not be computed for a molecule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// The descriptor needs a single connected fragment.
    #[error("molecule has {components} disconnected fragments")]
    Disconnected { components: usize },

    #[error("unknown element symbol {0:?}")]
    UnknownElement(String),

    /// No partial-charge parameters exist for this element.
    #[error("unsupported element with atomic number {atomic_num}")]
    UnsupportedElement { atomic_num: u8 },

    #[error("descriptor is undefined for a molecule without atoms")]
    EmptyMolecule,
}

impl From<ChargeError> for DescriptorError {
    fn from(err: ChargeError) -> Self {
        match err {
            ChargeError::UnsupportedElement { atomic_num, .. } => {
                DescriptorError::UnsupportedElement { atomic_num }
            }
        }
    }
}
