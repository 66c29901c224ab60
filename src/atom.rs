/// Default atom type for a molecular graph node.
///
/// `Atom` stores the properties you would read off a structural formula.
/// Computed properties such as hybridization or partial charge are derived
/// on demand by the descriptor that needs them.
///
/// # Examples
///
/// ```
/// use chemcrab_descriptors::{Atom, HasAtomicNum};
///
/// let carbon = Atom {
///     atomic_num: 6,
///     hydrogen_count: 3,
///     ..Atom::default()
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// assert!(!carbon.is_hydrogen());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). `0` is a dummy atom.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Mass number. `0` means natural isotopic abundance.
    pub isotope: u16,
    /// Number of implicit hydrogens on this atom.
    ///
    /// These are not graph nodes. [`add_hs`](crate::hydrogen::add_hs) turns
    /// them into explicit atoms.
    pub hydrogen_count: u8,
    /// Whether this atom was perceived as aromatic.
    ///
    /// Perception happens upstream; descriptors only read the flag.
    pub is_aromatic: bool,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }

    pub fn with_hydrogens(atomic_num: u8, hydrogen_count: u8) -> Self {
        Self {
            atomic_num,
            hydrogen_count,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasIsotope for Atom {
    fn isotope(&self) -> u16 {
        self.isotope
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}
