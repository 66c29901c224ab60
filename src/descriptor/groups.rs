use crate::atom::Atom;
use crate::bond::Bond;
use crate::mol::Mol;
use crate::pattern::{count_matches, ACIDIC_GROUPS, BASIC_GROUPS};

pub fn acidic_group_count(mol: &Mol<Atom, Bond>) -> i64 {
    count_matches(mol, &ACIDIC_GROUPS) as i64
}

pub fn basic_group_count(mol: &Mol<Atom, Bond>) -> i64 {
    count_matches(mol, &BASIC_GROUPS) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn acids() {
        assert_eq!(acidic_group_count(&testing::acetic_acid()), 1);
        assert_eq!(acidic_group_count(&testing::acetate()), 1);
        assert_eq!(acidic_group_count(&testing::tetrazole()), 2);
        assert_eq!(acidic_group_count(&testing::ethanol()), 0);
    }

    #[test]
    fn bases() {
        assert_eq!(basic_group_count(&testing::methylamine()), 1);
        assert_eq!(basic_group_count(&testing::methylammonium()), 1);
        assert_eq!(basic_group_count(&testing::trimethylamine()), 1);
        assert_eq!(basic_group_count(&testing::acetamidine()), 2);
        assert_eq!(basic_group_count(&testing::acetic_acid()), 0);
    }

    #[test]
    fn salt_has_one_of_each() {
        let salt = testing::sodium_chloride();
        assert_eq!(acidic_group_count(&salt), 1);
        assert_eq!(basic_group_count(&salt), 1);
    }
}
