/// Periodic table row used by the descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementData {
    pub atomic_num: u8,
    pub symbol: &'static str,
    /// Standard atomic weight (natural isotopic abundance), in Da.
    pub atomic_weight: f64,
    /// Valence-shell electrons of the neutral atom.
    pub outer_electrons: u8,
}

/// Looks up element data by atomic number. Covers H through Og.
pub fn element(atomic_num: u8) -> Option<&'static ElementData> {
    match atomic_num {
        0 => None,
        n => ELEMENTS.get(n as usize - 1),
    }
}

/// Case-sensitive symbol lookup (`"Cl"`, not `"CL"`).
pub fn atomic_num_from_symbol(symbol: &str) -> Option<u8> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol == symbol)
        .map(|e| e.atomic_num)
}

pub fn outer_shell_electrons(atomic_num: u8) -> u8 {
    element(atomic_num).map_or(0, |e| e.outer_electrons)
}

macro_rules! elements {
    ($(($z:expr, $sym:expr, $w:expr, $outer:expr)),* $(,)?) => {
        [$(ElementData {
            atomic_num: $z,
            symbol: $sym,
            atomic_weight: $w,
            outer_electrons: $outer,
        }),*]
    };
}

static ELEMENTS: [ElementData; 118] = elements![
    (1, "H", 1.008, 1),
    (2, "He", 4.002602, 2),
    (3, "Li", 6.94, 1),
    (4, "Be", 9.0121831, 2),
    (5, "B", 10.81, 3),
    (6, "C", 12.011, 4),
    (7, "N", 14.007, 5),
    (8, "O", 15.999, 6),
    (9, "F", 18.998403163, 7),
    (10, "Ne", 20.1797, 8),
    (11, "Na", 22.98976928, 1),
    (12, "Mg", 24.305, 2),
    (13, "Al", 26.9815385, 3),
    (14, "Si", 28.085, 4),
    (15, "P", 30.973761998, 5),
    (16, "S", 32.06, 6),
    (17, "Cl", 35.45, 7),
    (18, "Ar", 39.948, 8),
    (19, "K", 39.0983, 1),
    (20, "Ca", 40.078, 2),
    (21, "Sc", 44.955908, 3),
    (22, "Ti", 47.867, 4),
    (23, "V", 50.9415, 5),
    (24, "Cr", 51.9961, 6),
    (25, "Mn", 54.938044, 7),
    (26, "Fe", 55.845, 8),
    (27, "Co", 58.933194, 9),
    (28, "Ni", 58.6934, 10),
    (29, "Cu", 63.546, 11),
    (30, "Zn", 65.38, 12),
    (31, "Ga", 69.723, 3),
    (32, "Ge", 72.630, 4),
    (33, "As", 74.921595, 5),
    (34, "Se", 78.971, 6),
    (35, "Br", 79.904, 7),
    (36, "Kr", 83.798, 8),
    (37, "Rb", 85.4678, 1),
    (38, "Sr", 87.62, 2),
    (39, "Y", 88.90584, 3),
    (40, "Zr", 91.224, 4),
    (41, "Nb", 92.90637, 5),
    (42, "Mo", 95.95, 6),
    (43, "Tc", 98.0, 7),
    (44, "Ru", 101.07, 8),
    (45, "Rh", 102.90550, 9),
    (46, "Pd", 106.42, 10),
    (47, "Ag", 107.8682, 11),
    (48, "Cd", 112.414, 12),
    (49, "In", 114.818, 3),
    (50, "Sn", 118.710, 4),
    (51, "Sb", 121.760, 5),
    (52, "Te", 127.60, 6),
    (53, "I", 126.90447, 7),
    (54, "Xe", 131.293, 8),
    (55, "Cs", 132.90545196, 1),
    (56, "Ba", 137.327, 2),
    (57, "La", 138.90547, 3),
    (58, "Ce", 140.116, 4),
    (59, "Pr", 140.90766, 3),
    (60, "Nd", 144.242, 4),
    (61, "Pm", 145.0, 5),
    (62, "Sm", 150.36, 6),
    (63, "Eu", 151.964, 7),
    (64, "Gd", 157.25, 8),
    (65, "Tb", 158.925354, 9),
    (66, "Dy", 162.500, 10),
    (67, "Ho", 164.930328, 11),
    (68, "Er", 167.259, 12),
    (69, "Tm", 168.934218, 13),
    (70, "Yb", 173.045, 14),
    (71, "Lu", 174.9668, 3),
    (72, "Hf", 178.486, 4),
    (73, "Ta", 180.94788, 5),
    (74, "W", 183.84, 6),
    (75, "Re", 186.207, 7),
    (76, "Os", 190.23, 8),
    (77, "Ir", 192.217, 9),
    (78, "Pt", 195.084, 10),
    (79, "Au", 196.966570, 11),
    (80, "Hg", 200.592, 12),
    (81, "Tl", 204.38, 3),
    (82, "Pb", 207.2, 4),
    (83, "Bi", 208.98040, 5),
    (84, "Po", 209.0, 6),
    (85, "At", 210.0, 7),
    (86, "Rn", 222.0, 8),
    (87, "Fr", 223.0, 1),
    (88, "Ra", 226.0, 2),
    (89, "Ac", 227.0, 3),
    (90, "Th", 232.0377, 4),
    (91, "Pa", 231.03588, 3),
    (92, "U", 238.02891, 4),
    (93, "Np", 237.0, 5),
    (94, "Pu", 244.0, 6),
    (95, "Am", 243.0, 7),
    (96, "Cm", 247.0, 8),
    (97, "Bk", 247.0, 9),
    (98, "Cf", 251.0, 10),
    (99, "Es", 252.0, 11),
    (100, "Fm", 257.0, 12),
    (101, "Md", 258.0, 13),
    (102, "No", 259.0, 14),
    (103, "Lr", 266.0, 3),
    (104, "Rf", 267.0, 4),
    (105, "Db", 268.0, 5),
    (106, "Sg", 269.0, 6),
    (107, "Bh", 270.0, 7),
    (108, "Hs", 277.0, 8),
    (109, "Mt", 278.0, 9),
    (110, "Ds", 281.0, 10),
    (111, "Rg", 282.0, 11),
    (112, "Cn", 285.0, 12),
    (113, "Nh", 286.0, 3),
    (114, "Fl", 289.0, 4),
    (115, "Mc", 290.0, 5),
    (116, "Lv", 293.0, 6),
    (117, "Ts", 294.0, 7),
    (118, "Og", 294.0, 8),
];
