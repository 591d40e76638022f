/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use coordination_rs::input::{parse_cif, parse_cif_str, CifParser, InputError, ParserConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const ROCK_SALT: &str = "\
# Face-centred rock salt with aluminium on the cation site
data_rocksalt
_cell_length_a    4.0000(2)
_cell_length_b    4.0000(2)
_cell_length_c    4.0000(2)
_cell_angle_alpha 90
_cell_angle_beta  90
_cell_angle_gamma 90

loop_
_symmetry_equiv_pos_as_xyz
'x, y, z'
'x+1/2, y+1/2, z'
'x+1/2, y, z+1/2'
'x, y+1/2, z+1/2'

loop_
_atom_site_label
_atom_site_type_symbol
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Al1 Al3+ 0.0 0.0 0.0
O1  O2-  0.5 0.0 0.0
";

fn write_cif(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".cif").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_rock_salt_unit_cell() {
    let file = write_cif(ROCK_SALT);
    let structure = parse_cif(file.path()).unwrap();

    assert_eq!(structure.title(), "rocksalt");
    assert_eq!(structure.atom_count(), 8);
    assert_relative_eq!(structure.lattice().volume(), 64.0, epsilon = 1e-9);

    let al = structure.atoms().iter().filter(|a| a.symbol() == "Al").count();
    let o = structure.atoms().iter().filter(|a| a.symbol() == "O").count();
    assert_eq!((al, o), (4, 4));

    for atom in structure.atoms() {
        let f = atom.fractional();
        for axis in 0..3 {
            assert!((0.0..1.0).contains(&f[axis]), "{} not wrapped", atom);
        }
    }
}

#[test]
fn test_symmetry_expansion_can_be_disabled() {
    let file = write_cif(ROCK_SALT);
    let parser = CifParser::new(ParserConfig {
        input_path: file.path().to_path_buf(),
        expand_symmetry: false,
        ..Default::default()
    });

    let structure = parser.parse::<&std::path::Path>(None).unwrap();
    assert_eq!(structure.atom_count(), 2);
}

#[test]
fn test_cartesian_positions() {
    let structure = parse_cif_str(ROCK_SALT).unwrap();
    let oxygen = structure
        .atoms()
        .iter()
        .find(|a| a.symbol() == "O" && a.fractional()[0] == 0.5 && a.fractional()[1] == 0.0)
        .unwrap();

    assert_relative_eq!(oxygen.position().x, 2.0, epsilon = 1e-9);
    assert_relative_eq!(oxygen.position().y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(oxygen.position().z, 0.0, epsilon = 1e-9);
}

#[test]
fn test_duplicate_images_are_merged() {
    // Every operation maps the site at the origin onto itself
    let content = "\
data_cubic
_cell_length_a 3.0
_cell_length_b 3.0
_cell_length_c 3.0
loop_
_space_group_symop_operation_xyz
x,y,z
-x,-y,-z
y,x,z
-x+1,y,-z
loop_
_atom_site_label
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Fe1 0 0 0
";
    let structure = parse_cif_str(content).unwrap();
    assert_eq!(structure.atom_count(), 1);
    assert_eq!(structure.atoms()[0].symbol(), "Fe");
}

#[test]
fn test_monoclinic_cell() {
    let content = "\
data_mono
_cell_length_a 5.0
_cell_length_b 6.0
_cell_length_c 7.0
_cell_angle_beta 100.0
loop_
_atom_site_label
_atom_site_fract_x
_atom_site_fract_y
_atom_site_fract_z
Ga1 0.1 0.2 0.3
";
    let structure = parse_cif_str(content).unwrap();
    let expected = 5.0 * 6.0 * 7.0 * 100f64.to_radians().sin();
    assert_relative_eq!(structure.lattice().volume(), expected, epsilon = 1e-9);
    assert_eq!(structure.atoms()[0].symbol(), "Ga");
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        parse_cif("/nonexistent/structure.cif"),
        Err(InputError::IoError(_))
    ));
}

#[test]
fn test_missing_cell_length() {
    let content = ROCK_SALT.replace("_cell_length_b    4.0000(2)\n", "");
    assert!(matches!(
        parse_cif_str(&content),
        Err(InputError::MissingField(field)) if field == "_cell_length_b"
    ));
}

#[test]
fn test_missing_site_loop() {
    let content = "data_empty\n_cell_length_a 4.0\n_cell_length_b 4.0\n_cell_length_c 4.0\n";
    assert!(matches!(
        parse_cif_str(content),
        Err(InputError::MissingField(_))
    ));
}

#[test]
fn test_unknown_element() {
    let content = ROCK_SALT.replace("Al1 Al3+", "Xx1 Xx");
    assert!(matches!(
        parse_cif_str(&content),
        Err(InputError::InvalidFormat(_))
    ));
}

#[test]
fn test_invalid_symmetry_operation() {
    let content = ROCK_SALT.replace("'x+1/2, y, z+1/2'", "'x+1/2, q, z+1/2'");
    assert!(matches!(
        parse_cif_str(&content),
        Err(InputError::InvalidSymmetry { .. })
    ));
}
