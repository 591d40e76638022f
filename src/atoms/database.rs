/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Periodic table lookup for element symbols
//!
//! Crystallographic files label sites in many ways (`Al`, `AL1`, `Al3+`,
//! `O2-`). This module maps such labels back to canonical element symbols.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Element symbols indexed by atomic number minus one
const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh",
    "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Lower-cased symbol to atomic number
static SYMBOL_LOOKUP: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, symbol)| (symbol.to_lowercase(), i as i32 + 1))
        .collect()
});

/// Provides element symbols for atomic numbers
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if atomic_number < 1 {
        return None;
    }
    ELEMENT_SYMBOLS.get(atomic_number as usize - 1).copied()
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE"
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    SYMBOL_LOOKUP.get(&symbol.trim().to_lowercase()).copied()
}

/// Canonical spelling of an element symbol ("FE" -> "Fe")
pub fn canonical_symbol(symbol: &str) -> Option<&'static str> {
    atomic_number_from_symbol(symbol).and_then(element_symbol)
}

/// Extract the element from a site label or type symbol
///
/// Takes the leading alphabetic run of the label and tries the two-letter
/// reading first, falling back to the first letter (`OW1` -> `O`).
pub fn element_from_label(label: &str) -> Option<&'static str> {
    let letters: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    if letters.is_empty() {
        return None;
    }

    if letters.len() >= 2 {
        if let Some(symbol) = canonical_symbol(&letters[..2]) {
            return Some(symbol);
        }
    }

    canonical_symbol(&letters[..1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(element_symbol(13), Some("Al"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(119), None);
        assert_eq!(atomic_number_from_symbol("AL"), Some(13));
        assert_eq!(atomic_number_from_symbol(" o "), Some(8));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
    }

    #[test]
    fn test_element_from_label() {
        assert_eq!(element_from_label("Al1"), Some("Al"));
        assert_eq!(element_from_label("AL3+"), Some("Al"));
        assert_eq!(element_from_label("O2-"), Some("O"));
        assert_eq!(element_from_label("OW1"), Some("O"));
        assert_eq!(element_from_label("Cl"), Some("Cl"));
        assert_eq!(element_from_label("12"), None);
        assert_eq!(element_from_label("Q"), None);
    }
}
