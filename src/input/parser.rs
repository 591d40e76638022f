/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Parser turning CIF files into crystal structures

use super::block::{parse_blocks, CifBlock};
use super::config::ParserConfig;
use super::errors::{InputError, Result};
use super::symmetry::{periodic_match, wrap_fractional, SymmetryOperation};

use crate::atoms::{database, CrystalStructure, Lattice, Vector3D};
use log::{debug, info};
use std::fs;
use std::path::Path;

const SYMMETRY_TAGS: [&str; 3] = [
    "_symmetry_equiv_pos_as_xyz",
    "_space_group_symop_operation_xyz",
    "_space_group_symop.operation_xyz",
];

/// An asymmetric-unit site read from the atom site loop
#[derive(Debug, Clone)]
struct Site {
    symbol: &'static str,
    fractional: Vector3D,
}

/// CIF structure parser
#[derive(Debug, Default)]
pub struct CifParser {
    config: ParserConfig,
}

impl CifParser {
    /// Create a new CIF parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a CIF file; `None` reads the path from the configuration
    pub fn parse<P: AsRef<Path>>(&self, path: Option<P>) -> Result<CrystalStructure> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => self.config.input_path.clone(),
        };

        let content = fs::read_to_string(&path)?;
        let default_title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.parse_str(&content, &default_title)
    }

    /// Parse CIF text; `default_title` is used when the block has no name
    pub fn parse_str(&self, content: &str, default_title: &str) -> Result<CrystalStructure> {
        let blocks = parse_blocks(content)?;
        let block = blocks
            .iter()
            .find(|b| b.find_loop(&["_atom_site_fract_x"]).is_some())
            .ok_or_else(|| InputError::MissingField("_atom_site_fract_x loop".to_string()))?;

        let lattice = read_lattice(block)?;
        let sites = read_sites(block)?;
        let operations = if self.config.expand_symmetry {
            read_symmetry(block)?
        } else {
            vec![SymmetryOperation::identity()]
        };

        let title = if block.name.is_empty() {
            default_title
        } else {
            block.name.as_str()
        };
        let mut structure = CrystalStructure::with_title(lattice, title);

        let mut generated: Vec<Vector3D> = Vec::new();
        for site in &sites {
            for op in &operations {
                let p = op.apply(&site.fractional);
                let p = Vector3D::new(wrap_fractional(p.x), wrap_fractional(p.y), wrap_fractional(p.z));

                if generated
                    .iter()
                    .any(|g| periodic_match(g, &p, self.config.symmetry_tolerance))
                {
                    continue;
                }
                generated.push(p);
                structure.add_atom(site.symbol, p)?;
            }
        }

        info!(
            "Read {} sites and {} symmetry operations from block '{}': {} atoms in the unit cell",
            sites.len(),
            operations.len(),
            title,
            structure.atom_count()
        );

        Ok(structure)
    }
}

/// Parse a CIF number, dropping a standard uncertainty suffix like `(3)`
fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text == "?" || text == "." {
        return None;
    }
    let digits = text.split('(').next().unwrap_or(text);
    digits.parse().ok()
}

fn required_number(block: &CifBlock, tag: &str) -> Result<f64> {
    let value = block
        .value(tag)
        .ok_or_else(|| InputError::MissingField(tag.to_string()))?;
    parse_number(value)
        .ok_or_else(|| InputError::InvalidFormat(format!("{} has non-numeric value '{}'", tag, value)))
}

fn optional_number(block: &CifBlock, tag: &str, default: f64) -> Result<f64> {
    match block.value(tag) {
        None => Ok(default),
        Some(value) => parse_number(value).ok_or_else(|| {
            InputError::InvalidFormat(format!("{} has non-numeric value '{}'", tag, value))
        }),
    }
}

fn read_lattice(block: &CifBlock) -> Result<Lattice> {
    let a = required_number(block, "_cell_length_a")?;
    let b = required_number(block, "_cell_length_b")?;
    let c = required_number(block, "_cell_length_c")?;
    let alpha = optional_number(block, "_cell_angle_alpha", 90.0)?;
    let beta = optional_number(block, "_cell_angle_beta", 90.0)?;
    let gamma = optional_number(block, "_cell_angle_gamma", 90.0)?;

    debug!(
        "Cell a={} b={} c={} alpha={} beta={} gamma={}",
        a, b, c, alpha, beta, gamma
    );
    Ok(Lattice::from_parameters(a, b, c, alpha, beta, gamma)?)
}

fn read_sites(block: &CifBlock) -> Result<Vec<Site>> {
    let table = block
        .find_loop(&["_atom_site_fract_x"])
        .ok_or_else(|| InputError::MissingField("_atom_site_fract_x loop".to_string()))?;

    let column = |tag: &str| {
        table
            .column(tag)
            .ok_or_else(|| InputError::MissingField(tag.to_string()))
    };
    let (cx, cy, cz) = (
        column("_atom_site_fract_x")?,
        column("_atom_site_fract_y")?,
        column("_atom_site_fract_z")?,
    );
    let type_column = table.column("_atom_site_type_symbol");
    let label_column = table.column("_atom_site_label");
    if type_column.is_none() && label_column.is_none() {
        return Err(InputError::MissingField(
            "_atom_site_type_symbol or _atom_site_label".to_string(),
        ));
    }

    let mut sites = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let symbol = site_symbol(row, type_column, label_column)?;
        let coordinate = |i: usize| {
            parse_number(&row[i]).ok_or_else(|| {
                InputError::InvalidFormat(format!(
                    "invalid fractional coordinate '{}' for site {}",
                    row[i], symbol
                ))
            })
        };
        sites.push(Site {
            symbol,
            fractional: Vector3D::new(coordinate(cx)?, coordinate(cy)?, coordinate(cz)?),
        });
    }

    if sites.is_empty() {
        return Err(InputError::InvalidFormat("atom site loop has no rows".to_string()));
    }
    Ok(sites)
}

/// Element of a site, preferring the type symbol over the label
fn site_symbol(
    row: &[String],
    type_column: Option<usize>,
    label_column: Option<usize>,
) -> Result<&'static str> {
    let candidates = [type_column, label_column];
    let text = candidates
        .iter()
        .flatten()
        .map(|&i| row[i].as_str())
        .find(|v| *v != "?" && *v != ".")
        .unwrap_or("?");

    database::element_from_label(text)
        .ok_or_else(|| InputError::InvalidFormat(format!("cannot determine element of site '{}'", text)))
}

fn read_symmetry(block: &CifBlock) -> Result<Vec<SymmetryOperation>> {
    let Some(table) = block.find_loop(&SYMMETRY_TAGS) else {
        debug!("No symmetry loop, using the identity only");
        return Ok(vec![SymmetryOperation::identity()]);
    };
    let column = SYMMETRY_TAGS
        .iter()
        .find_map(|tag| table.column(tag))
        .ok_or_else(|| InputError::MissingField(SYMMETRY_TAGS[0].to_string()))?;

    let operations = table
        .rows
        .iter()
        .map(|row| SymmetryOperation::parse(&row[column]))
        .collect::<Result<Vec<_>>>()?;

    if operations.is_empty() {
        return Ok(vec![SymmetryOperation::identity()]);
    }
    Ok(operations)
}
