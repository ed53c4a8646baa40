use crate::{
    cells::CellSet,
    error::{invalid_input, KMapError, KMapResult},
    grid::gray_codes,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt};

/// The mark placed on one cell of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum CellValue {
    Zero,
    One,
    DontCare,
}

impl CellValue {
    /// Parse `0`, `1`, or one of `x`, `X`, `-` for don't-care.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "0" => Some(Self::Zero),
            "1" => Some(Self::One),
            "x" | "X" | "-" => Some(Self::DontCare),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::DontCare => "X",
        })
    }
}

/// Raw problem as it appears in batch files.
#[derive(Debug, Clone, Deserialize)]
struct RawProblem {
    variables: String,
    #[serde(default)]
    minterms: Vec<usize>,
    #[serde(default)]
    dont_cares: Vec<usize>,
}

/// A validated solver input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProblem")]
pub struct Problem {
    #[serde(serialize_with = "serialize_variables")]
    variables: Vec<char>,
    minterms: Vec<usize>,
    dont_cares: Vec<usize>,
}

impl Problem {
    /// Check the input at the boundary.
    ///
    /// Variables must be 2 to 4 distinct ASCII letters. Indices must lie in
    /// `0..2^n`, appear at most once, and minterms and don't-cares must be
    /// disjoint.
    pub fn new(variables: &[char], minterms: &[usize], dont_cares: &[usize]) -> KMapResult<Self> {
        if variables.is_empty() {
            return Err(invalid_input("the variable list is empty"));
        }
        if gray_codes(variables.len()).is_none() {
            return Err(invalid_input(format!(
                "{} variables are not supported, expected 2 to 4",
                variables.len()
            )));
        }
        let mut seen = BTreeSet::new();
        for &v in variables {
            if !v.is_ascii_alphabetic() {
                return Err(invalid_input(format!("variable {v:?} is not a letter")));
            }
            if !seen.insert(v) {
                return Err(invalid_input(format!("variable {v:?} appears twice")));
            }
        }

        let cell_count = 1 << variables.len();
        let minterm_set = check_indices("minterm", minterms, cell_count)?;
        let dont_care_set = check_indices("don't-care", dont_cares, cell_count)?;
        if let Some(d) = minterm_set.intersection(&dont_care_set).next() {
            return Err(invalid_input(format!(
                "cell {d} is both a minterm and a don't-care"
            )));
        }

        Ok(Self {
            variables: variables.to_vec(),
            minterms: minterm_set.into_iter().collect(),
            dont_cares: dont_care_set.into_iter().collect(),
        })
    }

    /// Build a problem from one mark per cell, indexed by decimal cell value.
    pub fn from_cells(variables: &[char], cells: &[CellValue]) -> KMapResult<Self> {
        let expected = 1usize.checked_shl(variables.len() as u32).unwrap_or(0);
        if cells.len() != expected {
            return Err(invalid_input(format!(
                "expected {expected} cells for {} variables, got {}",
                variables.len(),
                cells.len()
            )));
        }
        let of = |value: CellValue| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == value)
                .map(|(d, _)| d)
                .collect::<Vec<_>>()
        };
        Self::new(variables, &of(CellValue::One), &of(CellValue::DontCare))
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn cell_count(&self) -> usize {
        1 << self.variables.len()
    }

    /// Sorted minterm indices.
    pub fn minterms(&self) -> &[usize] {
        &self.minterms
    }

    /// Sorted don't-care indices.
    pub fn dont_cares(&self) -> &[usize] {
        &self.dont_cares
    }

    pub fn minterm_set(&self) -> CellSet {
        self.minterms.iter().copied().collect()
    }

    pub fn dont_care_set(&self) -> CellSet {
        self.dont_cares.iter().copied().collect()
    }

    pub fn value(&self, decimal: usize) -> CellValue {
        if self.minterms.binary_search(&decimal).is_ok() {
            CellValue::One
        } else if self.dont_cares.binary_search(&decimal).is_ok() {
            CellValue::DontCare
        } else {
            CellValue::Zero
        }
    }
}

impl TryFrom<RawProblem> for Problem {
    type Error = KMapError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        let variables: Vec<char> = raw.variables.chars().filter(|c| !c.is_whitespace()).collect();
        Self::new(&variables, &raw.minterms, &raw.dont_cares)
    }
}

fn serialize_variables<S: serde::Serializer>(variables: &[char], s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&variables.iter().collect::<String>())
}

fn check_indices(kind: &str, indices: &[usize], cell_count: usize) -> KMapResult<BTreeSet<usize>> {
    let mut set = BTreeSet::new();
    for &d in indices {
        if d >= cell_count {
            return Err(invalid_input(format!(
                "{kind} {d} is out of range 0..{cell_count}"
            )));
        }
        if !set.insert(d) {
            return Err(invalid_input(format!("{kind} {d} appears twice")));
        }
    }
    Ok(set)
}
