use crate::{problem::CellValue, Problem};
use anyhow::{bail, Context, Result};
use std::{fs::File, io::Read, path::Path};

/// A single-output truth table.
///
/// The header names the input variables followed by one output column. Each
/// row gives the input bits and the output mark (`0`, `1`, `x`/`X`/`-`).
/// Rows that are not listed are 0.
#[derive(Debug, Clone)]
pub struct TruthTable {
    pub variables: Vec<char>,
    pub output: String,
    pub values: Vec<CellValue>,
}

impl TruthTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("load truth table from {}...", path.display());
        let f = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        Self::from_reader(f).with_context(|| format!("cannot read {}", path.display()))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.len() < 2 {
            bail!("expected at least one input column and one output column");
        }
        let (inputs, output) = (headers.len() - 1, headers[headers.len() - 1].to_string());
        if inputs > 4 {
            bail!("{} input columns, at most 4 are supported", inputs);
        }
        let variables = headers
            .iter()
            .take(inputs)
            .map(|h| {
                let mut chars = h.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => bail!("variable name {:?} must be a single letter", h),
                }
            })
            .collect::<Result<Vec<char>>>()?;

        let mut values = vec![None; 1 << inputs];
        for record in rdr.records() {
            let record = record?;
            let row = record.position().map_or(0, |p| p.line());
            let mut decimal = 0;
            for field in record.iter().take(inputs) {
                let bit = match field {
                    "0" => 0,
                    "1" => 1,
                    _ => bail!("row {}: input {:?} is not 0 or 1", row, field),
                };
                decimal = (decimal << 1) | bit;
            }
            let value = CellValue::parse(&record[inputs])
                .with_context(|| format!("row {}: bad output {:?}", row, &record[inputs]))?;
            if values[decimal].replace(value).is_some() {
                bail!("row {}: input combination {} is listed twice", row, decimal);
            }
        }

        Ok(Self {
            variables,
            output,
            values: values
                .into_iter()
                .map(|v| v.unwrap_or(CellValue::Zero))
                .collect(),
        })
    }

    pub fn to_problem(&self) -> Result<Problem> {
        Ok(Problem::from_cells(&self.variables, &self.values)?)
    }
}
