use crate::{
    error::{KMapError, KMapResult},
    group::Group,
};
use std::fmt;

/// Marker written in front of a negated variable.
pub const NEGATION: char = '!';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub variable: char,
    pub negated: bool,
}

impl Literal {
    pub fn new(variable: char, negated: bool) -> Self {
        Self { variable, negated }
    }

    /// Value of the literal when its variable takes `bit`.
    pub fn eval(&self, bit: bool) -> bool {
        bit != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{NEGATION}")?;
        }
        write!(f, "{}", self.variable)
    }
}

/// A product of literals.
///
/// If the underlying list is empty, the term is considered as TRUE.
#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Hash,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::From,
)]
pub struct Term(pub Vec<Literal>);

impl Term {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_true(&self) -> bool {
        self.is_empty()
    }

    /// The term fixing every variable to the bits of `decimal`.
    pub fn from_minterm(variables: &[char], decimal: usize) -> Self {
        let n = variables.len();
        variables
            .iter()
            .enumerate()
            .map(|(i, &v)| Literal::new(v, !bit_of(decimal, i, n)))
            .collect()
    }

    /// Eval the term on the cell `decimal`.
    pub fn eval(&self, variables: &[char], decimal: usize) -> KMapResult<bool> {
        let mut ans = true;
        for lit in self.iter() {
            let i = variables
                .iter()
                .position(|&v| v == lit.variable)
                .ok_or_else(|| KMapError::Parse {
                    input: self.to_string(),
                    reason: format!("unknown variable '{}'", lit.variable),
                })?;
            ans &= lit.eval(bit_of(decimal, i, variables.len()));
        }
        Ok(ans)
    }

    /// Literals sorted by their printed form.
    pub fn normalized(&self) -> Term {
        let mut lits = self.0.clone();
        lits.sort_by_cached_key(|l| l.to_string());
        Term(lits)
    }
}

impl FromIterator<Literal> for Term {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "1");
        }
        for lit in self.iter() {
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}

/// Value of variable `index` (0 is the most significant) in cell `decimal`.
#[inline]
pub fn bit_of(decimal: usize, index: usize, variable_count: usize) -> bool {
    (decimal >> (variable_count - 1 - index)) & 1 == 1
}

/// Product term describing `group`: one literal per variable whose bit is
/// the same in every cell of the group.
pub fn extract(variables: &[char], group: &Group) -> Term {
    debug_assert!(!group.is_empty());
    let n = variables.len();
    let (ones, zeros) = group
        .cells
        .iter()
        .fold((usize::MAX, usize::MAX), |(ones, zeros), cell| {
            (ones & cell.decimal, zeros & !cell.decimal)
        });

    variables
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| {
            let mask = 1 << (n - 1 - i);
            if ones & mask != 0 {
                Some(Literal::new(v, false))
            } else if zeros & mask != 0 {
                Some(Literal::new(v, true))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cells::CellSet, grid::Grid};

    const VARS: [char; 4] = ['A', 'B', 'C', 'D'];

    fn group(cells: &[usize]) -> Group {
        let grid = Grid::new(4).unwrap();
        let cells = cells
            .iter()
            .map(|&d| grid.cell(grid.locate(d).unwrap()).clone())
            .collect();
        Group::new(cells, CellSet::full(16))
    }

    #[test]
    fn test_display() {
        assert_eq!("1", format!("{}", Term::new()));
        assert_eq!(
            "A!B",
            format!(
                "{}",
                Term(vec![Literal::new('A', false), Literal::new('B', true)])
            )
        );
    }

    #[test]
    fn test_extract() {
        assert_eq!("!A!B!C!D", extract(&VARS, &group(&[0])).to_string());
        assert_eq!("!A!B!D", extract(&VARS, &group(&[0, 2])).to_string());
        assert_eq!("!B!D", extract(&VARS, &group(&[0, 2, 8, 10])).to_string());
        assert_eq!("A", extract(&VARS, &group(&[8, 9, 10, 11, 12, 13, 14, 15])).to_string());
        assert_eq!("BD", extract(&VARS, &group(&[5, 7, 13, 15])).to_string());
        assert_eq!("1", extract(&VARS, &group(&(0..16).collect::<Vec<_>>())).to_string());
    }

    #[test]
    fn test_from_minterm() {
        assert_eq!("!AB!CD", Term::from_minterm(&VARS, 5).to_string());
        assert_eq!("XY", Term::from_minterm(&['X', 'Y'], 3).to_string());
    }

    #[test]
    fn test_eval() {
        let term = extract(&VARS, &group(&[5, 7, 13, 15]));
        for d in 0..16 {
            assert_eq!([5, 7, 13, 15].contains(&d), term.eval(&VARS, d).unwrap());
        }
        assert!(Term::new().eval(&VARS, 3).unwrap());
        assert!(term.eval(&['A', 'B'], 0).is_err());
    }

    #[test]
    fn test_normalized() {
        let term = Term(vec![Literal::new('B', false), Literal::new('A', true)]);
        assert_eq!("!AB", term.normalized().to_string());
    }
}
