use super::{Literal, Term};
use crate::error::{KMapError, KMapResult};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{ser::Serializer, Serialize};
use std::{fmt, str::FromStr};

static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:!?[A-Za-z])+$").unwrap());
static LITERAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(!?)([A-Za-z])").unwrap());

/// A boolean expression in sum-of-products form.
///
/// If the underlying list is empty, the expression is considered as FALSE.
/// A single empty term is TRUE.
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
pub struct Expression(pub Vec<Term>);

impl Expression {
    pub fn false_exp() -> Self {
        Self(vec![])
    }

    pub fn true_exp() -> Self {
        Self(vec![Term::new()])
    }

    /// Canonical sum of `terms`: duplicates removed, terms sorted by their
    /// printed form. A TRUE term absorbs all others.
    pub fn from_terms(terms: impl IntoIterator<Item = Term>) -> Self {
        let terms: Vec<Term> = terms.into_iter().collect();
        if terms.iter().any(Term::is_true) {
            return Self::true_exp();
        }
        Self(
            terms
                .into_iter()
                .map(|t| (t.to_string(), t))
                .sorted_by(|a, b| a.0.cmp(&b.0))
                .dedup_by(|a, b| a.0 == b.0)
                .map(|(_, t)| t)
                .collect(),
        )
    }

    pub fn is_true(&self) -> bool {
        self.iter().any(Term::is_true)
    }

    pub fn is_false(&self) -> bool {
        self.is_empty()
    }

    /// Eval the expression on the cell `decimal`.
    pub fn eval(&self, variables: &[char], decimal: usize) -> KMapResult<bool> {
        let mut ans = false;
        for t in self.iter() {
            ans |= t.eval(variables, decimal)?;
        }
        Ok(ans)
    }

    /// Parse `expr := term (' + ' term)*`, `term := '1' | ('!'? letter)+`, or
    /// the lone constant `0`. Term order and literal order are kept.
    pub fn parse(input: &str) -> KMapResult<Self> {
        let err = |reason: &str| KMapError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = input.trim();
        if trimmed == "0" {
            return Ok(Self::false_exp());
        }

        let mut terms = vec![];
        for raw in trimmed.split('+') {
            let raw: String = raw.split_whitespace().collect();
            if raw.is_empty() {
                return Err(err("empty term"));
            }
            if raw == "1" {
                terms.push(Term::new());
                continue;
            }
            if !TERM_RE.is_match(&raw) {
                return Err(err(&format!("malformed term {raw:?}")));
            }
            let term: Term = LITERAL_RE
                .captures_iter(&raw)
                .filter_map(|cap| {
                    let variable = cap[2].chars().next()?;
                    Some(Literal::new(variable, !cap[1].is_empty()))
                })
                .collect();
            terms.push(term);
        }
        Ok(Self(terms))
    }

    /// Literals sorted inside each term and terms sorted, so that equivalent
    /// spellings of the same cover compare equal.
    pub fn normalized(&self) -> Expression {
        let mut terms: Vec<Term> = self.iter().map(Term::normalized).collect();
        terms.sort_by_cached_key(|t| t.to_string());
        Self(terms)
    }
}

impl FromStr for Expression {
    type Err = KMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", self.iter().join(" + "))
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

/// Normalized spelling of an expression string.
pub fn normalize(input: &str) -> KMapResult<String> {
    Ok(Expression::parse(input)?.normalized().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [char; 4] = ['A', 'B', 'C', 'D'];

    #[test]
    fn test_display() {
        assert_eq!("0", format!("{}", Expression::false_exp()));
        assert_eq!("1", format!("{}", Expression::true_exp()));
        assert_eq!(
            "!A!B + AB",
            format!("{}", Expression::parse("!A!B + AB").unwrap())
        );
    }

    #[test]
    fn test_parse() {
        let exp = Expression::parse(" !A B + C ").unwrap();
        assert_eq!(
            Expression(vec![
                Term(vec![Literal::new('A', true), Literal::new('B', false)]),
                Term(vec![Literal::new('C', false)]),
            ]),
            exp
        );
        assert!(Expression::parse("0").unwrap().is_false());
        assert!(Expression::parse("1").unwrap().is_true());
        assert!(Expression::parse("A + ").is_err());
        assert!(Expression::parse("A!").is_err());
        assert!(Expression::parse("0 + A").is_err());
        assert!(Expression::parse("A*B").is_err());
        assert_eq!(exp, "!AB + C".parse::<Expression>().unwrap());
    }

    #[test]
    fn test_from_terms() {
        let a = Term(vec![Literal::new('A', false)]);
        let not_b = Term(vec![Literal::new('B', true)]);
        let exp = Expression::from_terms([a.clone(), not_b.clone(), a.clone()]);
        assert_eq!("!B + A", exp.to_string());
        assert!(Expression::from_terms([a, Term::new(), not_b]).is_true());
        assert!(Expression::from_terms(Vec::<Term>::new()).is_false());
    }

    #[test]
    fn test_eval() {
        let exp = Expression::parse("!A!B + AB").unwrap();
        let ones: Vec<usize> = (0..16).filter(|&d| exp.eval(&VARS, d).unwrap()).collect();
        assert_eq!(vec![0, 1, 2, 3, 12, 13, 14, 15], ones);
        assert!(!Expression::false_exp().eval(&VARS, 0).unwrap());
        assert!(Expression::parse("E").unwrap().eval(&VARS, 0).is_err());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize("BC + !A!B + AB").unwrap(),
            normalize("AB + !B!A + CB").unwrap()
        );
        assert_eq!("!A!BC + !B!CA", normalize("!B!CA + !A!BC").unwrap());
    }

    #[test]
    fn test_serialize() {
        let exp = Expression::parse("A + !B").unwrap();
        assert_eq!("\"A + !B\"", serde_json::to_string(&exp).unwrap());
    }
}
