use crate::{
    cells::CellSet,
    cover::minimum_covers,
    error::KMapResult,
    expr::{extract, Expression, Term},
    grid::Grid,
    group::{find_groups, Group},
    prime::find_prime_implicants,
    problem::Problem,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Default bound on cover-search nodes, far above what a 4-variable map needs.
pub const DEFAULT_MAX_COMBINATIONS: usize = 1 << 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverOptions {
    /// Number of cover-search nodes visited before giving up.
    pub max_combinations: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_combinations: DEFAULT_MAX_COMBINATIONS,
        }
    }
}

/// Every minimal sum-of-products for one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// All minimum covers as expressions, deduplicated and sorted by spelling.
    pub solutions: Vec<Expression>,
    /// Groups of the first listed solution.
    pub groups: Vec<Group>,
}

impl Solution {
    fn constant(exp: Expression) -> Self {
        Self {
            solutions: vec![exp],
            groups: vec![],
        }
    }

    /// The first listed solution.
    pub fn expression(&self) -> &Expression {
        &self.solutions[0]
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.solutions.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Solver {
    options: SolverOptions,
}

impl Solver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    pub fn solve(&self, problem: &Problem) -> KMapResult<Solution> {
        let begin = Instant::now();
        let variables = problem.variables();
        let minterms = problem.minterm_set();
        let dont_cares = problem.dont_care_set();
        debug!(
            "solve: variables {:?}, minterms {}, don't-cares {}",
            variables, minterms, dont_cares
        );

        if minterms.is_empty() && dont_cares.is_empty() {
            return Ok(Solution::constant(Expression::false_exp()));
        }
        if minterms.len() == problem.cell_count() {
            return Ok(Solution::constant(Expression::true_exp()));
        }

        let grid = Grid::new(problem.variable_count())?;
        if minterms.len() == 1 && dont_cares.is_empty() {
            let decimal = problem.minterms()[0];
            let cell = grid.cell(grid.locate(decimal)?).clone();
            return Ok(Solution {
                solutions: vec![Expression::from(vec![Term::from_minterm(variables, decimal)])],
                groups: vec![Group::new(vec![cell], minterms)],
            });
        }

        let mut groups = vec![];
        for decimal in minterms.iter() {
            groups.extend(find_groups(decimal, minterms, dont_cares, &grid)?);
        }
        trace!("{} groups found", groups.len());

        let primes = find_prime_implicants(groups);
        debug!("{} prime implicants", primes.len());
        if primes.is_empty() {
            return Ok(Solution::constant(Expression::false_exp()));
        }

        let covers = minimum_covers(
            &primes.iter().map(|g| g.covered_minterms).collect::<Vec<CellSet>>(),
            minterms,
            self.options.max_combinations,
        )?;

        let mut candidates: Vec<(String, Expression, &[usize])> = covers
            .iter()
            .map(|cover| {
                let exp =
                    Expression::from_terms(cover.iter().map(|&i| extract(variables, &primes[i])));
                (exp.to_string(), exp, cover.as_slice())
            })
            .collect();
        candidates.sort_by(|a, b| a.0.cmp(&b.0));
        candidates.dedup_by(|a, b| a.0 == b.0);

        let groups = candidates
            .first()
            .map(|(_, _, cover)| cover.iter().map(|&i| primes[i].clone()).collect())
            .unwrap_or_default();
        let solutions: Vec<Expression> = candidates.into_iter().map(|(_, exp, _)| exp).collect();
        if solutions.is_empty() {
            return Ok(Solution::constant(Expression::false_exp()));
        }

        debug!(
            "{} minimal solution(s) in {:?}",
            solutions.len(),
            Instant::now() - begin
        );
        Ok(Solution { solutions, groups })
    }
}

/// Solve with default options after validating the input.
pub fn solve(variables: &[char], minterms: &[usize], dont_cares: &[usize]) -> KMapResult<Solution> {
    let problem = Problem::new(variables, minterms, dont_cares)?;
    Solver::default().solve(&problem)
}
