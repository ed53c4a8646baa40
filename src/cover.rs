use crate::{
    cells::CellSet,
    error::{KMapError, KMapResult},
};

/// Index-ordered backtracking over k-combinations of implicants.
///
/// Every combination is built by appending indices greater than the last
/// chosen one, so each subset is visited exactly once.
struct CoverSearch<'a> {
    implicants: &'a [CellSet],
    target: CellSet,
    budget: usize,
    visited: usize,
    current: Vec<usize>,
    found: Vec<Vec<usize>>,
}

impl<'a> CoverSearch<'a> {
    fn new(implicants: &'a [CellSet], target: CellSet, budget: usize) -> Self {
        Self {
            implicants,
            target,
            budget,
            visited: 0,
            current: vec![],
            found: vec![],
        }
    }

    fn search(&mut self, size: usize, start: usize, covered: CellSet) -> KMapResult<()> {
        self.visited += 1;
        if self.visited > self.budget {
            return Err(KMapError::BudgetExceeded(self.budget));
        }

        if self.current.len() == size {
            if self.target.is_subset(&covered) {
                self.found.push(self.current.clone());
            }
            return Ok(());
        }

        let remaining = size - self.current.len();
        for i in start..=self.implicants.len().saturating_sub(remaining) {
            self.current.push(i);
            self.search(size, i + 1, covered | self.implicants[i])?;
            self.current.pop();
        }
        Ok(())
    }
}

/// Find every smallest set of implicants whose union contains `target`.
///
/// Returns index lists into `implicants`, each sorted ascending, in
/// lexicographic order. Sizes are tried from 1 upwards and the search stops at
/// the first size with any cover. Returns no covers when `target` cannot be
/// covered at all. `budget` bounds the number of search nodes.
pub fn minimum_covers(
    implicants: &[CellSet],
    target: CellSet,
    budget: usize,
) -> KMapResult<Vec<Vec<usize>>> {
    if target.is_empty() {
        return Ok(vec![vec![]]);
    }

    let reachable = implicants
        .iter()
        .fold(CellSet::new(), |acc, &imp| acc | imp);
    if !target.is_subset(&reachable) {
        return Ok(vec![]);
    }

    let mut search = CoverSearch::new(implicants, target, budget);
    for size in 1..=implicants.len() {
        search.search(size, 0, CellSet::new())?;
        if !search.found.is_empty() {
            debug!(
                "{} minimum cover(s) of size {} after {} nodes",
                search.found.len(),
                size,
                search.visited
            );
            return Ok(search.found);
        }
    }

    Ok(vec![])
}
