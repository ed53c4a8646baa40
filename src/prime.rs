use crate::group::Group;

/// Keep only the maximal groups.
///
/// Groups with identical cells are merged first (several anchors discover the
/// same rectangle), then every group strictly contained in another is dropped.
/// Discovery order is preserved.
pub fn find_prime_implicants(groups: Vec<Group>) -> Vec<Group> {
    let mut unique: Vec<Group> = Vec::with_capacity(groups.len());
    for g in groups {
        if unique.iter().all(|u| u.members != g.members) {
            unique.push(g);
        }
    }

    let skips: Vec<bool> = unique
        .iter()
        .map(|g| {
            unique
                .iter()
                .any(|other| g.members.is_strict_subset(&other.members))
        })
        .collect();

    unique
        .into_iter()
        .zip(skips)
        .filter_map(|(g, skip)| if skip { None } else { Some(g) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cells::CellSet, grid::Grid, group::find_groups};

    fn set(cells: &[usize]) -> CellSet {
        cells.iter().copied().collect()
    }

    fn primes_of(minterms: &[usize], dont_cares: &[usize]) -> Vec<CellSet> {
        let grid = Grid::new(4).unwrap();
        let (minterms, dont_cares) = (set(minterms), set(dont_cares));
        let groups = minterms
            .iter()
            .flat_map(|d| find_groups(d, minterms, dont_cares, &grid).unwrap())
            .collect();
        let mut ans: Vec<_> = find_prime_implicants(groups)
            .into_iter()
            .map(|g| g.members)
            .collect();
        ans.sort_unstable();
        ans
    }

    #[test]
    fn test_subsumed_groups_removed() {
        assert_eq!(vec![set(&[0, 1, 2, 3])], primes_of(&[0, 1, 2, 3], &[]));
    }

    #[test]
    fn test_duplicates_merged() {
        // Both anchors find the pair; it must appear once.
        assert_eq!(vec![set(&[5, 7])], primes_of(&[5, 7], &[]));
    }

    #[test]
    fn test_overlapping_primes() {
        // !A!B!C covers {0, 1}, !A!BD covers {1, 3}.
        assert_eq!(vec![set(&[0, 1]), set(&[1, 3])], primes_of(&[0, 1, 3], &[]));
    }

    #[test]
    fn test_dont_care_primes() {
        let mut expect = vec![
            set(&[2, 3]),
            set(&[3, 11]),
            set(&[4, 12]),
            set(&[8, 9]),
            set(&[8, 12]),
            set(&[9, 11]),
            set(&[11, 15]),
        ];
        expect.sort_unstable();
        assert_eq!(expect, primes_of(&[2, 3, 4, 8, 9, 11], &[12, 14, 15]));
    }
}
