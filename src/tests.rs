use crate::{expr::normalize, CellSet, Solution};
use itertools::Itertools;
use once_cell::sync::Lazy;

pub(crate) const VARS: [char; 4] = ['A', 'B', 'C', 'D'];

pub(crate) struct KnownCase {
    pub name: &'static str,
    pub minterms: Vec<usize>,
    pub dont_cares: Vec<usize>,
    pub expected: Vec<&'static str>,
}

/// Hand-checked 4-variable maps. Expected spellings are compared after normalization.
pub(crate) static KNOWN_CASES: Lazy<Vec<KnownCase>> = Lazy::new(|| {
    vec![
        KnownCase {
            name: "multiple solutions",
            minterms: vec![0, 1, 2, 3, 6, 7, 12, 13, 14, 15],
            dont_cares: vec![],
            expected: vec!["!A!B + BC + AB", "!A!B + !AC + AB"],
        },
        KnownCase {
            name: "four variables",
            minterms: vec![0, 1, 2, 3, 4, 7, 8, 11, 12, 13, 14, 15],
            dont_cares: vec![],
            expected: vec!["!A!B + !C!D + CD + AB"],
        },
        KnownCase {
            name: "complex terms",
            minterms: vec![4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14],
            dont_cares: vec![],
            expected: vec![
                "!AB + A!B + A!C + A!D",
                "!AB + B!D + A!B + A!C",
                "!AB + B!C + A!B + A!D",
                "!AB + B!C + B!D + A!B",
            ],
        },
        KnownCase {
            name: "all ones",
            minterms: (0..16).collect(),
            dont_cares: vec![],
            expected: vec!["1"],
        },
        KnownCase {
            name: "single one",
            minterms: vec![0],
            dont_cares: vec![],
            expected: vec!["!A!B!C!D"],
        },
        KnownCase {
            name: "all zeros",
            minterms: vec![],
            dont_cares: vec![],
            expected: vec!["0"],
        },
        KnownCase {
            name: "simple don't-cares",
            minterms: vec![9, 11, 13, 15],
            dont_cares: vec![8, 10, 12, 14],
            expected: vec!["A"],
        },
        KnownCase {
            name: "all don't-cares",
            minterms: vec![],
            dont_cares: (0..16).collect(),
            expected: vec!["0"],
        },
        KnownCase {
            name: "mixed don't-cares",
            minterms: vec![2, 3, 4, 8, 9, 11],
            dont_cares: vec![12, 14, 15],
            expected: vec![
                "!A!BC + !B!CA + !BCD + !C!DB",
                "!A!BC + !B!CA + !BAD + !C!DB",
                "!A!BC + !B!CA + !C!DB + ACD",
                "!A!BC + !BAD + !C!DA + !C!DB",
            ],
        },
    ]
});

/// Assert that `actual` lists exactly the `expected` expressions, up to
/// literal and term order.
pub(crate) fn assert_same_solutions(actual: &Solution, expected: &[&str], name: &str) {
    let actual: Vec<String> = actual
        .to_strings()
        .iter()
        .map(|s| normalize(s).unwrap())
        .sorted()
        .collect();
    let expected: Vec<String> = expected
        .iter()
        .map(|s| normalize(s).unwrap())
        .sorted()
        .collect();
    assert_eq!(expected, actual, "case: {name}");
}

/// A cube over `n` variables: bits in `care` are fixed to the bits of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cube {
    pub care: usize,
    pub value: usize,
}

impl Cube {
    pub fn cells(&self, n: usize) -> CellSet {
        (0..1 << n).filter(|d| d & self.care == self.value).collect()
    }

    pub fn spell(&self, vars: &[char]) -> String {
        let n = vars.len();
        let ans: String = vars
            .iter()
            .enumerate()
            .filter(|(i, _)| self.care & (1 << (n - 1 - i)) != 0)
            .map(|(i, v)| {
                if self.value & (1 << (n - 1 - i)) != 0 {
                    v.to_string()
                } else {
                    format!("!{v}")
                }
            })
            .collect();
        if ans.is_empty() {
            "1".to_string()
        } else {
            ans
        }
    }
}

/// Minimal covers by exhaustive search over all 3^n cubes, without any grid.
///
/// Returns normalized expression strings.
pub(crate) fn brute_force_solutions(vars: &[char], minterms: CellSet, dont_cares: CellSet) -> Vec<String> {
    let n = vars.len();
    let allowed = minterms | dont_cares;
    if minterms.is_empty() {
        return vec!["0".to_string()];
    }

    let cubes: Vec<(Cube, CellSet)> = (0..1usize << n)
        .flat_map(|care| {
            (0..1usize << n)
                .filter(move |value| value & !care == 0)
                .map(move |value| Cube { care, value })
        })
        .map(|cube| (cube, cube.cells(n)))
        .filter(|(_, cells)| cells.is_subset(&allowed) && cells.has_intersection(&minterms))
        .collect();
    let primes: Vec<&(Cube, CellSet)> = cubes
        .iter()
        .filter(|(_, cells)| !cubes.iter().any(|(_, other)| cells.is_strict_subset(other)))
        .collect();

    for k in 1..=primes.len() {
        let covers: Vec<String> = primes
            .iter()
            .combinations(k)
            .filter(|combo| {
                let covered = combo.iter().fold(CellSet::new(), |acc, (_, cells)| acc | *cells);
                minterms.is_subset(&covered)
            })
            .map(|combo| {
                let spelled = combo.iter().map(|(cube, _)| cube.spell(vars)).join(" + ");
                normalize(&spelled).unwrap()
            })
            .sorted()
            .dedup()
            .collect();
        if !covers.is_empty() {
            return covers;
        }
    }
    unreachable!("every minterm is a cube of its own")
}
