// Copyright (C) 2020 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! The fannkuch-redux benchmark.
//! Counts the prefix reversals ("flips") needed to bring `0` to the front of
//! every permutation of `0..n` and keeps the maximum plus a signed checksum.

use std::io::{self, Write};

use tracing::{debug, info_span, trace};

/// Result of visiting all permutations of `0..n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fannkuch {
    /// Flip counts summed with alternating sign in generation order.
    pub checksum: i64,
    /// Largest flip count seen over all permutations.
    pub max_flips: u32,
    /// Number of permutations visited, always `n!`.
    pub permutations: u64,
}

impl Fannkuch {
    /// Returns `(checksum, max_flips)`.
    pub fn pair(&self) -> (i64, u32) {
        (self.checksum, self.max_flips)
    }
}

/// Walks through all permutations of `0..n` in fannkuch generation order,
/// starting at the identity.
///
/// Adjacent swaps of positions (0, 1) and (1, 2) alternate, while the `count`
/// odometer decides when a longer prefix has to be rotated.
#[derive(Clone, Debug)]
pub struct Permutations {
    perm: Vec<usize>,
    count: Vec<usize>,
    sign: bool,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
            count: (0..n).collect(),
            sign: true,
        }
    }

    /// The permutation the generator currently points at.
    pub fn current(&self) -> &[usize] {
        &self.perm
    }

    /// True iff the current permutation has an even ordinal.
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Steps to the next permutation.
    ///
    /// Returns `false` once all `n!` permutations have been visited.
    /// The generator must not be used after that.
    pub fn advance(&mut self) -> bool {
        let n = self.perm.len();
        if self.sign {
            if n < 2 {
                return false;
            }
            self.perm.swap(0, 1);
            self.sign = false;
            return true;
        }

        if n < 3 {
            return false;
        }
        self.perm.swap(1, 2);
        self.sign = true;
        for r in 2..n - 1 {
            if self.count[r] != 0 {
                self.count[r] -= 1;
                return true;
            }
            self.count[r] = r;
            self.perm[..=r + 1].rotate_left(1);
        }

        let last = n - 1;
        if self.count[last] == 0 {
            return false;
        }
        self.count[last] -= 1;
        true
    }
}

/// Counts the flips needed to bring `0` to the front of `perm`.
///
/// A flip reverses the prefix `perm[0..=k]` where `k = perm[0]`.
/// `perm` must be a permutation of `0..perm.len()`.
pub fn count_flips(perm: &[usize]) -> u32 {
    let mut scratch = perm.to_vec();
    flip_in_place(&mut scratch)
}

fn flip_in_place(p: &mut [usize]) -> u32 {
    let mut flips = 0;
    while let Some(&k) = p.first() {
        if k == 0 {
            break;
        }
        p[..=k].reverse();
        flips += 1;
    }
    flips
}

/// Runs the benchmark for permutations of `0..n`.
///
/// Permutations starting with `0` need no flips and are left out of both
/// the checksum and the maximum.
pub fn fannkuch(n: usize) -> Fannkuch {
    let tracing_span = info_span!("fannkuch", n);
    let _guard = tracing_span.enter();

    let mut perms = Permutations::new(n);
    let mut scratch = vec![0; n];
    let mut result = Fannkuch::default();

    loop {
        result.permutations += 1;
        let current = perms.current();
        if current.first().map_or(false, |&k| k != 0) {
            scratch.copy_from_slice(current);
            let flips = flip_in_place(&mut scratch);
            if flips > result.max_flips {
                trace!("New maximum of {} flips at {:?}", flips, current);
                result.max_flips = flips;
            }
            if perms.sign() {
                result.checksum += i64::from(flips);
            } else {
                result.checksum -= i64::from(flips);
            }
        }

        if !perms.advance() {
            break;
        }
    }

    debug!(
        "Visited {} permutations: checksum {}, max flips {}",
        result.permutations, result.checksum, result.max_flips
    );
    result
}

/// Writes the two result lines printed by the `fannkuch` program.
pub fn write_report<W: Write>(out: &mut W, n: usize, result: &Fannkuch) -> io::Result<()> {
    writeln!(out, "{}", result.checksum)?;
    writeln!(out, "fannkuchen({}) = {}", n, result.max_flips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn visit_all(n: usize) -> Vec<Vec<usize>> {
        let mut perms = Permutations::new(n);
        let mut visited = vec![perms.current().to_vec()];
        while perms.advance() {
            visited.push(perms.current().to_vec());
        }
        visited
    }

    #[test]
    fn matches_known_results() {
        let expected = [
            (3, (2, 2)),
            (4, (4, 4)),
            (5, (11, 7)),
            (6, (49, 10)),
            (7, (228, 16)),
            (8, (1616, 22)),
        ];
        for &(n, pair) in expected.iter() {
            assert_eq!(fannkuch(n).pair(), pair, "n = {}", n);
        }
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(fannkuch(0).pair(), (0, 0));
        assert_eq!(fannkuch(1).pair(), (0, 0));
        assert_eq!(fannkuch(1).permutations, 1);
        assert_eq!(fannkuch(2).pair(), (-1, 1));
        assert_eq!(fannkuch(2).permutations, 2);
    }

    #[test]
    fn visits_every_permutation_once() {
        let mut factorial = 1;
        for n in 1..=7 {
            factorial *= n;
            let visited = visit_all(n);
            assert_eq!(visited.len(), factorial, "n = {}", n);
            let distinct: HashSet<_> = visited.iter().collect();
            assert_eq!(distinct.len(), factorial, "n = {}", n);
            assert_eq!(fannkuch(n).permutations, factorial as u64);
        }
    }

    #[test]
    fn generation_order() {
        let visited = visit_all(4);
        assert_eq!(
            &visited[..7],
            &[
                vec![0, 1, 2, 3],
                vec![1, 0, 2, 3],
                vec![1, 2, 0, 3],
                vec![2, 1, 0, 3],
                vec![2, 0, 1, 3],
                vec![0, 2, 1, 3],
                vec![1, 2, 3, 0],
            ][..]
        );
    }

    #[test]
    fn sign_alternates() {
        let mut perms = Permutations::new(5);
        let mut expected = true;
        loop {
            assert_eq!(perms.sign(), expected);
            expected = !expected;
            if !perms.advance() {
                break;
            }
        }
    }

    #[test]
    fn flips() {
        assert_eq!(count_flips(&[]), 0);
        assert_eq!(count_flips(&[0, 2, 1]), 0);
        assert_eq!(count_flips(&[1, 0]), 1);
        assert_eq!(count_flips(&[2, 0, 1]), 2);
        assert_eq!(count_flips(&[3, 1, 0, 2]), 3);
    }

    #[test]
    fn report_format() {
        let result = Fannkuch {
            checksum: -7,
            max_flips: 3,
            permutations: 24,
        };
        let mut out = Vec::new();
        write_report(&mut out, 4, &result).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-7\nfannkuchen(4) = 3\n");
    }
}
