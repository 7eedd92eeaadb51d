use super::slots::Slots;
use arrayvec::ArrayVec;

/// Combinations walks every k-subset of a domain of positions.
///
/// Subsets come out in lexicographic order of their positions, lazily,
/// one Slots at a time. Each iterator owns its cursor outright, so the
/// search can start a fresh one for every residual card set without any
/// iteration state leaking between them. Cloning forks an independent
/// iterator from the current point.
#[derive(Debug, Clone)]
pub struct Combinations {
    size: usize,
    domain: ArrayVec<u8, 32>,
    cursor: ArrayVec<u8, 32>,
    done: bool,
}

impl Combinations {
    /// C(n, k) for the domain this iterator was built over
    pub fn combinations(&self) -> usize {
        let n = self.domain.len();
        let k = self.size;
        match k > n {
            true => 0,
            false => (0..k).fold(1, |x, i| x * (n - i) / (i + 1)),
        }
    }

    fn current(&self) -> Slots {
        Slots::from(
            self.cursor
                .iter()
                .map(|&i| self.domain[i as usize])
                .fold(0u32, |a, p| a | (1 << p)),
        )
    }

    /// bump the rightmost index that still has room,
    /// then pack everything after it tight against it
    fn advance(&mut self) {
        let n = self.domain.len();
        let k = self.cursor.len();
        match (0..k).rev().find(|&i| (self.cursor[i] as usize) < i + n - k) {
            None => self.done = true,
            Some(i) => {
                self.cursor[i] += 1;
                for j in i + 1..k {
                    self.cursor[j] = self.cursor[j - 1] + 1;
                }
            }
        }
    }
}

impl Iterator for Combinations {
    type Item = Slots;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            let slots = self.current();
            self.advance();
            Some(slots)
        }
    }
}

/// size and domain are immutable and must be decided at construction
impl From<(usize, Slots)> for Combinations {
    fn from((k, domain): (usize, Slots)) -> Self {
        let domain = domain.map(|p| p as u8).collect::<ArrayVec<u8, 32>>();
        let done = k > domain.len();
        let cursor = (0..k.min(domain.len()) as u8).collect::<ArrayVec<u8, 32>>();
        Self {
            size: k,
            domain,
            cursor,
            done,
        }
    }
}
