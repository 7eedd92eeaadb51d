use super::rank::Rank;

/// A hand's kicker ranks, as a 13-bit rank mask.
///
/// Kickers are always distinct ranks, so comparing the masks numerically
/// is the same as comparing the descending rank lists lexicographically,
/// with a strict prefix losing to the longer list. That is exactly what a
/// 3-card front needs when measured against a 5-card middle.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
/// ranks come out highest first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_order() {
        let kicks = Kickers::from(vec![Rank::Two, Rank::King, Rank::Nine]);
        assert_eq!(Vec::<Rank>::from(kicks), vec![Rank::King, Rank::Nine, Rank::Two]);
        assert_eq!(kicks.to_string(), "K92");
    }

    #[test]
    fn lexicographic_with_prefix() {
        let short = Kickers::from(vec![Rank::King, Rank::Queen]);
        let long = Kickers::from(vec![Rank::King, Rank::Queen, Rank::Three, Rank::Two]);
        let high = Kickers::from(vec![Rank::King, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(short < long);
        assert!(short > high);
    }
}
