use super::rank::Rank;

/// A poker hand's category, carrying the ranks that define it.
///
/// Variant order is category order, so the derived Ord compares category
/// first and then the defining ranks. Whatever the category leaves
/// unexplained is settled by [`Kickers`].
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers (2 in a 3-card hand)
    OnePair(Rank),         // 3 kickers (1 in a 3-card hand)
    TwoPair(Rank, Rank),   // 1 kickers
    ThreeOAK(Rank),        // 2 kickers (0 in a 3-card hand)
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kickers
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    /// numeric category, 0 for high card up to 8 for straight flush
    pub fn category(&self) -> u8 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(..) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(..) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }

    /// how many kickers a hand of `size` cards carries with this ranking
    pub fn n_kickers(&self, size: usize) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => size.saturating_sub(1),
            Ranking::OnePair(_) => size.saturating_sub(2),
            Ranking::ThreeOAK(_) => size.saturating_sub(3),
            Ranking::FourOAK(_) | Ranking::TwoPair(..) => size.saturating_sub(4),
            Ranking::Straight(_) | Ranking::FullHouse(..) | Ranking::StraightFlush(_) => 0,
        }
    }

    /// ranks still eligible to be kickers
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi)
            | Ranking::ThreeOAK(hi) => !(u16::from(hi)),
            Ranking::FullHouse(..) | Ranking::StraightFlush(..) | Ranking::Straight(..) => 0,
        }
    }

    /// the defining ranks, most significant first
    pub fn ranks(&self) -> Vec<Rank> {
        match *self {
            Ranking::TwoPair(a, b) | Ranking::FullHouse(a, b) => vec![a, b],
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => vec![r],
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}
