use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;
const LOWEST_STRAIGHT_RANK: Rank = Rank::Five;

/// A lazy evaluator for a 3- or 5-card hand's strength.
///
/// Using the bitmask representation of the Hand, we search for the
/// highest Ranking with bitwise operations, trying categories from the
/// strongest down. Straights and flushes only exist for 5-card hands.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, value: Ranking) -> Kickers {
        match value.n_kickers(self.0.size()) {
            0 => Kickers::default(),
            n => {
                let hand = u16::from(self.0);
                let mask = value.mask();
                let mut rank = hand & mask;
                while n < rank.count_ones() as usize {
                    let last = rank.trailing_zeros();
                    let flip = 1 << last;
                    let skip = !flip;
                    rank &= skip;
                }
                Kickers::from(rank)
            }
        }
    }

    fn spans(&self) -> bool {
        self.0.size() >= 5
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            Ranking::Flush(Rank::from(bits))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.0.of(&suit))
                .map(Ranking::StraightFlush)
        })
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        if !self.spans() {
            return None;
        }
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(LOWEST_STRAIGHT_RANK)
        } else {
            None
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        if !self.spans() {
            return None;
        }
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.tally(*rank) >= n)
    }
}
