use crate::Points;
use crate::cards::Rank;
use crate::cards::Ranking;
use crate::cards::Strength;

/// One of the three rows of an Open-Face board.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Tier {
    Front,
    Middle,
    Back,
}

impl Tier {
    pub const fn all() -> [Tier; 3] {
        [Tier::Back, Tier::Middle, Tier::Front]
    }

    /// cards the row holds
    pub const fn size(&self) -> usize {
        match self {
            Tier::Front => 3,
            Tier::Middle | Tier::Back => 5,
        }
    }

    /// Royalty points a hand earns when placed in this row.
    ///
    /// These are the fixed game rules: anything not listed pays nothing.
    pub fn royalty(&self, strength: &Strength) -> Points {
        match (self, strength.ranking()) {
            (Tier::Back, Ranking::Straight(_)) => 2,
            (Tier::Back, Ranking::Flush(_)) => 4,
            (Tier::Back, Ranking::FullHouse(..)) => 6,
            (Tier::Back, Ranking::FourOAK(_)) => 10,
            (Tier::Back, Ranking::StraightFlush(_)) => 15,
            (Tier::Middle, Ranking::ThreeOAK(_)) => 2,
            (Tier::Middle, Ranking::Straight(_)) => 4,
            (Tier::Middle, Ranking::Flush(_)) => 8,
            (Tier::Middle, Ranking::FullHouse(..)) => 12,
            (Tier::Middle, Ranking::FourOAK(_)) => 20,
            (Tier::Middle, Ranking::StraightFlush(_)) => 30,
            (Tier::Front, Ranking::ThreeOAK(rank)) => 10 + u8::from(rank) as Points,
            (Tier::Front, Ranking::OnePair(rank)) if rank >= Rank::Six => {
                u8::from(rank) as Points - u8::from(Rank::Five) as Points
            }
            _ => 0,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Tier::Front => write!(f, "front"),
            Tier::Middle => write!(f, "middle"),
            Tier::Back => write!(f, "back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_FRONT_ROYALTY;
    use crate::cards::Hand;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn back_table() {
        assert_eq!(Tier::Back.royalty(&strength("9s Th Jd Qc Ks")), 2);
        assert_eq!(Tier::Back.royalty(&strength("2h 7h 9h Jh Kh")), 4);
        assert_eq!(Tier::Back.royalty(&strength("3c 3d 3h Ks Kd")), 6);
        assert_eq!(Tier::Back.royalty(&strength("3c 3d 3h 3s Kd")), 10);
        assert_eq!(Tier::Back.royalty(&strength("5d 6d 7d 8d 9d")), 15);
        assert_eq!(Tier::Back.royalty(&strength("3c 3d 3h Js Kd")), 0);
        assert_eq!(Tier::Back.royalty(&strength("3c 3d 9h 9s Kd")), 0);
    }

    #[test]
    fn middle_table() {
        assert_eq!(Tier::Middle.royalty(&strength("3c 3d 3h Js Kd")), 2);
        assert_eq!(Tier::Middle.royalty(&strength("As 2h 3d 4c 5s")), 4);
        assert_eq!(Tier::Middle.royalty(&strength("2h 7h 9h Jh Kh")), 8);
        assert_eq!(Tier::Middle.royalty(&strength("3c 3d 3h Ks Kd")), 12);
        assert_eq!(Tier::Middle.royalty(&strength("3c 3d 3h 3s Kd")), 20);
        assert_eq!(Tier::Middle.royalty(&strength("5d 6d 7d 8d 9d")), 30);
        assert_eq!(Tier::Middle.royalty(&strength("Ac Ad Kh Ks Qd")), 0);
    }

    #[test]
    fn front_trips_scale_with_rank() {
        assert_eq!(Tier::Front.royalty(&strength("2c 2d 2h")), 10);
        assert_eq!(Tier::Front.royalty(&strength("Kc Kd Kh")), 21);
        assert_eq!(Tier::Front.royalty(&strength("Ac Ad Ah")), 22);
        assert_eq!(Tier::Front.royalty(&strength("Ac Ad Ah")), MAX_FRONT_ROYALTY);
    }

    #[test]
    fn front_pairs_from_sixes() {
        let pays = ["2", "3", "4", "5", "6", "7", "8", "9", "T", "J", "Q", "K", "A"]
            .map(|r| format!("{r}c {r}d {}", if r == "3" { "4s" } else { "3s" }))
            .map(|s| Tier::Front.royalty(&strength(&s)));
        assert_eq!(pays, [0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn nothing_else_pays() {
        assert_eq!(Tier::Front.royalty(&strength("Ac Kd Qh")), 0);
        assert_eq!(Tier::Front.royalty(&strength("2h 7h 9h Jh Kh")), 0);
        assert_eq!(Tier::Front.royalty(&strength("9s Th Jd Qc Ks")), 0);
        for tier in Tier::all() {
            assert_eq!(tier.royalty(&strength("3c 7d 9h Js Kd")), 0);
            assert_eq!(tier.royalty(&strength("Ac Ad 9h Js Kd")) > 0, tier == Tier::Front);
        }
    }
}
