use crate::Points;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Ranking;
use crate::scoring::Tier;
use crate::search::Choice;
use crate::search::Slots;
use crate::search::Stats;

/// One placed row of a solved board.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row {
    pub tier: Tier,
    pub cards: Vec<Card>,
    pub ranking: Ranking,
    pub royalty: Points,
}

/// The chosen arrangement of a Fantasyland deal.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Solution {
    pub back: Row,
    pub middle: Row,
    pub front: Row,
    pub discards: Vec<Card>,
    /// royalties over all three rows
    pub points: Points,
    /// points, plus the repeat bonus when the repeat was chosen
    pub value: Utility,
    pub repeat: bool,
    pub stats: Stats,
}

impl Solution {
    pub fn rows(&self) -> [&Row; 3] {
        [&self.back, &self.middle, &self.front]
    }
}

/// highest rank first, suits descending within a rank
fn descending(slots: Slots, cards: &[Card]) -> Vec<Card> {
    let mut cards = slots.cards(cards);
    cards.sort_by(|a, b| b.cmp(a));
    cards
}

impl From<(&[Card], Choice, Stats)> for Solution {
    fn from((cards, choice, stats): (&[Card], Choice, Stats)) -> Self {
        let arrangement = choice.arrangement;
        let row = |tier: Tier| Row {
            tier,
            cards: descending(arrangement.slots(tier), cards),
            ranking: arrangement.strength(tier).ranking(),
            royalty: arrangement.royalty(tier),
        };
        Self {
            back: row(Tier::Back),
            middle: row(Tier::Middle),
            front: row(Tier::Front),
            discards: descending(arrangement.discards(cards.len()), cards),
            points: arrangement.points(),
            value: choice.value,
            repeat: choice.repeat,
            stats,
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(
            f,
            "{:<8}{:<16}{:<18}{:>3}",
            self.tier.to_string(),
            cards.join(" "),
            self.ranking.to_string(),
            self.royalty
        )
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        if !self.discards.is_empty() {
            let cards = self.discards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            writeln!(f, "{:<8}{}", "discard", cards.join(" "))?;
        }
        write!(
            f,
            "{:<8}{:<16}{:<8}{:<10}{:<8}{}",
            "points",
            self.points,
            "value",
            self.value,
            "repeat",
            if self.repeat { "yes" } else { "no" }
        )
    }
}
