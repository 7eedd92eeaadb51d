use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52`
/// - `u64`: Single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// Cards parse from a rank glyph followed by a suit glyph, like `"As"`
/// or `"TC"`. Use [`Card::parse`] for a whitespace-separated list.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52, "invalid card u8: {}", n);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl serde::Serialize for Card {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// str isomorphism
/// first character is the rank, whatever follows is the suit
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match chars.next() {
            Some(r) => {
                let ref mut buffer = [0; 4];
                let rank = Rank::try_from(&*r.encode_utf8(buffer))?;
                let suit = Suit::try_from(chars.as_str())?;
                Ok(Card::from((rank, suit)))
            }
            None => Err("empty card code".into()),
        }
    }
}

impl Card {
    /// Parses whitespace-separated card codes into a vector of cards.
    ///
    /// Returns an error naming the first code that fails to parse.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(|code| Self::try_from(code).map_err(|e| format!("{}: {}", code, e)))
            .collect::<Result<Vec<Self>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for n in 0..52u8 {
            let card = Card::from(n);
            assert_eq!(card, Card::from((card.rank(), card.suit())));
            assert_eq!(n, u8::from(card));
        }
    }

    #[test]
    fn two_character_display() {
        let card = Card::from((Rank::Ten, Suit::S));
        assert_eq!(card.to_string(), "Ts");
        assert_eq!(u8::from(card), 35);
        assert_eq!(Card::try_from("Ts"), Ok(card));
    }

    #[test]
    fn parse_codes() {
        let cards = Card::parse("AS kh  2c\t9D").unwrap();
        let shown = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(shown, vec!["As", "Kh", "2c", "9d"]);
    }

    #[test]
    fn parse_bot_glyphs() {
        let cards = Card::parse("A♠️ K❤️ Q🔷 J🟢").unwrap();
        let suits = cards.iter().map(|c| c.suit()).collect::<Vec<_>>();
        assert_eq!(suits, vec![Suit::S, Suit::H, Suit::D, Suit::C]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Card::parse("As Kx").is_err());
        assert!(Card::parse("1s").is_err());
        assert!(Card::parse("A").is_err());
    }

    #[test]
    fn serializes_as_code() {
        let card = Card::from((Rank::Ace, Suit::H));
        assert_eq!(serde_json::to_string(&card).unwrap(), "\"Ah\"");
    }
}
