/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits never matter for royalties except through flushes, so the
/// ordering (C < D < H < S) is only used to keep display and input
/// canonicalization stable.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// every card of this suit in a Hand
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::C => 0x0001111111111111,
            Suit::D => 0x0002222222222222,
            Suit::H => 0x0004444444444444,
            Suit::S => 0x0008888888888888,
        }
    }
}

/// str isomorphism
///
/// Besides letters and card symbols this accepts the
/// emoji glyphs the card-reading bot writes out.
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().trim_end_matches('\u{fe0f}').to_lowercase().as_str() {
            "c" | "♣" | "🟢" => Ok(Suit::C),
            "d" | "♦" | "🔷" => Ok(Suit::D),
            "h" | "♥" | "❤" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::C => "c",
                Suit::D => "d",
                Suit::H => "h",
                Suit::S => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::from(u8::from(suit)));
        }
    }

    #[test]
    fn masks_partition_deck() {
        let union = Suit::all().map(u64::from).iter().fold(0, |a, b| a | b);
        let total = Suit::all().map(u64::from).iter().map(|m| m.count_ones()).sum::<u32>();
        assert_eq!(union, (1 << 52) - 1);
        assert_eq!(total, 52);
    }

    #[test]
    fn letters_and_glyphs() {
        assert_eq!(Suit::try_from("S"), Ok(Suit::S));
        assert_eq!(Suit::try_from("h"), Ok(Suit::H));
        assert_eq!(Suit::try_from("♦"), Ok(Suit::D));
        assert_eq!(Suit::try_from("♠️"), Ok(Suit::S));
        assert_eq!(Suit::try_from("❤️"), Ok(Suit::H));
        assert_eq!(Suit::try_from("🔷"), Ok(Suit::D));
        assert_eq!(Suit::try_from("🟢"), Ok(Suit::C));
        assert!(Suit::try_from("x").is_err());
    }
}
