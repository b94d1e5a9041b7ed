use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Values {
    Ii = 1,
    Ryan = 2,
    San = 3,
    Suu = 4,
    Uu = 5,
    Roo = 6,
    Chii = 7,
    Paa = 8,
    Kyuu = 9,
}
const VALUES: [Values; 9] = [
    Values::Ii,
    Values::Ryan,
    Values::San,
    Values::Suu,
    Values::Uu,
    Values::Roo,
    Values::Chii,
    Values::Paa,
    Values::Kyuu,
];

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Suu {
    Wan,
    Pin,
    Sou,
}
pub const SUU: [Suu; 3] = [Suu::Wan, Suu::Pin, Suu::Sou];

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum JiHai {
    Fon(Fon),
    Sangen(Sangen),
}

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct SuuHai {
    pub suu: Suu,
    pub value: Values,
}

/// Wind, used both as a tile face and as a seat/round marker.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Fon {
    Ton = 0,
    Nan = 1,
    Shaa = 2,
    Pee = 3,
}

impl Fon {
    pub fn next(self) -> Self {
        match self {
            Fon::Ton => Fon::Nan,
            Fon::Nan => Fon::Shaa,
            Fon::Shaa => Fon::Pee,
            Fon::Pee => Fon::Ton,
        }
    }
}

pub const FON: [Fon; 4] = [Fon::Ton, Fon::Nan, Fon::Shaa, Fon::Pee];

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Sangen {
    Haku,
    Hatsu,
    Chun,
}
pub const SANGEN: [Sangen; 3] = [Sangen::Haku, Sangen::Hatsu, Sangen::Chun];

#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Hai {
    Suu(SuuHai),
    Ji(JiHai),
}

impl Values {
    pub fn next(self) -> Self {
        match self {
            Values::Ii => Values::Ryan,
            Values::Ryan => Values::San,
            Values::San => Values::Suu,
            Values::Suu => Values::Uu,
            Values::Uu => Values::Roo,
            Values::Roo => Values::Chii,
            Values::Chii => Values::Paa,
            Values::Paa => Values::Kyuu,
            Values::Kyuu => Values::Ii,
        }
    }
}

impl Hai {
    pub fn is_suuhai(self) -> bool {
        match self {
            Hai::Suu(..) => true,
            Hai::Ji(..) => false,
        }
    }

    pub fn is_jihai(self) -> bool {
        !self.is_suuhai()
    }

    /// Terminal or honor ("yaochuu") tile.
    pub fn is_jihai_or_1_9(self) -> bool {
        match self {
            Hai::Suu(SuuHai { value, .. }) => value == Values::Ii || value == Values::Kyuu,
            Hai::Ji(..) => true,
        }
    }

    /// Value tile for a player: any dragon, or a wind matching the round or the seat.
    pub fn is_yakuhai(self, ba: Fon, jibun: Fon) -> bool {
        match self {
            Hai::Ji(JiHai::Sangen(..)) => true,
            Hai::Ji(JiHai::Fon(fon)) => fon == ba || fon == jibun,
            Hai::Suu(..) => false,
        }
    }

    /// Tiles allowed in an all-green hand: 2, 3, 4, 6, 8 of bamboo and the green dragon.
    pub fn is_green(self) -> bool {
        match self {
            Hai::Suu(SuuHai {
                suu: Suu::Sou,
                value,
            }) => matches!(
                value,
                Values::Ryan | Values::San | Values::Suu | Values::Roo | Values::Paa
            ),
            Hai::Ji(JiHai::Sangen(Sangen::Hatsu)) => true,
            _ => false,
        }
    }

    /// False across suits and for honors; adjacency never fails.
    pub fn same_suit(self, other: Hai) -> bool {
        match (self, other) {
            (Hai::Suu(SuuHai { suu: s1, .. }), Hai::Suu(SuuHai { suu: s2, .. })) => s1 == s2,
            _ => false,
        }
    }

    /// The run starting at this tile, if one can exist (numerals 1 through 7 only).
    pub fn shuntsu_from(self) -> Option<[Hai; 3]> {
        match self {
            Hai::Suu(SuuHai { value, .. }) if value <= Values::Chii => {
                Some([self, self.next(), self.next().next()])
            }
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Hai::Suu(SuuHai { suu, value }) => Hai::Suu(SuuHai {
                suu,
                value: value.next(),
            }),
            Hai::Ji(JiHai::Fon(fon)) => Hai::Ji(JiHai::Fon(fon.next())),
            Hai::Ji(JiHai::Sangen(sangen)) => Hai::Ji(JiHai::Sangen(sangen.next())),
        }
    }
}

impl Sangen {
    pub fn next(self) -> Self {
        match self {
            Sangen::Haku => Sangen::Hatsu,
            Sangen::Hatsu => Sangen::Chun,
            Sangen::Chun => Sangen::Haku,
        }
    }
}

impl Hai {
    pub fn to_char(self) -> char {
        match self {
            Hai::Suu(SuuHai {
                suu: Suu::Wan,
                value,
            }) => std::char::from_u32(0x1F007 + value as u32 - 1).unwrap(),
            Hai::Suu(SuuHai {
                suu: Suu::Pin,
                value,
            }) => std::char::from_u32(0x1F019 + value as u32 - 1).unwrap(),
            Hai::Suu(SuuHai {
                suu: Suu::Sou,
                value,
            }) => std::char::from_u32(0x1F010 + value as u32 - 1).unwrap(),
            Hai::Ji(JiHai::Fon(fon)) => std::char::from_u32(0x1F000 + fon as u32).unwrap(),
            Hai::Ji(JiHai::Sangen(Sangen::Haku)) => std::char::from_u32(0x1F006).unwrap(),
            Hai::Ji(JiHai::Sangen(Sangen::Hatsu)) => std::char::from_u32(0x1F005).unwrap(),
            Hai::Ji(JiHai::Sangen(Sangen::Chun)) => std::char::from_u32(0x1F004).unwrap(),
        }
    }
}

impl fmt::Display for Hai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// The 34 distinct tile identities, in suit/rank order.
pub fn make_all_tiles() -> [Hai; 34] {
    let mut hai = [Hai::Ji(JiHai::Sangen(Sangen::Hatsu)); 34];
    let mut cnt = 0;

    for suu in &SUU {
        for value in &VALUES {
            hai[cnt] = Hai::Suu(SuuHai {
                suu: *suu,
                value: *value,
            });
            cnt += 1;
        }
    }

    for fon in &FON {
        hai[cnt] = Hai::Ji(JiHai::Fon(*fon));
        cnt += 1;
    }

    for sangen in &SANGEN {
        hai[cnt] = Hai::Ji(JiHai::Sangen(*sangen));
        cnt += 1;
    }
    hai
}

#[derive(Debug, Clone)]
pub enum ParseHaiError {
    EmptyString,
    NoMahjongCharFound { string: String },
}

impl fmt::Display for ParseHaiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHaiError::EmptyString => write!(f, "empty string"),
            ParseHaiError::NoMahjongCharFound { string } => {
                write!(f, "no mahjong char found in {string:?}")
            }
        }
    }
}

impl std::error::Error for ParseHaiError {}

impl FromStr for Hai {
    type Err = ParseHaiError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(c) = s.chars().next() {
            for hai in make_all_tiles().iter() {
                if hai.to_char() == c {
                    return Ok(*hai);
                }
            }

            Err(ParseHaiError::NoMahjongCharFound {
                string: s.to_owned(),
            })
        } else {
            Err(ParseHaiError::EmptyString)
        }
    }
}
