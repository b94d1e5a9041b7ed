use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::tiles::{Fon, Hai};

/// How the winning tile reached the hand.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum WinningMethod {
    /// Claimed from another player's discard.
    Ron,
    /// Self-drawn.
    Tsumo,
}

/// A group exposed by a call, or a declared quad.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Fuuro {
    /// Triplet completed with a claimed discard.
    Pon { hai: Hai },
    /// Run completed with a claimed discard.
    Chii { hai: [Hai; 3] },
    /// Concealed quad. Does not open the hand.
    Ankan { hai: Hai },
    /// Open quad, whether claimed outright or added onto a pon.
    Minkan { hai: Hai },
}

impl Fuuro {
    pub fn tiles(&self) -> Vec<Hai> {
        match *self {
            Fuuro::Pon { hai } => vec![hai, hai, hai],
            Fuuro::Chii { hai } => hai.to_vec(),
            Fuuro::Ankan { hai } | Fuuro::Minkan { hai } => vec![hai, hai, hai, hai],
        }
    }

    /// The tile of this group when it counts as a triplet.
    pub fn kootsu_hai(&self) -> Option<Hai> {
        match *self {
            Fuuro::Pon { hai } | Fuuro::Ankan { hai } | Fuuro::Minkan { hai } => Some(hai),
            Fuuro::Chii { .. } => None,
        }
    }

    pub fn is_kantsu(&self) -> bool {
        matches!(self, Fuuro::Ankan { .. } | Fuuro::Minkan { .. })
    }

    /// Whether this group involved another player's tile.
    pub fn is_call(&self) -> bool {
        !matches!(self, Fuuro::Ankan { .. })
    }
}

/// A finished hand at the moment a win is declared, as assembled by the
/// game state machine. Read-only for the duration of one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgariTe {
    /// Seat wind of the winning player.
    pub wind: Fon,
    /// Round wind.
    pub ba_wind: Fon,
    /// Concealed tiles, winning tile included. `14 - 3 × fuuro.len()` tiles.
    pub hai: Vec<Hai>,
    /// The winning player's own discard river.
    #[serde(default)]
    pub hoo: Vec<Hai>,
    #[serde(default)]
    pub fuuro: Vec<Fuuro>,
    /// The winning tile. Must appear among the concealed tiles.
    pub agarihai: Hai,
    pub method: WinningMethod,
    #[serde(default)]
    pub riichi: bool,
    /// Won within the first uninterrupted turn after declaring riichi.
    #[serde(default)]
    pub ippatsu: bool,
}

impl AgariTe {
    pub fn new(
        hai: Vec<Hai>,
        fuuro: Vec<Fuuro>,
        agarihai: Hai,
        method: WinningMethod,
        wind: Fon,
        ba_wind: Fon,
    ) -> AgariTe {
        AgariTe {
            wind,
            ba_wind,
            hai,
            hoo: Vec::new(),
            fuuro,
            agarihai,
            method,
            riichi: false,
            ippatsu: false,
        }
    }

    pub fn with_riichi(mut self, ippatsu: bool) -> AgariTe {
        self.riichi = true;
        self.ippatsu = ippatsu;
        self
    }

    /// A hand is open as soon as any group was formed from another player's
    /// tile. A concealed quad keeps the hand closed.
    pub fn is_open(&self) -> bool {
        self.fuuro.iter().any(Fuuro::is_call)
    }

    /// Every tile of the hand, called groups included.
    pub fn all_hai(&self) -> Vec<Hai> {
        let mut all = self.hai.clone();
        for fuuro in &self.fuuro {
            all.extend(fuuro.tiles());
        }
        all
    }

    /// Copies of a tile among the concealed tiles.
    pub fn count(&self, hai: Hai) -> usize {
        self.hai.iter().filter(|h| **h == hai).count()
    }

    pub(crate) fn validate(&self) -> Result<(), AgariTeError> {
        if self.fuuro.len() > 4 {
            return Err(AgariTeError::TooManyFuuro {
                count: self.fuuro.len(),
            });
        }
        let expected = 14 - 3 * self.fuuro.len();
        if self.hai.len() != expected {
            return Err(AgariTeError::WrongTileCount {
                expected,
                got: self.hai.len(),
            });
        }
        if !self.hai.contains(&self.agarihai) {
            return Err(AgariTeError::AgarihaiNotInTe);
        }
        let all = self.all_hai();
        for hai in &all {
            if all.iter().filter(|h| *h == hai).count() > 4 {
                return Err(AgariTeError::TooManyOfSameHai { hai: *hai });
            }
        }
        Ok(())
    }
}

/// Precondition violations on the evaluator's input. The caller is expected
/// to only submit structurally complete hands; these fail fast instead of
/// producing a wrong score.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum AgariTeError {
    WrongTileCount { expected: usize, got: usize },
    TooManyFuuro { count: usize },
    AgarihaiNotInTe,
    TooManyOfSameHai { hai: Hai },
}

impl fmt::Display for AgariTeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgariTeError::WrongTileCount { expected, got } => {
                write!(f, "expected {expected} concealed tiles, got {got}")
            }
            AgariTeError::TooManyFuuro { count } => {
                write!(f, "cannot have more than 4 called groups, got {count}")
            }
            AgariTeError::AgarihaiNotInTe => {
                write!(f, "winning tile is not among the concealed tiles")
            }
            AgariTeError::TooManyOfSameHai { hai } => {
                write!(f, "more than 4 copies of {hai}")
            }
        }
    }
}

impl std::error::Error for AgariTeError {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tiles::ParseHaiError;

    pub(crate) fn te_from_string(s: &str) -> Result<Vec<Hai>, ParseHaiError> {
        let mut te = Vec::with_capacity(14);
        for c in s.chars() {
            te.push(c.to_string().parse()?);
        }
        Ok(te)
    }

    pub(crate) fn hai(s: &str) -> Hai {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_ok() {
        let te = AgariTe::new(
            te_from_string("🀇🀈🀉🀊🀋🀌🀍🀎🀏🀙🀙🀙🀀🀀").unwrap(),
            vec![],
            hai("🀀"),
            WinningMethod::Ron,
            Fon::Ton,
            Fon::Ton,
        );
        assert_eq!(te.validate(), Ok(()));
    }

    #[test]
    fn test_validate_wrong_tile_count() {
        let te = AgariTe::new(
            te_from_string("🀇🀈🀉🀊🀋🀌🀍🀎🀏🀙🀙🀙🀀").unwrap(),
            vec![],
            hai("🀀"),
            WinningMethod::Ron,
            Fon::Ton,
            Fon::Ton,
        );
        assert_eq!(
            te.validate(),
            Err(AgariTeError::WrongTileCount {
                expected: 14,
                got: 13
            })
        );
    }

    #[test]
    fn test_validate_wrong_tile_count_with_fuuro() {
        let te = AgariTe::new(
            te_from_string("🀇🀈🀉🀊🀋🀌🀍🀎🀏🀙🀙🀙🀀🀀").unwrap(),
            vec![Fuuro::Pon { hai: hai("🀁") }],
            hai("🀀"),
            WinningMethod::Ron,
            Fon::Ton,
            Fon::Ton,
        );
        assert_eq!(
            te.validate(),
            Err(AgariTeError::WrongTileCount {
                expected: 11,
                got: 14
            })
        );
    }

    #[test]
    fn test_validate_agarihai_not_in_te() {
        let te = AgariTe::new(
            te_from_string("🀇🀈🀉🀊🀋🀌🀍🀎🀏🀙🀙🀙🀀🀀").unwrap(),
            vec![],
            hai("🀄"),
            WinningMethod::Tsumo,
            Fon::Ton,
            Fon::Ton,
        );
        assert_eq!(te.validate(), Err(AgariTeError::AgarihaiNotInTe));
    }

    #[test]
    fn test_validate_too_many_of_same_hai() {
        // Two concealed 1 wan on top of a pon of the same tile
        let te = AgariTe::new(
            te_from_string("🀇🀇🀊🀋🀌🀍🀎🀏🀙🀙🀙").unwrap(),
            vec![Fuuro::Pon { hai: hai("🀇") }],
            hai("🀇"),
            WinningMethod::Ron,
            Fon::Ton,
            Fon::Ton,
        );
        assert_eq!(
            te.validate(),
            Err(AgariTeError::TooManyOfSameHai { hai: hai("🀇") })
        );
    }

    #[test]
    fn test_validate_too_many_fuuro() {
        let te = AgariTe::new(
            vec![],
            vec![
                Fuuro::Pon { hai: hai("🀇") },
                Fuuro::Pon { hai: hai("🀈") },
                Fuuro::Pon { hai: hai("🀉") },
                Fuuro::Pon { hai: hai("🀊") },
                Fuuro::Pon { hai: hai("🀋") },
            ],
            hai("🀇"),
            WinningMethod::Ron,
            Fon::Ton,
            Fon::Ton,
        );
        assert_eq!(te.validate(), Err(AgariTeError::TooManyFuuro { count: 5 }));
    }
}
