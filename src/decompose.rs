use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::tiles::Hai;

/// A three-tile group, identified by its lowest tile.
#[derive(Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Mentsu {
    /// Run of three consecutive tiles in one suit.
    Shuntsu(Hai),
    /// Triplet.
    Kootsu(Hai),
}

impl Mentsu {
    pub fn tiles(self) -> [Hai; 3] {
        match self {
            Mentsu::Shuntsu(hai) => [hai, hai.next(), hai.next().next()],
            Mentsu::Kootsu(hai) => [hai, hai, hai],
        }
    }

    pub fn first(self) -> Hai {
        match self {
            Mentsu::Shuntsu(hai) | Mentsu::Kootsu(hai) => hai,
        }
    }

    pub fn is_shuntsu(self) -> bool {
        matches!(self, Mentsu::Shuntsu(..))
    }

    pub fn is_kootsu(self) -> bool {
        matches!(self, Mentsu::Kootsu(..))
    }

    pub fn contains(self, hai: Hai) -> bool {
        self.tiles().contains(&hai)
    }
}

impl fmt::Debug for Mentsu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.tiles();
        write!(f, "{}{}{}", a.to_char(), b.to_char(), c.to_char())
    }
}

/// One partition of the concealed tiles into a pair plus melds. Called
/// groups are melds by construction and stay outside of this struct.
#[derive(Ord, PartialOrd, Eq, PartialEq, Clone)]
pub struct WinningCombination {
    pub toitsu: Hai,
    pub mentsu: Vec<Mentsu>,
}

impl fmt::Debug for WinningCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WinningCombination")
            .field(
                "toitsu",
                &format!("{}{}", self.toitsu.to_char(), self.toitsu.to_char()),
            )
            .field("mentsu", &self.mentsu)
            .finish()
    }
}

/// Enumerate every distinct pair-plus-`mentsu_needed`-melds partition of
/// the given tiles. An empty result is not an error: it signals that only
/// pair-based or irregular whole-hand shapes can apply.
pub fn winning_combinations(te: &[Hai], mentsu_needed: usize) -> Vec<WinningCombination> {
    let mut tiles = te.to_vec();
    tiles.sort();

    let mut out = Vec::new();
    search(&tiles, None, &mut Vec::new(), mentsu_needed, &mut out);

    // Normalize
    out.sort();
    out.dedup();
    out
}

/// Backtracking on the sorted remainder. The lowest remaining tile must go
/// into the pair, a triplet, or a run starting at it, so trying those three
/// moves at each level covers every partition.
fn search(
    remaining: &[Hai],
    toitsu: Option<Hai>,
    mentsu: &mut Vec<Mentsu>,
    needed: usize,
    out: &mut Vec<WinningCombination>,
) {
    let hai = match remaining.first() {
        Some(hai) => *hai,
        None => {
            if let Some(toitsu) = toitsu {
                if mentsu.len() == needed {
                    let mut mentsu = mentsu.clone();
                    mentsu.sort();
                    out.push(WinningCombination { toitsu, mentsu });
                }
            }
            return;
        }
    };
    let copies = remaining.iter().take_while(|h| **h == hai).count();

    if toitsu.is_none() && copies >= 2 {
        search(&remaining[2..], Some(hai), mentsu, needed, out);
    }

    if mentsu.len() < needed {
        if copies >= 3 {
            mentsu.push(Mentsu::Kootsu(hai));
            search(&remaining[3..], toitsu, mentsu, needed, out);
            mentsu.pop();
        }

        if let Some([_, b, c]) = hai.shuntsu_from() {
            if let Some(rest) = remove_run(remaining, b, c) {
                mentsu.push(Mentsu::Shuntsu(hai));
                search(&rest, toitsu, mentsu, needed, out);
                mentsu.pop();
            }
        }
    }
}

/// Remove the head tile plus one copy each of `b` and `c`, or fail.
fn remove_run(remaining: &[Hai], b: Hai, c: Hai) -> Option<Vec<Hai>> {
    let mut rest = remaining[1..].to_vec();
    for hai in [b, c] {
        let pos = rest.iter().position(|x| *x == hai)?;
        rest.remove(pos);
    }
    Some(rest)
}
