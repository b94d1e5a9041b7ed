use std::fmt;

use log::{debug, trace};

use crate::decompose::{winning_combinations, Mentsu, WinningCombination};
use crate::te::{AgariTe, AgariTeError, Fuuro, WinningMethod};
use crate::tiles::{Fon, Hai, JiHai, Sangen, Suu, SuuHai, Values, FON, SANGEN, SUU};

/// Every named scoring pattern. Patterns up to `Ryampeko` are the ordinary
/// tier; the rest are limit patterns (yakuman).
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum Yaku {
    Tsumo,
    Riichi,
    Ippatsu,
    Chun,
    Haku,
    Hatsu,
    FieldWind(Fon),
    SeatWind(Fon),
    Tanyao,
    Pinfu,
    Honitsu,
    Chinitsu,
    Iipeko,
    Toitoi,
    Sananko,
    SanshokuDojun,
    SanshokuDoko,
    Ittsu,
    Chitoitsu,
    Shosangen,
    Chanta,
    Junchan,
    Honroto,
    Sankantsu,
    Ryampeko,
    Daisangen,
    Shosushi,
    Daisushi,
    Tsuiso,
    Ryuiso,
    Chinroto,
    Sukantsu,
    SuankoTanki,
    Suanko,
    Churen9,
    Churen,
    Kokushi13,
    Kokushi,
}

use Yaku::*;

/// Ordinary tier, in evaluation order.
pub const NORMAL_YAKU: [Yaku; 31] = [
    Tsumo,
    Riichi,
    Ippatsu,
    Chun,
    Haku,
    Hatsu,
    FieldWind(Fon::Ton),
    FieldWind(Fon::Nan),
    FieldWind(Fon::Shaa),
    FieldWind(Fon::Pee),
    SeatWind(Fon::Ton),
    SeatWind(Fon::Nan),
    SeatWind(Fon::Shaa),
    SeatWind(Fon::Pee),
    Tanyao,
    Pinfu,
    Honitsu,
    Chinitsu,
    Iipeko,
    Toitoi,
    Sananko,
    SanshokuDojun,
    SanshokuDoko,
    Ittsu,
    Chitoitsu,
    Shosangen,
    Chanta,
    Junchan,
    Honroto,
    Sankantsu,
    Ryampeko,
];

/// Limit tier, in evaluation order. A rarer variant immediately precedes
/// the pattern it supersedes.
pub const YAKUMAN_YAKU: [Yaku; 13] = [
    Daisangen,
    Shosushi,
    Daisushi,
    Tsuiso,
    Ryuiso,
    Chinroto,
    Sukantsu,
    SuankoTanki,
    Suanko,
    Churen9,
    Churen,
    Kokushi13,
    Kokushi,
];

impl Yaku {
    /// Stable identifier consumed by the scoring/settlement side.
    pub fn name(self) -> &'static str {
        match self {
            Tsumo => "tsumo",
            Riichi => "riichi",
            Ippatsu => "ippatsu",
            Chun => "red",
            Haku => "white",
            Hatsu => "green",
            FieldWind(Fon::Ton) => "field-wind-e",
            FieldWind(Fon::Nan) => "field-wind-s",
            FieldWind(Fon::Shaa) => "field-wind-w",
            FieldWind(Fon::Pee) => "field-wind-n",
            SeatWind(Fon::Ton) => "seat-wind-e",
            SeatWind(Fon::Nan) => "seat-wind-s",
            SeatWind(Fon::Shaa) => "seat-wind-w",
            SeatWind(Fon::Pee) => "seat-wind-n",
            Tanyao => "tanyao",
            Pinfu => "pinfu",
            Honitsu => "honitsu",
            Chinitsu => "chinitsu",
            Iipeko => "iipeko",
            Toitoi => "toitoi",
            Sananko => "sananko",
            SanshokuDojun => "sanshoku-dojun",
            SanshokuDoko => "sanshoku-doko",
            Ittsu => "ittsu",
            Chitoitsu => "chitoitsu",
            Shosangen => "shosangen",
            Chanta => "chanta",
            Junchan => "junchan",
            Honroto => "honroto",
            Sankantsu => "sankantsu",
            Ryampeko => "ryampeko",
            Daisangen => "daisangen",
            Shosushi => "shosushi",
            Daisushi => "daisushi",
            Tsuiso => "tsuiso",
            Ryuiso => "ryuiso",
            Chinroto => "chinroto",
            Sukantsu => "sukantsu",
            SuankoTanki => "suanko-tanki",
            Suanko => "suanko",
            Churen9 => "churen-9",
            Churen => "churen",
            Kokushi13 => "kokushi-13",
            Kokushi => "kokushi",
        }
    }

    /// Value contribution, with the open-hand reduction already applied for
    /// the patterns flagged for it.
    pub fn fan(self, open: bool) -> YakuValue {
        use YakuValue::*;
        match self {
            Tsumo | Riichi | Ippatsu | Chun | Haku | Hatsu | FieldWind(..) | SeatWind(..)
            | Tanyao | Pinfu | Iipeko => Fan(1),
            Honitsu => Fan(if open { 2 } else { 3 }),
            Chinitsu => Fan(if open { 5 } else { 6 }),
            Toitoi | Sananko | SanshokuDoko | Chitoitsu | Shosangen | Honroto | Sankantsu => Fan(2),
            SanshokuDojun | Ittsu | Chanta => Fan(if open { 1 } else { 2 }),
            Junchan => Fan(if open { 2 } else { 3 }),
            Ryampeko => Fan(3),
            Daisangen | Shosushi | Daisushi | Tsuiso | Ryuiso | Chinroto | Sukantsu | Suanko
            | Churen | Kokushi => Yakuman(1),
            SuankoTanki | Churen9 | Kokushi13 => Yakuman(2),
        }
    }

    pub fn is_yakuman(self) -> bool {
        matches!(self.fan(false), YakuValue::Yakuman(..))
    }

    pub fn is_double_yakuman(self) -> bool {
        self.fan(false) == YakuValue::Yakuman(2)
    }

    /// The stricter pattern whose match suppresses this one within the same
    /// candidate decomposition.
    pub fn upper(self) -> Option<Yaku> {
        match self {
            Suanko => Some(SuankoTanki),
            Churen => Some(Churen9),
            Kokushi => Some(Kokushi13),
            _ => None,
        }
    }

    /// Predicate over the hand context and one candidate decomposition
    /// (`None` when the hand has no standard decomposition).
    pub fn matches(self, te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
        match self {
            Tsumo => menzen_tsumo(te),
            Riichi => te.riichi,
            Ippatsu => te.ippatsu,
            Chun => yakuhai(te, comb, Hai::Ji(JiHai::Sangen(Sangen::Chun))),
            Haku => yakuhai(te, comb, Hai::Ji(JiHai::Sangen(Sangen::Haku))),
            Hatsu => yakuhai(te, comb, Hai::Ji(JiHai::Sangen(Sangen::Hatsu))),
            FieldWind(fon) => te.ba_wind == fon && yakuhai(te, comb, Hai::Ji(JiHai::Fon(fon))),
            SeatWind(fon) => te.wind == fon && yakuhai(te, comb, Hai::Ji(JiHai::Fon(fon))),
            Tanyao => tanyao(te, comb),
            Pinfu => pinfu(te, comb),
            Honitsu => honitsu(te, comb),
            Chinitsu => chinitsu(te, comb),
            Iipeko => comb.is_some_and(|c| !te.is_open() && peko_count(c) == 1),
            Toitoi => toitoi(te, comb),
            Sananko => comb.is_some_and(|c| concealed_kootsu_count(te, c) >= 3),
            SanshokuDojun => sanshoku_dojun(te, comb),
            SanshokuDoko => sanshoku_doko(te, comb),
            Ittsu => ittsu(te, comb),
            Chitoitsu => chitoitsu(te, comb),
            Shosangen => shosangen(te, comb),
            Chanta => chanta(te, comb),
            Junchan => junchan(te, comb),
            Honroto => honroto(te, comb),
            Sankantsu => comb.is_some() && kantsu_count(te) == 3,
            Ryampeko => comb.is_some_and(|c| !te.is_open() && peko_count(c) == 2),
            Daisangen => daisangen(te, comb),
            Shosushi => shosushi(te, comb),
            Daisushi => daisushi(te, comb),
            Tsuiso => comb.is_some() && te.all_hai().iter().all(|h| h.is_jihai()),
            Ryuiso => comb.is_some() && te.all_hai().iter().all(|h| h.is_green()),
            Chinroto => {
                comb.is_some()
                    && te
                        .all_hai()
                        .iter()
                        .all(|h| h.is_suuhai() && h.is_jihai_or_1_9())
            }
            Sukantsu => comb.is_some() && kantsu_count(te) == 4,
            SuankoTanki => {
                comb.is_some_and(|c| concealed_kootsu_count(te, c) == 4 && c.toitsu == te.agarihai)
            }
            Suanko => comb.is_some_and(|c| concealed_kootsu_count(te, c) == 4),
            Churen9 => churen_9(te, comb),
            Churen => churen(te, comb),
            Kokushi13 => kokushi_13(te),
            Kokushi => KOKUSHI_HAI.iter().all(|h| te.hai.contains(h)),
        }
    }
}

/// Aggregate value of a matched pattern set.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Copy, Clone)]
pub enum YakuValue {
    Fan(usize),
    Yakuman(usize),
}

impl std::ops::Add for YakuValue {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        use YakuValue::*;
        match (self, other) {
            (Fan(fan1), Fan(fan2)) => Fan(fan1 + fan2),
            (Yakuman(yakuman), Fan(_)) => Yakuman(yakuman),
            (Fan(_), Yakuman(yakuman)) => Yakuman(yakuman),
            (Yakuman(yakuman1), Yakuman(yakuman2)) => Yakuman(yakuman1 + yakuman2),
        }
    }
}

impl fmt::Display for YakuValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YakuValue::Fan(fan) => write!(f, "{fan} fan"),
            YakuValue::Yakuman(1) => write!(f, "yakuman"),
            YakuValue::Yakuman(yakuman) => write!(f, "{yakuman}x yakuman"),
        }
    }
}

/// Total value of a matched pattern set, open-hand reduction included.
pub fn total_fan(yaku: &[Yaku], open: bool) -> YakuValue {
    yaku.iter()
        .fold(YakuValue::Fan(0), |acc, y| acc + y.fan(open))
}

impl AgariTe {
    /// Evaluate a finished hand: every matched pattern name of the
    /// highest-value reading, in catalog order. An empty list is a valid
    /// result (a shape-complete hand that scores nothing), not an error.
    pub fn evaluate(&self) -> Result<Vec<Yaku>, AgariTeError> {
        self.validate()?;

        let combs = winning_combinations(&self.hai, 4 - self.fuuro.len());
        debug!("{} standard decomposition(s)", combs.len());
        let mut candidates: Vec<Option<WinningCombination>> =
            combs.into_iter().map(Some).collect();
        if candidates.is_empty() {
            // Pair-based and irregular shapes still get one evaluation pass
            candidates.push(None);
        }

        for comb in &candidates {
            let mut matched = Vec::new();
            for yaku in YAKUMAN_YAKU {
                if let Some(upper) = yaku.upper() {
                    if matched.contains(&upper) {
                        continue;
                    }
                }
                if yaku.matches(self, comb.as_ref()) {
                    matched.push(yaku);
                }
            }
            if !matched.is_empty() {
                debug!("limit tier matched: {matched:?}");
                return Ok(matched);
            }
        }

        let open = self.is_open();
        let mut best: Option<(Vec<Yaku>, YakuValue)> = None;
        for comb in &candidates {
            let matched: Vec<Yaku> = NORMAL_YAKU
                .into_iter()
                .filter(|yaku| yaku.matches(self, comb.as_ref()))
                .collect();
            if matched.is_empty() {
                continue;
            }
            let fan = total_fan(&matched, open);
            trace!("candidate {comb:?}: {fan:?} from {matched:?}");
            match &best {
                Some((_, best_fan)) if fan <= *best_fan => {}
                _ => best = Some((matched, fan)),
            }
        }

        Ok(best.map(|(yaku, _)| yaku).unwrap_or_default())
    }
}

const KOKUSHI_HAI: [Hai; 13] = [
    Hai::Suu(SuuHai {
        suu: Suu::Wan,
        value: Values::Ii,
    }),
    Hai::Suu(SuuHai {
        suu: Suu::Wan,
        value: Values::Kyuu,
    }),
    Hai::Suu(SuuHai {
        suu: Suu::Pin,
        value: Values::Ii,
    }),
    Hai::Suu(SuuHai {
        suu: Suu::Pin,
        value: Values::Kyuu,
    }),
    Hai::Suu(SuuHai {
        suu: Suu::Sou,
        value: Values::Ii,
    }),
    Hai::Suu(SuuHai {
        suu: Suu::Sou,
        value: Values::Kyuu,
    }),
    Hai::Ji(JiHai::Fon(Fon::Ton)),
    Hai::Ji(JiHai::Fon(Fon::Nan)),
    Hai::Ji(JiHai::Fon(Fon::Shaa)),
    Hai::Ji(JiHai::Fon(Fon::Pee)),
    Hai::Ji(JiHai::Sangen(Sangen::Haku)),
    Hai::Ji(JiHai::Sangen(Sangen::Hatsu)),
    Hai::Ji(JiHai::Sangen(Sangen::Chun)),
];

fn menzen_tsumo(te: &AgariTe) -> bool {
    !te.is_open() && te.method == WinningMethod::Tsumo
}

/// Triplet of the given tile somewhere in the hand, concealed or called.
/// Honors cannot sit in a run, so three concealed copies always form a
/// triplet in any standard decomposition.
fn kootsu_of(te: &AgariTe, hai: Hai) -> bool {
    te.count(hai) >= 3 || te.fuuro.iter().any(|f| f.kootsu_hai() == Some(hai))
}

fn yakuhai(te: &AgariTe, comb: Option<&WinningCombination>, hai: Hai) -> bool {
    comb.is_some() && kootsu_of(te, hai)
}

fn tanyao(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    comb.is_some() && te.all_hai().iter().all(|h| !h.is_jihai_or_1_9())
}

fn pinfu(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    te.fuuro.is_empty()
        && comb.mentsu.iter().all(|m| m.is_shuntsu())
        && !comb.toitsu.is_yakuhai(te.ba_wind, te.wind)
        && ryanmen_wait(comb, te.agarihai)
}

/// Two-sided wait: the winning tile sits at either end of a run whose far
/// end is not a terminal. Edge waits 1-2-(3) and (7)-8-9 do not count.
fn ryanmen_wait(comb: &WinningCombination, agarihai: Hai) -> bool {
    comb.mentsu.iter().any(|m| {
        let [a, _, c] = m.tiles();
        m.is_shuntsu()
            && ((agarihai == a && !c.is_jihai_or_1_9()) || (agarihai == c && !a.is_jihai_or_1_9()))
    })
}

/// Per-suit and honor tile counts over the whole hand, calls included.
fn suit_spread(te: &AgariTe) -> ([usize; 3], usize) {
    let mut suits = [0usize; 3];
    let mut honors = 0;
    for hai in te.all_hai() {
        match hai {
            Hai::Suu(SuuHai { suu, .. }) => suits[suu as usize] += 1,
            Hai::Ji(..) => honors += 1,
        }
    }
    (suits, honors)
}

fn honitsu(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let (suits, honors) = suit_spread(te);
    comb.is_some() && suits.iter().filter(|c| **c > 0).count() == 1 && honors > 0
}

fn chinitsu(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let (suits, honors) = suit_spread(te);
    comb.is_some() && suits.iter().filter(|c| **c > 0).count() == 1 && honors == 0
}

/// Number of disjoint identical-run pairs in a decomposition.
fn peko_count(comb: &WinningCombination) -> usize {
    let mut shuntsu: Vec<Hai> = comb
        .mentsu
        .iter()
        .filter(|m| m.is_shuntsu())
        .map(|m| m.first())
        .collect();
    shuntsu.sort();
    let mut count = 0;
    let mut i = 0;
    while i + 1 < shuntsu.len() {
        if shuntsu[i] == shuntsu[i + 1] {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

fn toitoi(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    comb.is_some_and(|c| {
        !te.fuuro.iter().any(|f| matches!(f, Fuuro::Chii { .. }))
            && c.mentsu.iter().all(|m| m.is_kootsu())
    })
}

/// Triplet-like groups not formed from an opposing player's tile: the
/// decomposed triplets plus concealed quads. A triplet completed by a
/// claimed winning tile counts as open, unless the tile could only have
/// finished the pair or a run of this candidate.
fn concealed_kootsu_count(te: &AgariTe, comb: &WinningCombination) -> usize {
    let mut count = te
        .fuuro
        .iter()
        .filter(|f| matches!(f, Fuuro::Ankan { .. }))
        .count();
    for mentsu in &comb.mentsu {
        if let Mentsu::Kootsu(hai) = mentsu {
            let ron_completed = te.method == WinningMethod::Ron
                && *hai == te.agarihai
                && comb.toitsu != te.agarihai
                && !comb
                    .mentsu
                    .iter()
                    .any(|m| m.is_shuntsu() && m.contains(te.agarihai));
            if !ron_completed {
                count += 1;
            }
        }
    }
    count
}

/// Runs of the hand: decomposed ones plus called sequences, each by its
/// lowest tile.
fn shuntsu_starts(te: &AgariTe, comb: &WinningCombination) -> Vec<Hai> {
    let mut starts: Vec<Hai> = comb
        .mentsu
        .iter()
        .filter(|m| m.is_shuntsu())
        .map(|m| m.first())
        .collect();
    for fuuro in &te.fuuro {
        if let Fuuro::Chii { hai } = fuuro {
            let mut hai = *hai;
            hai.sort();
            starts.push(hai[0]);
        }
    }
    starts
}

/// Triplets of the hand, decomposed and called.
fn kootsu_tiles(te: &AgariTe, comb: &WinningCombination) -> Vec<Hai> {
    let mut tiles: Vec<Hai> = comb
        .mentsu
        .iter()
        .filter(|m| m.is_kootsu())
        .map(|m| m.first())
        .collect();
    tiles.extend(te.fuuro.iter().filter_map(Fuuro::kootsu_hai));
    tiles
}

fn sanshoku_dojun(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    let starts = shuntsu_starts(te, comb);
    starts.iter().any(|start| match start {
        Hai::Suu(SuuHai { value, .. }) => SUU.iter().all(|suu| {
            starts.contains(&Hai::Suu(SuuHai {
                suu: *suu,
                value: *value,
            }))
        }),
        Hai::Ji(..) => false,
    })
}

fn sanshoku_doko(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    let kootsu = kootsu_tiles(te, comb);
    kootsu.iter().any(|hai| match hai {
        Hai::Suu(SuuHai { value, .. }) => SUU.iter().all(|suu| {
            kootsu.contains(&Hai::Suu(SuuHai {
                suu: *suu,
                value: *value,
            }))
        }),
        Hai::Ji(..) => false,
    })
}

fn ittsu(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    let starts = shuntsu_starts(te, comb);
    SUU.iter().any(|suu| {
        [Values::Ii, Values::Suu, Values::Chii].iter().all(|value| {
            starts.contains(&Hai::Suu(SuuHai {
                suu: *suu,
                value: *value,
            }))
        })
    })
}

/// Seven distinct pairs. Only reachable when no standard decomposition
/// exists for the hand, so a four-melds-one-pair reading always wins over
/// the seven-pairs reading of the same tiles.
fn chitoitsu(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    if comb.is_some() || !te.fuuro.is_empty() || te.hai.len() != 14 {
        return false;
    }
    let mut tiles = te.hai.clone();
    tiles.sort();
    let mut prev = None;
    for pair in tiles.chunks(2) {
        if pair[0] != pair[1] || prev == Some(pair[0]) {
            return false;
        }
        prev = Some(pair[0]);
    }
    true
}

fn shosangen(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    match comb.toitsu {
        Hai::Ji(JiHai::Sangen(pair)) => SANGEN
            .iter()
            .filter(|sangen| **sangen != pair)
            .all(|sangen| kootsu_of(te, Hai::Ji(JiHai::Sangen(*sangen)))),
        _ => false,
    }
}

/// All three-tile groups of the candidate, called ones included. The pair
/// is judged separately.
fn hand_groups(te: &AgariTe, comb: &WinningCombination) -> Vec<Mentsu> {
    let mut groups = comb.mentsu.clone();
    for fuuro in &te.fuuro {
        groups.push(match fuuro {
            Fuuro::Chii { hai } => {
                let mut hai = *hai;
                hai.sort();
                Mentsu::Shuntsu(hai[0])
            }
            Fuuro::Pon { hai } | Fuuro::Ankan { hai } | Fuuro::Minkan { hai } => {
                Mentsu::Kootsu(*hai)
            }
        });
    }
    groups
}

fn chanta(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    let groups = hand_groups(te, comb);
    comb.toitsu.is_jihai_or_1_9()
        && groups
            .iter()
            .all(|g| g.tiles().iter().any(|h| h.is_jihai_or_1_9()))
        && te.all_hai().iter().any(|h| h.is_jihai())
        && groups.iter().any(|g| g.is_shuntsu())
}

fn junchan(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    let groups = hand_groups(te, comb);
    comb.toitsu.is_jihai_or_1_9()
        && groups
            .iter()
            .all(|g| g.tiles().iter().any(|h| h.is_jihai_or_1_9()))
        && te.all_hai().iter().all(|h| !h.is_jihai())
        && groups.iter().any(|g| g.is_shuntsu())
}

/// Every tile a terminal or honor, honors present. Valid over a standard
/// decomposition or the seven-pairs shape, so it stacks with chitoitsu; a
/// hand with neither shape does not qualify.
fn honroto(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    if comb.is_none() && !chitoitsu(te, comb) {
        return false;
    }
    let all = te.all_hai();
    all.iter().all(|h| h.is_jihai_or_1_9()) && all.iter().any(|h| h.is_jihai())
}

fn kantsu_count(te: &AgariTe) -> usize {
    te.fuuro.iter().filter(|f| f.is_kantsu()).count()
}

fn daisangen(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    comb.is_some()
        && SANGEN
            .iter()
            .all(|sangen| kootsu_of(te, Hai::Ji(JiHai::Sangen(*sangen))))
}

fn shosushi(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    let comb = match comb {
        Some(comb) => comb,
        None => return false,
    };
    match comb.toitsu {
        Hai::Ji(JiHai::Fon(pair)) => {
            let all = te.all_hai();
            FON.iter().filter(|fon| **fon != pair).all(|fon| {
                all.iter()
                    .filter(|h| **h == Hai::Ji(JiHai::Fon(*fon)))
                    .count()
                    >= 3
            })
        }
        _ => false,
    }
}

fn daisushi(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    comb.is_some() && FON.iter().all(|fon| kootsu_of(te, Hai::Ji(JiHai::Fon(*fon))))
}

/// The nine-gates tenpai form: 1112345678999 of one suit, exactly.
fn pure_nine_form(tiles: &[Hai]) -> bool {
    if tiles.len() != 13 {
        return false;
    }
    let suu = match tiles[0] {
        Hai::Suu(SuuHai { suu, .. }) => suu,
        Hai::Ji(..) => return false,
    };
    let mut counts = [0usize; 9];
    for hai in tiles {
        match hai {
            Hai::Suu(SuuHai { suu: s, value }) if *s == suu => counts[*value as usize - 1] += 1,
            _ => return false,
        }
    }
    counts == [3, 1, 1, 1, 1, 1, 1, 1, 3]
}

/// Nine gates won from the pure nine-sided wait: removing the winning tile
/// leaves exactly the tenpai form.
fn churen_9(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    if comb.is_none() || !te.fuuro.is_empty() {
        return false;
    }
    let mut tiles = te.hai.clone();
    if let Some(pos) = tiles.iter().position(|h| *h == te.agarihai) {
        tiles.remove(pos);
    }
    tiles.sort();
    pure_nine_form(&tiles)
}

fn churen(te: &AgariTe, comb: Option<&WinningCombination>) -> bool {
    if comb.is_none() || !te.fuuro.is_empty() || te.hai.len() != 14 {
        return false;
    }
    let suu = match te.hai[0] {
        Hai::Suu(SuuHai { suu, .. }) => suu,
        Hai::Ji(..) => return false,
    };
    let mut counts = [0usize; 9];
    for hai in &te.hai {
        match hai {
            Hai::Suu(SuuHai { suu: s, value }) if *s == suu => counts[*value as usize - 1] += 1,
            _ => return false,
        }
    }
    counts[0] >= 3 && counts[8] >= 3 && counts[1..8].iter().all(|c| *c >= 1)
}

/// Thirteen orphans with the thirteen-sided wait: the winning tile
/// duplicates an orphan already held.
fn kokushi_13(te: &AgariTe) -> bool {
    te.fuuro.is_empty()
        && KOKUSHI_HAI.iter().all(|h| te.hai.contains(h))
        && te.count(te.agarihai) == 2
}
