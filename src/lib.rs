//! Evaluation of finished riichi mahjong hands.
//!
//! Given the fourteen tiles of a winning hand (calls included), the winning
//! tile and the table context, [`AgariTe::evaluate`] finds every scoring
//! pattern (yaku) the hand satisfies and [`total_fan`] sums their value.
//!
//! Tiles are written with the Unicode mahjong block, so hands can be built
//! straight from strings:
//!
//! ```
//! use agari::{AgariTe, WinningMethod};
//! use agari::tiles::{Fon, Hai};
//!
//! let hai: Vec<Hai> = "🀇🀈🀉🀊🀋🀌🀍🀎🀏🀀🀀🀀🀡🀡"
//!     .chars()
//!     .map(|c| c.to_string().parse())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! let te = AgariTe::new(
//!     hai,
//!     vec![],
//!     "🀏".parse().unwrap(),
//!     WinningMethod::Ron,
//!     Fon::Nan,
//!     Fon::Ton,
//! );
//! let yaku = te.evaluate().unwrap();
//! assert_eq!(yaku.len(), 2); // field wind + pure straight
//! ```

pub mod decompose;
pub mod te;
pub mod tiles;
pub mod yaku;

pub use te::{AgariTe, AgariTeError, Fuuro, WinningMethod};
pub use yaku::{total_fan, Yaku, YakuValue};
