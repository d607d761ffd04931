use crate::error::RuleError;
use serde::{Deserialize, Serialize};

/// Keypad glyphs, in classifier label order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadSymbol {
    Ae,
    At,
    Balloon,
    Bt,
    Copyright,
    Cursive,
    DoubleK,
    Dragon,
    Euro,
    FilledStar,
    HollowStar,
    HookN,
    LeftC,
    MeltedThree,
    NWithHat,
    Omega,
    Paragraph,
    Pitchfork,
    Pumpkin,
    QuestionMark,
    RightC,
    Six,
    SmileyFace,
    SquidKnife,
    SquigglyN,
    Tracks,
    UpsideDownY,
}

impl KeypadSymbol {
    pub const ALL: [KeypadSymbol; 27] = {
        use KeypadSymbol::*;
        [
            Ae, At, Balloon, Bt, Copyright, Cursive, DoubleK, Dragon, Euro,
            FilledStar, HollowStar, HookN, LeftC, MeltedThree, NWithHat, Omega,
            Paragraph, Pitchfork, Pumpkin, QuestionMark, RightC, Six, SmileyFace,
            SquidKnife, SquigglyN, Tracks, UpsideDownY,
        ]
    };

    pub fn from_label(label: usize) -> Option<Self> {
        Self::ALL.get(label).copied()
    }
}

const COLUMNS: [[KeypadSymbol; 7]; 6] = {
    use KeypadSymbol::*;
    [
        [Balloon, At, UpsideDownY, SquigglyN, SquidKnife, HookN, LeftC],
        [Euro, Balloon, LeftC, Cursive, HollowStar, HookN, QuestionMark],
        [Copyright, Pumpkin, Cursive, DoubleK, MeltedThree, UpsideDownY, HollowStar],
        [Six, Paragraph, Bt, SquidKnife, DoubleK, QuestionMark, SmileyFace],
        [Pitchfork, SmileyFace, Bt, RightC, Paragraph, Dragon, FilledStar],
        [Six, Euro, Tracks, Ae, Pitchfork, NWithHat, Omega],
    ]
};

/// Button slots (top-left, top-right, bottom-left, bottom-right) in the
/// order their symbols appear in the first column containing all four.
pub fn press_order(symbols: &[KeypadSymbol; 4]) -> Result<[usize; 4], RuleError> {
    let (column, ranks) = COLUMNS
        .iter()
        .find_map(|column| {
            let mut ranks = [0; 4];
            for (rank, symbol) in ranks.iter_mut().zip(symbols) {
                *rank = column.iter().position(|s| s == symbol)?;
            }
            Some((column, ranks))
        })
        .ok_or_else(|| RuleError::NoKeypadColumn(format!("{symbols:?}")))?;

    tracing::debug!(?column, "keypad column selected");

    let mut order = [0, 1, 2, 3];
    order.sort_by_key(|&slot| ranks[slot]);
    Ok(order)
}
