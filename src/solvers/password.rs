//! Password: scroll every spinner to collect candidate letters until one
//! word remains, then spin the columns back onto it.

use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::ScreenPoint;
use crate::Result;
use ktane_core::rules::password::{PasswordColumns, COLUMNS, MAX_REVEALS};
use ktane_core::ModuleKind;
use ktane_cv::classify;
use ktane_cv::detection::password::detect_password;
use ktane_cv::detection::Frame;
use ktane_cv::traits::Classifier;
use ktane_cv::Alphabet;
use tracing::{debug, info, warn};

const UP_ARROWS: [ScreenPoint; COLUMNS] = [(890, 460), (932, 460), (972, 460), (1014, 460), (1055, 460)];
const DOWN_ARROWS: [ScreenPoint; COLUMNS] = [(890, 605), (932, 605), (972, 605), (1014, 605), (1055, 605)];
const SUBMIT: ScreenPoint = (960, 640);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSolver {
    pub columns: PasswordColumns,
}

fn read_letters(frame: &Frame, classifier: &dyn Classifier) -> Result<[char; COLUMNS]> {
    let glyphs = detect_password(frame)
        .ok_or(EngineError::detection(ModuleKind::Password, "display not found"))?;
    let text = classify::read_text(classifier, Alphabet::PasswordLetter, &glyphs)?;
    let letters: Vec<char> = text.chars().collect();
    <[char; COLUMNS]>::try_from(letters)
        .map_err(|_| EngineError::detection(ModuleKind::Password, "expected five letters").into())
}

impl PasswordSolver {
    pub fn detect(frame: &Frame, classifier: &dyn Classifier) -> Result<Self> {
        let letters = read_letters(frame, classifier)?;
        Ok(Self {
            columns: PasswordColumns::new(letters),
        })
    }

    /// Scroll every column one letter down.
    fn scroll_all(ctx: &mut Interaction) {
        ctx.mov(DOWN_ARROWS[0]);
        for &arrow in &DOWN_ARROWS[1..] {
            ctx.ldn().lup().slp().mov(arrow);
        }
        ctx.ldn().lup().slp();
    }

    pub fn solve(&mut self, ctx: &mut Interaction) -> Result<()> {
        for reveal in 1..=MAX_REVEALS {
            Self::scroll_all(ctx);
            let frame = ctx.grab_active_module()?;
            let letters = read_letters(&frame, ctx.classifier())?;
            self.columns.reveal(letters);

            let candidates = self.columns.candidates();
            debug!(reveal, ?candidates, "password candidates");
            let word = match candidates.as_slice() {
                [word] => *word,
                _ if reveal < MAX_REVEALS => continue,
                _ => break,
            };
            info!(word, "password found");

            let rotations = self.columns.rotations(word).ok_or(EngineError::detection(
                ModuleKind::Password,
                "word not spellable from the columns",
            ))?;
            for (column, clicks) in rotations.into_iter().enumerate() {
                if clicks == 0 {
                    continue;
                }
                let arrows = if clicks < 0 { &UP_ARROWS } else { &DOWN_ARROWS };
                ctx.mov(arrows[column]);
                for _ in 0..clicks.unsigned_abs() {
                    ctx.ldn().lup().slp();
                }
            }
            ctx.mov(SUBMIT).ldn().lup();
            return Ok(());
        }
        warn!(candidates = ?self.columns.candidates(), "password still ambiguous");
        Err(EngineError::detection(ModuleKind::Password, "no unique password").into())
    }
}
