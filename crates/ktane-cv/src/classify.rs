//! Label sets understood by the image classifier and the crops fed to it
//!
//! The classifier itself is an injected collaborator (see
//! [`crate::traits::Classifier`]). This module owns what goes in and checks
//! what comes out.

use crate::Result;
use crate::error::DetectionError;
use crate::traits::Classifier;
use crate::utils::image::ImageUtils;
use image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph size for most symbol alphabets
pub const GLYPH_SIZE: (u32, u32) = (64, 64);
/// Who's on first words are wide
pub const WIDE_GLYPH_SIZE: (u32, u32) = (128, 64);

pub const INDICATOR_LETTERS: &str = "ABCDFGIKLMNOQRST";
pub const SERIAL_SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNPQRSTUVWXZ";
pub const PASSWORD_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alphabet {
    ModuleKind,
    IndicatorLetter,
    SerialSymbol,
    KeypadSymbol,
    MemoryDigit,
    PasswordLetter,
    WhosOnFirstWord,
    ButtonColor,
    ButtonText,
    SequenceTerminal,
    SequenceColor,
}

impl Alphabet {
    /// Number of distinct labels
    pub fn size(self) -> usize {
        match self {
            Alphabet::ModuleKind => 16,
            Alphabet::IndicatorLetter => INDICATOR_LETTERS.len(),
            Alphabet::SerialSymbol => SERIAL_SYMBOLS.len(),
            Alphabet::KeypadSymbol => 27,
            Alphabet::MemoryDigit => 4,
            Alphabet::PasswordLetter => PASSWORD_LETTERS.len(),
            Alphabet::WhosOnFirstWord => 45,
            Alphabet::ButtonColor
            | Alphabet::ButtonText
            | Alphabet::SequenceTerminal
            | Alphabet::SequenceColor => 4,
        }
    }

    /// Character spelled by each label, for the letter alphabets
    pub fn letters(self) -> Option<&'static str> {
        match self {
            Alphabet::IndicatorLetter => Some(INDICATOR_LETTERS),
            Alphabet::SerialSymbol => Some(SERIAL_SYMBOLS),
            Alphabet::PasswordLetter => Some(PASSWORD_LETTERS),
            _ => None,
        }
    }

    /// Size glyph masks are padded to, `None` for color crops
    pub fn glyph_size(self) -> Option<(u32, u32)> {
        match self {
            Alphabet::ModuleKind | Alphabet::ButtonColor => None,
            Alphabet::WhosOnFirstWord => Some(WIDE_GLYPH_SIZE),
            _ => Some(GLYPH_SIZE),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Alphabet::ModuleKind => "module kind",
            Alphabet::IndicatorLetter => "indicator letter",
            Alphabet::SerialSymbol => "serial symbol",
            Alphabet::KeypadSymbol => "keypad symbol",
            Alphabet::MemoryDigit => "memory digit",
            Alphabet::PasswordLetter => "password letter",
            Alphabet::WhosOnFirstWord => "who's on first word",
            Alphabet::ButtonColor => "button color",
            Alphabet::ButtonText => "button text",
            Alphabet::SequenceTerminal => "wire sequence terminal",
            Alphabet::SequenceColor => "wire sequence color",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Image handed to the classifier
#[derive(Debug, Clone, PartialEq)]
pub enum Crop {
    /// Binary glyph, already fit to the alphabet's glyph size
    Glyph(GrayImage),
    /// Raw color region
    Color(RgbImage),
}

impl Crop {
    /// Fit a binary glyph to the size the alphabet expects
    pub fn glyph(mask: &GrayImage, alphabet: Alphabet) -> Self {
        match alphabet.glyph_size() {
            Some((w, h)) => Crop::Glyph(ImageUtils::fit_image_size(mask, w, h)),
            None => Crop::Glyph(mask.clone()),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Crop::Glyph(img) => img.dimensions(),
            Crop::Color(img) => img.dimensions(),
        }
    }
}

/// Run the classifier and check it answered once per crop within range.
pub fn classify_checked(
    classifier: &dyn Classifier,
    alphabet: Alphabet,
    crops: &[Crop],
) -> Result<Vec<usize>> {
    if crops.is_empty() {
        return Ok(Vec::new());
    }
    let labels = classifier.classify(alphabet, crops)?;
    if labels.len() != crops.len() {
        return Err(DetectionError::LabelCount {
            alphabet,
            expected: crops.len(),
            got: labels.len(),
        }
        .into());
    }
    if let Some(&label) = labels.iter().find(|&&l| l >= alphabet.size()) {
        return Err(DetectionError::LabelOutOfRange { alphabet, label }.into());
    }
    Ok(labels)
}

/// Classify glyph masks of a letter alphabet and spell the result.
pub fn read_text(
    classifier: &dyn Classifier,
    alphabet: Alphabet,
    glyphs: &[GrayImage],
) -> Result<String> {
    let crops: Vec<Crop> = glyphs.iter().map(|g| Crop::glyph(g, alphabet)).collect();
    let labels = classify_checked(classifier, alphabet, &crops)?;
    let letters = alphabet.letters().unwrap_or_default().as_bytes();
    Ok(labels
        .into_iter()
        .filter_map(|l| letters.get(l).map(|&b| char::from(b)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<usize>);

    impl Classifier for Fixed {
        fn classify(&self, _alphabet: Alphabet, _crops: &[Crop]) -> Result<Vec<usize>> {
            Ok(self.0.clone())
        }
    }

    fn glyphs(n: usize) -> Vec<GrayImage> {
        vec![GrayImage::new(10, 20); n]
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::IndicatorLetter.size(), 16);
        assert_eq!(Alphabet::SerialSymbol.size(), 34);
        assert_eq!(Alphabet::PasswordLetter.size(), 26);
        assert_eq!(Alphabet::WhosOnFirstWord.glyph_size(), Some((128, 64)));
        assert_eq!(Alphabet::ModuleKind.glyph_size(), None);
    }

    #[test]
    fn test_glyphs_are_fit() {
        let crop = Crop::glyph(&GrayImage::new(10, 20), Alphabet::KeypadSymbol);
        assert_eq!(crop.dimensions(), (64, 64));
    }

    #[test]
    fn test_read_text_spells_labels() {
        let classifier = Fixed(vec![4, 13, 7]);
        let text = read_text(&classifier, Alphabet::IndicatorLetter, &glyphs(3)).unwrap();
        assert_eq!(text, "FRK");
    }

    #[test]
    fn test_checked_rejects_bad_answers() {
        let short = Fixed(vec![1]);
        let err = read_text(&short, Alphabet::SerialSymbol, &glyphs(2)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DetectionError>(),
            Some(&DetectionError::LabelCount {
                alphabet: Alphabet::SerialSymbol,
                expected: 2,
                got: 1
            })
        );

        let wild = Fixed(vec![40]);
        let err = read_text(&wild, Alphabet::SerialSymbol, &glyphs(1)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DetectionError>(),
            Some(DetectionError::LabelOutOfRange { label: 40, .. })
        ));
    }
}
