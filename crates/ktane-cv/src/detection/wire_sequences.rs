//! Wire sequence panels: three wire rows, each classified for its color and
//! the terminal it runs to.

use super::Frame;
use crate::Result;
use crate::bbox::BBox;
use crate::classify::{self, Alphabet, Crop};
use crate::traits::Classifier;
use crate::utils::image::ImageUtils;
use image::RgbImage;
use ktane_core::rules::{SequenceColor, SequenceWire, Terminal};

/// Module-relative y of each wire's left plug
pub const WIRE_ROWS: [i32; 3] = [103, 143, 188];
const BAND_HEIGHT: u32 = 40;

/// One horizontal band per wire row
pub fn panel_slots(frame: &Frame) -> [RgbImage; 3] {
    let width = frame.rgb.width();
    WIRE_ROWS.map(|y| {
        let band = BBox::new(0, y - BAND_HEIGHT as i32 / 2, width, BAND_HEIGHT);
        ImageUtils::crop(&frame.rgb, band)
    })
}

/// Wires of the current panel; `None` for an empty row
pub fn read_panel(frame: &Frame, classifier: &dyn Classifier) -> Result<[Option<SequenceWire>; 3]> {
    let crops: Vec<Crop> = panel_slots(frame).into_iter().map(Crop::Color).collect();
    let terminals = classify::classify_checked(classifier, Alphabet::SequenceTerminal, &crops)?;
    let colors = classify::classify_checked(classifier, Alphabet::SequenceColor, &crops)?;

    let mut wires = [None; 3];
    for (slot, (&terminal, &color)) in wires.iter_mut().zip(terminals.iter().zip(&colors)) {
        *slot = Terminal::from_label(terminal)
            .zip(SequenceColor::from_label(color))
            .map(|(terminal, color)| SequenceWire { color, terminal });
    }
    Ok(wires)
}
