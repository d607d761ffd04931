//! Complicated wires: LEDs on top, star patches at the bottom and up to six
//! plain or striped wires between them.

use crate::bbox::BBox;
use crate::contour::Contour;
use crate::utils::image::HsvImage;
use crate::utils::mask::{ColorRange, Kernel, MaskOps};
use image::GrayImage;
use ktane_core::rules::{ComplicatedWire, WireTint};

const STAR_BACKGROUND: ColorRange = ColorRange::new([14, 87, 102], [26, 255, 199]);
const LIT_LED: ColorRange = ColorRange::new([0, 57, 231], [33, 104, 255]);
const UNLIT_LED: ColorRange = ColorRange::new([0, 78, 11], [66, 109, 31]);
const RED_WIRE: ColorRange = ColorRange::new([0, 194, 117], [12, 255, 255]);
const BLUE_WIRE: ColorRange = ColorRange::new([103, 146, 89], [121, 255, 255]);
const WHITE_WIRE: ColorRange = ColorRange::new([0, 0, 136], [32, 63, 255]);
const RED_MIX: ColorRange = ColorRange::new([136, 132, 75], [179, 255, 255]);

const SLOTS: usize = 6;
/// A star patch covers less of its hull than a plain one.
const STAR_FILL: f64 = 0.9;
const LIT_LED_AREA: f64 = 50.0;
const UNLIT_LED_AREA: f64 = 15.0;
const LED_ROW_TOLERANCE: f64 = 5.0;
const WIRE_AREA: f64 = 100.0;
const WIRE_LENGTH: i32 = 100;
const WIRE_TO_STAR: f64 = 16.0;

/// Star flag and patch box per slot, left to right
pub fn detect_stars(hsv: &HsvImage) -> Vec<(bool, BBox)> {
    let mask = STAR_BACKGROUND.segment(hsv);
    let dilated = MaskOps::dilate(&mask, Kernel::K5);
    let mut patches = Contour::largest(Contour::external(&dilated), SLOTS);
    Contour::sort_by_x(&mut patches);

    patches
        .iter()
        .map(|patch| {
            let bbox = patch.bbox();
            let star = patch.crop_masked(&mask);
            let outline: Vec<_> = Contour::external(&star)
                .into_iter()
                .flat_map(|c| c.points)
                .collect();
            let hull = Contour::new(outline).hull_area();
            let has_star = hull > 0.0 && (MaskOps::count_nonzero(&star) as f64) / hull < STAR_FILL;
            (has_star, bbox)
        })
        .collect()
}

/// LED states left to right; all off when no LED is lit
pub fn detect_leds(hsv: &HsvImage) -> Vec<bool> {
    let lit: Vec<(f64, f64)> =
        Contour::filter_by_area(Contour::external(&LIT_LED.segment(hsv)), LIT_LED_AREA)
            .iter()
            .filter_map(Contour::centroid)
            .collect();
    if lit.is_empty() {
        return vec![false; SLOTS];
    }

    let unlit_mask = MaskOps::close(&UNLIT_LED.segment(hsv), Kernel::K5);
    let unlit = Contour::filter_by_area(Contour::external(&unlit_mask), UNLIT_LED_AREA);

    let row = lit.iter().map(|c| c.1).sum::<f64>() / lit.len() as f64;
    let mut leds: Vec<(bool, f64)> = lit.iter().map(|c| (true, c.0)).collect();
    leds.extend(
        unlit
            .iter()
            .filter_map(Contour::centroid)
            .filter(|c| (c.1 - row).abs() < LED_ROW_TOLERANCE)
            .map(|c| (false, c.0)),
    );
    leds.sort_by(|a, b| a.1.total_cmp(&b.1));
    leds.into_iter().map(|(on, _)| on).collect()
}

fn is_wire(contour: &Contour) -> bool {
    let bbox = contour.bbox();
    contour.area() >= WIRE_AREA && bbox.height as i32 - 1 >= WIRE_LENGTH
}

/// Whole wires of one color, and the mask with those wires removed so only
/// stripes of mixed wires remain.
fn solid_wires(mask: GrayImage) -> (Vec<Contour>, GrayImage) {
    let wires: Vec<Contour> = Contour::external(&mask).into_iter().filter(is_wire).collect();
    let mut covered = GrayImage::new(mask.width(), mask.height());
    for wire in &wires {
        covered = MaskOps::union(&covered, &wire.fill(mask.width(), mask.height(), (0, 0)));
    }
    (wires, MaskOps::subtract(&mask, &covered))
}

fn striped_wires(a: &GrayImage, b: &GrayImage) -> Vec<Contour> {
    let mask = MaskOps::close(&MaskOps::union(a, b), Kernel::K3);
    Contour::external(&mask).into_iter().filter(is_wire).collect()
}

/// Every wire with its tint, left to right
pub fn detect_tints(hsv: &HsvImage) -> Vec<(WireTint, Contour)> {
    let red = Contour::filter_by_area(Contour::external(&RED_WIRE.segment(hsv)), WIRE_AREA);
    let (blue, blue_rest) = solid_wires(BLUE_WIRE.segment(hsv));
    let (white, white_rest) = solid_wires(WHITE_WIRE.segment(hsv));
    let red_mix = RED_MIX.segment(hsv);

    let groups = [
        (WireTint::Red, red),
        (WireTint::Blue, blue),
        (WireTint::White, white),
        (WireTint::BlueWhite, striped_wires(&blue_rest, &white_rest)),
        (WireTint::RedWhite, striped_wires(&red_mix, &white_rest)),
        (WireTint::BlueRed, striped_wires(&blue_rest, &red_mix)),
    ];
    let mut wires: Vec<(WireTint, Contour)> = groups
        .into_iter()
        .flat_map(|(tint, contours)| contours.into_iter().map(move |c| (tint, c)))
        .collect();
    wires.sort_by_key(|(_, c)| c.min_x());
    wires
}

/// Pair stars, LEDs and wires into slots.
///
/// Wires are consumed greedily: a slot takes the left-most remaining wire
/// when the wire ends under the middle of its star patch.
pub fn detect_complicated_wires(hsv: &HsvImage) -> Vec<ComplicatedWire> {
    let stars = detect_stars(hsv);
    let leds = detect_leds(hsv);
    let mut wires = detect_tints(hsv).into_iter().peekable();

    stars
        .into_iter()
        .zip(leds)
        .map(|((star, bbox), led)| {
            let center = f64::from(bbox.x) + f64::from(bbox.width) / 2.0;
            let ends_here = wires
                .peek()
                .and_then(|(_, c)| c.lowest_point())
                .is_some_and(|p| (center - f64::from(p.x)).abs() < WIRE_TO_STAR);
            let tint = if ends_here {
                wires.next().map(|(tint, _)| tint)
            } else {
                None
            };
            ComplicatedWire { led, star, tint }
        })
        .collect()
}
