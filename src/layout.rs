//! Screen layout of the game at 1920x1080
//!
//! Points are `(x, y)` screen pixels. Module-relative points are offsets
//! into [`ZOOMED_MODULE`].

use ktane_cv::BBox;

pub type ScreenPoint = (i32, i32);

/// Board slots of one bomb face, row-major from the top-left
pub const MODULE_BBOXES: [BBox; 6] = [
    BBox::new(560, 291, 262, 243),
    BBox::new(849, 291, 251, 243),
    BBox::new(1127, 291, 255, 243),
    BBox::new(545, 558, 272, 262),
    BBox::new(843, 558, 262, 262),
    BBox::new(1133, 558, 266, 262),
];

/// Where a module sits once zoomed in
pub const ZOOMED_MODULE: BBox = BBox::new(832, 387, 297, 293);

/// Click targets that zoom into each board slot
pub const MODULE_SPOTS: [ScreenPoint; 6] = [
    (695, 410),
    (970, 410),
    (1235, 410),
    (680, 680),
    (950, 680),
    (1250, 680),
];

pub const BOMB_CENTER: ScreenPoint = (960, 540);
/// Resting spot that keeps the cursor off the zoomed module
pub const POINTER_REST: ScreenPoint = (885, 400);

/// Cursor parked while a module is zoomed, away from the module itself
pub fn parking_spot(slot: usize) -> ScreenPoint {
    if slot == 5 {
        (1720, 200)
    } else {
        (200, 200)
    }
}

pub mod menu {
    use super::ScreenPoint;

    pub const FREE_PLAY: ScreenPoint = (500, 570);
    /// Decrease and increase arrows
    pub const TIME_ARROWS: [ScreenPoint; 2] = [(720, 315), (860, 315)];
    pub const MODULE_ARROWS: [ScreenPoint; 2] = [(720, 400), (860, 400)];
    pub const NEEDY_TOGGLE: ScreenPoint = (750, 540);
    pub const HARDCORE_TOGGLE: ScreenPoint = (750, 600);
    pub const START: ScreenPoint = (820, 750);
}

/// Translate a point inside the zoomed module to the screen.
pub fn to_screen((x, y): ScreenPoint) -> ScreenPoint {
    (x + ZOOMED_MODULE.x, y + ZOOMED_MODULE.y)
}

/// Timer digits as seen while a button module is zoomed, by timer slot and
/// button slot. The timer never sits in slots 2 or 5.
const TIMER_REGIONS: [Option<[Option<BBox>; 6]>; 6] = [
    Some([
        None,
        Some(BBox::new(535, 518, 228, 122)),
        Some(BBox::new(195, 518, 233, 123)),
        Some(BBox::new(877, 209, 216, 112)),
        Some(BBox::new(553, 209, 218, 112)),
        Some(BBox::new(227, 208, 223, 113)),
    ]),
    Some([
        Some(BBox::new(1207, 518, 227, 122)),
        None,
        Some(BBox::new(535, 518, 227, 122)),
        Some(BBox::new(1196, 209, 218, 112)),
        Some(BBox::new(877, 209, 214, 112)),
        Some(BBox::new(552, 209, 218, 112)),
    ]),
    None,
    Some([
        Some(BBox::new(870, 855, 234, 135)),
        Some(BBox::new(516, 855, 238, 134)),
        Some(BBox::new(160, 856, 245, 134)),
        None,
        Some(BBox::new(535, 518, 228, 122)),
        Some(BBox::new(195, 518, 233, 123)),
    ]),
    Some([
        Some(BBox::new(1218, 854, 238, 134)),
        Some(BBox::new(870, 855, 234, 135)),
        Some(BBox::new(515, 855, 239, 134)),
        Some(BBox::new(1207, 518, 227, 122)),
        None,
        Some(BBox::new(535, 518, 227, 122)),
    ]),
    None,
];

pub fn timer_region(timer_slot: usize, button_slot: usize) -> Option<BBox> {
    TIMER_REGIONS
        .get(timer_slot)
        .copied()
        .flatten()
        .and_then(|row| row.get(button_slot).copied().flatten())
}
