// tests/core_tests.rs
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use ktane::io::{ManualClock, MouseButton, PointerAction, RecordingPointer, ScriptedCapture, ScriptedClassifier};
use ktane::layout::{self, ZOOMED_MODULE};
use ktane::solvers::{
    ButtonSolver, ComplicatedWiresSolver, KeypadSolver, MazeSolver, MemorySolver, MorseCodeSolver, PasswordSolver,
    SimonSaysSolver, WhosOnFirstSolver, WireSequencesSolver, WiresSolver,
};
use ktane::{solve_modules, EngineConfig, EngineError, GameSettings, Interaction, Session, Side, Solver};
use ktane_core::maze::{self, Direction, MazeGraph};
use ktane_core::rules::button::{ButtonColor, ButtonText};
use ktane_core::rules::complicated_wires::{ComplicatedWire, WireTint};
use ktane_core::rules::keypad::KeypadSymbol;
use ktane_core::rules::WireColor;
use ktane_core::{BombFacts, Indicator, ModuleKind, RuleError};
use ktane_cv::detection::maze::MazeReading;
use ktane_cv::detection::probes::{BUTTON_STRIP, MORSE_BLINKER};
use ktane_cv::detection::Frame;
use ktane_cv::{Alphabet, ImageUtils};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;
use std::time::Duration;

const BLACK: [u8; 3] = [0, 0, 0];
const GRAY: [u8; 3] = [150, 150, 150];

fn screen(color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(1920, 1080, Rgb(color))
}

fn fill(screen: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: [u8; 3]) {
    draw_filled_rect_mut(screen, Rect::at(x, y).of_size(w, h), Rgb(color));
}

/// Paint a rect given in zoomed-module coordinates.
fn fill_module(screen: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: [u8; 3]) {
    fill(screen, x + ZOOMED_MODULE.x, y + ZOOMED_MODULE.y, w, h, color);
}

fn rig(capture: ScriptedCapture, classifier: ScriptedClassifier, clock: ManualClock) -> (Interaction, RecordingPointer) {
    let pointer = RecordingPointer::new();
    let ctx = Interaction::new(
        Box::new(capture),
        Box::new(pointer.clone()),
        Box::new(clock),
        Box::new(classifier),
        EngineConfig::default(),
    );
    (ctx, pointer)
}

fn with_serial(ctx: &mut Interaction, serial: &str) {
    ctx.facts.record_serial(serial.to_string());
}

#[test]
fn test_menu_settings() {
    let (ctx, pointer) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    let mut session = Session::new(ctx);

    session.apply_settings(GameSettings::default());
    let mut expected = vec![(860, 315); 10];
    expected.extend([(860, 400); 9]);
    assert_eq!(pointer.left_clicks(), expected);
    assert_eq!(session.settings(), GameSettings::default());

    session.apply_settings(GameSettings {
        needy: true,
        ..GameSettings::MENU
    });
    let clicks = pointer.left_clicks();
    let back = &clicks[expected.len()..];
    assert_eq!(back.len(), 20);
    assert!(back[..10].iter().all(|&p| p == (720, 315)));
    assert!(back[10..19].iter().all(|&p| p == (720, 400)));
    assert_eq!(back[19], (750, 540));
}

#[test]
fn test_face_inspection() {
    let mut capture = ScriptedCapture::new();
    capture.push(screen(BLACK));
    let classifier = ScriptedClassifier::new().answer(Alphabet::ModuleKind, [3, 7, 14, 11, 8, 5]);
    let (ctx, _) = rig(capture, classifier, ManualClock::new());
    let mut session = Session::new(ctx);

    session.inspect_side(Side::Front).unwrap();
    let kinds: Vec<Option<ModuleKind>> = session
        .front()
        .iter()
        .map(|solver| solver.as_ref().map(Solver::kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            None,
            Some(ModuleKind::Memory),
            Some(ModuleKind::Wires),
            None,
            Some(ModuleKind::MorseCode),
            None,
        ]
    );
    assert_eq!(session.ctx().facts().timer_position, 3);
    assert!(session.back().is_empty());
}

#[test]
fn test_edge_without_border_is_skipped() {
    let mut capture = ScriptedCapture::new();
    capture.push(screen(BLACK));
    let (ctx, _) = rig(capture, ScriptedClassifier::new(), ManualClock::new());
    let mut session = Session::new(ctx);
    session.ctx_mut().facts.batteries = 2;

    session.inspect_side(Side::Left).unwrap();
    let expected = BombFacts {
        batteries: 2,
        ..BombFacts::default()
    };
    assert_eq!(session.ctx().facts(), &expected);
}

#[test]
fn test_capture_timeout_surfaces() {
    let (ctx, _) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    let mut session = Session::new(ctx);

    let err = session.inspect_side(Side::Top).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::CaptureTimeout(_))
    ));
}

#[test]
fn test_wires_cut_last_red() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut module = screen(GRAY);
    let colors = [[220, 30, 30], [220, 30, 30], [30, 30, 220], [220, 200, 20]];
    for (row, color) in colors.into_iter().enumerate() {
        let x = rng.gen_range(20..60);
        let width = rng.gen_range(150..200);
        fill_module(&mut module, x, 40 + 60 * row as i32, width, 12, color);
    }
    let overview = Frame::new(ImageUtils::crop(&module, ZOOMED_MODULE));
    let solver = WiresSolver::detect(&overview);
    assert_eq!(
        solver.colors,
        vec![WireColor::Red, WireColor::Red, WireColor::Blue, WireColor::Yellow]
    );

    // Without a serial the rule cannot be decided.
    let (mut ctx, _) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    let err = solver.solve(&mut ctx).unwrap_err();
    assert!(matches!(err.downcast_ref::<RuleError>(), Some(RuleError::MissingSerial)));

    let mut capture = ScriptedCapture::new();
    capture.push(module);
    let (mut ctx, pointer) = rig(capture, ScriptedClassifier::new(), ManualClock::new());
    with_serial(&mut ctx, "AB1CD3");
    solver.solve(&mut ctx).unwrap();

    // Odd serial and two reds: the last red, second from the top.
    let clicks = pointer.left_clicks();
    assert_eq!(clicks.len(), 1);
    let (x, y) = clicks[0];
    assert!((ZOOMED_MODULE.x..ZOOMED_MODULE.right()).contains(&x));
    assert!((ZOOMED_MODULE.y + 100..ZOOMED_MODULE.y + 112).contains(&y), "{y}");
}

fn arrow(direction: Direction) -> (i32, i32) {
    match direction {
        Direction::Left => (850, 535),
        Direction::Right => (1080, 535),
        Direction::Up => (970, 425),
        Direction::Down => (970, 650),
    }
}

#[test]
fn test_solve_modules_zooms_and_walks_maze() {
    let key = MazeGraph::all()[0].key;
    let reading = MazeReading { start: 0, finish: 35, key };
    let moves = maze::solve(key, 0, 35).unwrap();
    assert!(!moves.is_empty());

    let (mut ctx, pointer) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    let mut face = vec![None, None, None, None, None, Some(Solver::Maze(MazeSolver { reading }))];
    solve_modules(&mut ctx, &mut face).unwrap();

    let actions = pointer.actions();
    assert_eq!(
        actions[..4],
        [
            PointerAction::Move(1250, 680),
            PointerAction::Down(MouseButton::Left),
            PointerAction::Up(MouseButton::Left),
            PointerAction::Move(1720, 200),
        ]
    );
    assert_eq!(
        actions[actions.len() - 2..],
        [PointerAction::Down(MouseButton::Right), PointerAction::Up(MouseButton::Right)]
    );

    let mut expected = vec![(1250, 680)];
    expected.extend(moves.into_iter().map(arrow));
    assert_eq!(pointer.left_clicks(), expected);
}

/// Blinker states for a word sent twice, as `(lit, frames)` runs at 50ms
/// per frame.
fn morse_runs(code: &str, lead_dark: usize) -> Vec<(bool, usize)> {
    let mut runs = vec![(false, lead_dark)];
    let letters: Vec<&str> = code.split(' ').collect();
    for _ in 0..2 {
        for (li, letter) in letters.iter().enumerate() {
            for (si, symbol) in letter.chars().enumerate() {
                runs.push((true, if symbol == '.' { 6 } else { 20 }));
                let gap = if si + 1 < letter.len() {
                    6
                } else if li + 1 < letters.len() {
                    20
                } else {
                    50
                };
                runs.push((false, gap));
            }
        }
    }
    runs
}

#[test]
fn test_morse_dials_frequency() {
    let dark = Rc::new(screen(BLACK));
    let mut lit = screen(BLACK);
    fill_module(
        &mut lit,
        MORSE_BLINKER.x,
        MORSE_BLINKER.y,
        MORSE_BLINKER.width,
        MORSE_BLINKER.height,
        [240, 120, 20],
    );
    let lit = Rc::new(lit);

    let clock = ManualClock::new();
    let mut capture = ScriptedCapture::new().with_clock(clock.clone(), Duration::from_millis(50));
    // The first pulse is caught halfway and must be ignored.
    capture.repeat(&lit, 4);
    for (on, frames) in morse_runs("- .-. .. -.-. -.-", 10) {
        capture.repeat(if on { &lit } else { &dark }, frames);
    }
    let (mut ctx, pointer) = rig(capture, ScriptedClassifier::new(), clock);

    MorseCodeSolver.solve(&mut ctx).unwrap();
    // "trick" is the fourth frequency: three steps right, then transmit.
    assert_eq!(
        pointer.left_clicks(),
        vec![(1065, 560), (1065, 560), (1065, 560), (980, 625)]
    );
}

#[test]
fn test_button_tap() {
    let (mut ctx, pointer) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    ctx.facts.batteries = 2;

    ButtonSolver::new(ButtonColor::Blue, ButtonText::Detonate, 1)
        .solve(&mut ctx)
        .unwrap();
    assert_eq!(pointer.left_clicks(), vec![(950, 560)]);
}

#[test]
fn test_button_hold_needs_timer_region() {
    let (mut ctx, pointer) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    ctx.facts.timer_position = 2;

    let err = ButtonSolver::new(ButtonColor::Blue, ButtonText::Abort, 0)
        .solve(&mut ctx)
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::NoTimerRegion { timer: 2, button: 0 })
    ));
    assert!(pointer.actions().is_empty());
}

/// Seven-segment countdown painted in red at `(x, y)`.
fn paint_timer(screen: &mut RgbImage, x: i32, y: i32, digits: [u8; 4]) {
    const DIGIT_X: [i32; 4] = [0, 50, 115, 165];
    const COLON_X: i32 = 100;
    const SEGMENTS: [(i32, i32, u32, u32); 7] = [
        (10, 0, 24, 8),
        (36, 10, 8, 38),
        (36, 60, 8, 38),
        (10, 100, 24, 8),
        (0, 60, 8, 38),
        (0, 10, 8, 38),
        (10, 50, 24, 8),
    ];
    const PATTERNS: [&str; 10] = [
        "abcdef", "bc", "abdeg", "abcdg", "bcfg", "acdfg", "acdefg", "abc", "abcdefg", "abcdfg",
    ];
    const RED: [u8; 3] = [230, 20, 10];

    for (x0, digit) in DIGIT_X.iter().zip(digits) {
        for segment in PATTERNS[digit as usize].bytes() {
            let (dx, dy, w, h) = SEGMENTS[(segment - b'a') as usize];
            fill(screen, x + x0 + dx, y + dy, w, h, RED);
        }
    }
    fill(screen, x + COLON_X, y + 25, 12, 14, RED);
    fill(screen, x + COLON_X, y + 70, 12, 14, RED);
}

#[test]
fn test_button_hold_releases_on_digit() {
    let region = layout::timer_region(0, 1).unwrap();
    let mut strip = screen(BLACK);
    fill_module(&mut strip, BUTTON_STRIP.x, BUTTON_STRIP.y, BUTTON_STRIP.width, BUTTON_STRIP.height, [230, 230, 230]);
    let mut early = screen(BLACK);
    paint_timer(&mut early, region.x + 10, region.y + 5, [0, 0, 0, 0]);
    let mut release = screen(BLACK);
    paint_timer(&mut release, region.x + 10, region.y + 5, [0, 0, 1, 0]);

    let mut capture = ScriptedCapture::new();
    capture.push(screen(BLACK)).push(strip).push(early).push(release);
    let (mut ctx, pointer) = rig(capture, ScriptedClassifier::new(), ManualClock::new());
    ctx.facts.indicators.push(Indicator::new(true, "CAR"));
    ctx.facts.timer_position = 0;

    ButtonSolver::new(ButtonColor::White, ButtonText::Press, 1)
        .solve(&mut ctx)
        .unwrap();
    assert_eq!(
        pointer.actions(),
        vec![
            PointerAction::Move(950, 560),
            PointerAction::Down(MouseButton::Left),
            PointerAction::Up(MouseButton::Left),
        ]
    );
    // Released on the last frame, not on the all-zero countdown.
    assert!(ctx.grab_screen().is_err());
}

/// Memory module: display digit above four buttons, each with a dark label
fn memory_screen() -> RgbImage {
    const PANEL: [u8; 3] = [235, 230, 220];
    let mut screen = screen([60, 90, 200]);
    fill_module(&mut screen, 100, 20, 30, 50, PANEL);
    for slot in 0..4 {
        let x = 20 + 60 * slot;
        fill_module(&mut screen, x, 150, 40, 60, PANEL);
        fill_module(&mut screen, x + 15, 165, 10, 30, [25, 25, 25]);
    }
    screen
}

#[test]
fn test_memory_five_stages() {
    let frame = Rc::new(memory_screen());
    let mut capture = ScriptedCapture::new();
    capture.repeat(&frame, 5);
    // Display first, then the buttons left to right, each as digit - 1.
    let classifier = ScriptedClassifier::new()
        .answer(Alphabet::MemoryDigit, [2, 1, 3, 0, 2])
        .answer(Alphabet::MemoryDigit, [0, 3, 2, 1, 0])
        .answer(Alphabet::MemoryDigit, [1, 2, 0, 3, 1])
        .answer(Alphabet::MemoryDigit, [3, 0, 1, 2, 3])
        .answer(Alphabet::MemoryDigit, [2, 1, 2, 0, 3]);
    let (mut ctx, pointer) = rig(capture, classifier, ManualClock::new());

    let mut solver = MemorySolver::new();
    solver.solve(&mut ctx).unwrap();
    assert!(solver.history.is_complete());
    assert_eq!(
        pointer.left_clicks(),
        vec![(970, 600), (885, 600), (925, 600), (885, 600), (970, 600)]
    );
}

#[test]
fn test_wire_sequence_panels() {
    let frame = Rc::new(screen(GRAY));
    let mut capture = ScriptedCapture::new();
    capture.repeat(&frame, 4);
    let classifier = ScriptedClassifier::new()
        .answer(Alphabet::SequenceTerminal, [3, 2, 1])
        .answer(Alphabet::SequenceColor, [3, 2, 1])
        .answer(Alphabet::SequenceTerminal, [0, 0, 0])
        .answer(Alphabet::SequenceColor, [0, 0, 0])
        .answer(Alphabet::SequenceTerminal, [1, 0, 0])
        .answer(Alphabet::SequenceColor, [3, 0, 0])
        .answer(Alphabet::SequenceTerminal, [1, 0, 0])
        .answer(Alphabet::SequenceColor, [3, 0, 0]);
    let (mut ctx, pointer) = rig(capture, classifier, ManualClock::new());

    let mut solver = WireSequencesSolver::new();
    solver.solve(&mut ctx).unwrap();
    // Red to C, blue to B and black are all first occurrences; the second
    // red (to A) is kept and the third (to A) is cut.
    assert_eq!(
        pointer.left_clicks(),
        vec![
            (910, 490),
            (910, 530),
            (910, 575),
            (950, 635),
            (950, 635),
            (950, 635),
            (910, 490),
            (950, 635),
        ]
    );
}

#[test]
fn test_simon_says_rounds() {
    use ktane_cv::detection::simon_says::SQUARES;

    let idle = Rc::new(screen(BLACK));
    let flash = |index: usize| {
        let mut frame = screen(BLACK);
        let bbox = SQUARES[index].1;
        fill_module(&mut frame, bbox.x, bbox.y, bbox.width, bbox.height, [250, 250, 250]);
        Rc::new(frame)
    };
    let blue = flash(0);
    let yellow = flash(3);
    let mut solved = screen(BLACK);
    fill_module(&mut solved, 244, 10, 32, 32, [250, 250, 250]);

    let mut capture = ScriptedCapture::new();
    capture
        .repeat(&idle, 2)
        .repeat(&blue, 1)
        .repeat(&idle, 2)
        .repeat(&blue, 2)
        .repeat(&idle, 2)
        .repeat(&yellow, 1)
        .repeat(&idle, 2)
        .push(solved);
    let (mut ctx, pointer) = rig(capture, ScriptedClassifier::new(), ManualClock::new());
    with_serial(&mut ctx, "AE3FG5");

    SimonSaysSolver.solve(&mut ctx).unwrap();
    // With a vowel and no strikes: blue answers red, yellow answers green.
    assert_eq!(pointer.left_clicks(), vec![(910, 516), (910, 516), (970, 574)]);
    assert!(ctx.grab_screen().is_err());
}

/// Password display with five dark letters, as seen when zoomed.
fn password_screen() -> Rc<RgbImage> {
    let mut screen = screen(BLACK);
    fill_module(&mut screen, 20, 20, 250, 80, [40, 200, 20]);
    for i in 0..5 {
        fill_module(&mut screen, 40 + 45 * i, 45, 12, 30, [10, 40, 10]);
    }
    Rc::new(screen)
}

/// Classifier labels for a row of capital letters.
fn letters(row: &str) -> Vec<usize> {
    row.bytes().map(|b| usize::from(b - b'A')).collect()
}

#[test]
fn test_password_spins_onto_unique_word() {
    let mut capture = ScriptedCapture::new();
    capture.repeat(&password_screen(), 3);
    let classifier = ScriptedClassifier::new()
        .answer(Alphabet::PasswordLetter, letters("ZHZRZ"))
        .answer(Alphabet::PasswordLetter, letters("WZZZE"))
        .answer(Alphabet::PasswordLetter, letters("ZZEZZ"));
    let (mut ctx, pointer) = rig(capture, classifier, ManualClock::new());

    let frame = ctx.grab_active_module().unwrap();
    let mut solver = PasswordSolver::detect(&frame, ctx.classifier()).unwrap();
    solver.solve(&mut ctx).unwrap();

    let down = [(890, 605), (932, 605), (972, 605), (1014, 605), (1055, 605)];
    let mut expected: Vec<(i32, i32)> = down.iter().chain(&down).copied().collect();
    // "where": w one scroll back, h and r two back, e current in the
    // middle column, e one back in the last.
    expected.extend([
        (890, 460),
        (932, 460),
        (932, 460),
        (1014, 460),
        (1014, 460),
        (1055, 460),
        (960, 640),
    ]);
    assert_eq!(pointer.left_clicks(), expected);
}

#[test]
fn test_password_ambiguous_is_not_submitted() {
    let mut capture = ScriptedCapture::new();
    capture.repeat(&password_screen(), 6);
    let mut classifier = ScriptedClassifier::new()
        .answer(Alphabet::PasswordLetter, letters("THERE"))
        .answer(Alphabet::PasswordLetter, letters("ZZZSZ"));
    for _ in 0..4 {
        classifier = classifier.answer(Alphabet::PasswordLetter, letters("ZZZZZ"));
    }
    let (mut ctx, pointer) = rig(capture, classifier, ManualClock::new());

    let frame = ctx.grab_active_module().unwrap();
    let mut solver = PasswordSolver::detect(&frame, ctx.classifier()).unwrap();
    let err = solver.solve(&mut ctx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::Detection {
            module: ModuleKind::Password,
            reason: "no unique password"
        })
    ));
    assert_eq!(solver.columns.candidates(), vec!["there", "these"]);

    // Five full scrolls and nothing else.
    let clicks = pointer.left_clicks();
    assert_eq!(clicks.len(), 25);
    assert!(clicks.iter().all(|&(_, y)| y == 605));
}

/// Who's on First: display word over two columns of three buttons, on a
/// lit casing.
fn whos_on_first_screen() -> Rc<RgbImage> {
    const PANEL: [u8; 3] = [235, 230, 220];
    let mut screen = screen([60, 90, 200]);
    fill_module(&mut screen, 120, 20, 140, 40, [60, 90, 100]);
    fill_module(&mut screen, 165, 32, 50, 16, [200, 230, 240]);
    for (x, y) in [(20, 100), (100, 100), (20, 150), (100, 150), (20, 200), (100, 200)] {
        fill_module(&mut screen, x, y, 60, 30, PANEL);
        fill_module(&mut screen, x + 10, y + 10, 30, 10, [25, 25, 25]);
    }
    Rc::new(screen)
}

#[test]
fn test_whos_on_first_three_steps() {
    let mut capture = ScriptedCapture::new();
    capture.repeat(&whos_on_first_screen(), 3);
    // Display label first, then the buttons in reading order.
    let classifier = ScriptedClassifier::new()
        // "yes" reads "middle"; of its list "ready" is on the panel first.
        .answer(Alphabet::WhosOnFirstWord, [40, 19, 5, 13, 21, 33, 11])
        // Blank display reads slot 4, "u", which ranks "sure" highest here.
        .answer(Alphabet::WhosOnFirstWord, [17, 41, 27, 4, 14, 32, 12])
        // "ur" reads "done", whose list starts with "sure".
        .answer(Alphabet::WhosOnFirstWord, [36, 4, 32, 36, 34, 27, 39]);
    let (mut ctx, pointer) = rig(capture, classifier, ManualClock::new());

    WhosOnFirstSolver.solve(&mut ctx).unwrap();
    assert_eq!(pointer.left_clicks(), vec![(995, 565), (995, 515), (910, 610)]);
    // Two step animations waited out.
    assert!(ctx.now() >= Duration::from_secs(7));
}

#[test]
fn test_keypad_press_order() {
    const KEY: [u8; 3] = [235, 230, 220];
    let mut frame = screen(BLACK);
    for (x, y) in [(20, 20), (110, 20), (20, 110), (110, 110)] {
        fill_module(&mut frame, x, y, 60, 60, KEY);
        fill_module(&mut frame, x + 20, y + 15, 14, 20, [30, 30, 30]);
    }
    let mut capture = ScriptedCapture::new();
    capture.push(frame);
    // LeftC, Balloon, SquidKnife, At: all in the first column.
    let classifier = ScriptedClassifier::new().answer(Alphabet::KeypadSymbol, [12, 2, 23, 1]);
    let (mut ctx, pointer) = rig(capture, classifier, ManualClock::new());

    let frame = ctx.grab_active_module().unwrap();
    let solver = KeypadSolver::detect(&frame, ctx.classifier()).unwrap();
    assert_eq!(
        solver.symbols,
        [KeypadSymbol::LeftC, KeypadSymbol::Balloon, KeypadSymbol::SquidKnife, KeypadSymbol::At]
    );
    solver.solve(&mut ctx).unwrap();
    assert_eq!(
        pointer.left_clicks(),
        vec![(1005, 510), (1005, 600), (905, 600), (905, 510)]
    );
}

#[test]
fn test_complicated_wires_cuts_by_bomb_facts() {
    let wire = |led, star, tint| ComplicatedWire { led, star, tint };
    let solver = ComplicatedWiresSolver {
        wires: vec![
            wire(false, false, Some(WireTint::White)),
            wire(false, true, Some(WireTint::Red)),
            wire(false, false, Some(WireTint::Blue)),
            wire(false, false, None),
            wire(true, true, Some(WireTint::White)),
            wire(false, true, Some(WireTint::BlueRed)),
        ],
    };
    let (mut ctx, pointer) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    with_serial(&mut ctx, "AB1CD4");
    ctx.facts.batteries = 2;

    solver.solve(&mut ctx).unwrap();
    // Blue cuts on the even serial, LED with star on two batteries; the
    // red-blue star needs a parallel port.
    assert_eq!(
        pointer.left_clicks(),
        vec![(873, 595), (909, 595), (951, 595), (1029, 595)]
    );

    let (mut ctx, pointer) = rig(ScriptedCapture::new(), ScriptedClassifier::new(), ManualClock::new());
    with_serial(&mut ctx, "AB1CD3");
    ctx.facts.batteries = 1;
    solver.solve(&mut ctx).unwrap();
    assert_eq!(pointer.left_clicks(), vec![(873, 595), (909, 595)]);
}
