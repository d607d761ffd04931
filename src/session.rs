//! One game from the free-play menu to a solved bomb
//!
//! The bomb is turned to each of its six sides: edges feed the bomb-wide
//! facts, faces have their modules classified and turned into solvers.
//! The back face is solved first since inspection ends on it.

use crate::config::GameSettings;
use crate::error::EngineError;
use crate::interaction::Interaction;
use crate::layout::{self, menu, ScreenPoint, BOMB_CENTER};
use crate::report::{scan_edge, Side};
use crate::solvers::{self, Solver};
use crate::Result;
use ktane_core::ModuleKind;
use ktane_cv::classify;
use ktane_cv::detection::indicator::read_indicators;
use ktane_cv::detection::serial::read_serial;
use ktane_cv::detection::Frame;
use ktane_cv::{Alphabet, Crop};
use tracing::{info, warn};

/// Seconds the bomb takes to drop onto the table after starting
const START_ANIMATION_SECS: f64 = 14.0;

pub struct Session {
    ctx: Interaction,
    /// What the menu currently shows
    settings: GameSettings,
    front: Vec<Option<Solver>>,
    back: Vec<Option<Solver>>,
}

impl Session {
    pub fn new(ctx: Interaction) -> Self {
        Self {
            ctx,
            settings: GameSettings::MENU,
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    pub fn ctx(&self) -> &Interaction {
        &self.ctx
    }

    pub fn ctx_mut(&mut self) -> &mut Interaction {
        &mut self.ctx
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn front(&self) -> &[Option<Solver>] {
        &self.front
    }

    pub fn back(&self) -> &[Option<Solver>] {
        &self.back
    }

    /// Play one game with the configured settings.
    pub fn run(&mut self) -> Result<()> {
        let settings = self.ctx.config().settings;
        self.ctx.slp_for(2.0);
        self.open_free_play();
        self.apply_settings(settings);
        self.start_game()
    }

    pub fn open_free_play(&mut self) {
        self.ctx.mov(menu::FREE_PLAY).ldn().lup().slp_for(0.5);
    }

    /// Step the free-play menu from its current values to `target`.
    pub fn apply_settings(&mut self, target: GameSettings) {
        let current = self.settings;
        change_range_setting(&mut self.ctx, menu::TIME_ARROWS, current.time_limit, target.time_limit);
        change_range_setting(&mut self.ctx, menu::MODULE_ARROWS, current.module_count, target.module_count);
        if current.needy != target.needy {
            self.ctx.click_at(menu::NEEDY_TOGGLE);
        }
        if current.hardcore != target.hardcore {
            self.ctx.click_at(menu::HARDCORE_TOGGLE);
        }
        info!(?target, "settings applied");
        self.settings = target;
    }

    pub fn start_game(&mut self) -> Result<()> {
        self.ctx.facts = Default::default();
        self.front.clear();
        self.back.clear();

        self.ctx.mov(menu::START).ldn().lup().slp_for(START_ANIMATION_SECS);
        self.inspect_bomb()?;
        self.solve_bomb()
    }

    /// Turn the bomb to every side, ending with the back face in view.
    pub fn inspect_bomb(&mut self) -> Result<()> {
        let center = BOMB_CENTER;
        let (cx, cy) = center;

        self.ctx.click_at(center);
        self.ctx.mov(center).rdn().slp();
        self.ctx.mov((cx, 880)).slp_for(0.75);
        self.inspect_side(Side::Top)?;

        self.ctx.mov((cx, 200)).slp_for(0.5).rup();
        self.inspect_side(Side::Bottom)?;

        self.ctx.rdn().rup().slp();
        self.ctx.click_at(center);
        self.ctx.mov(layout::parking_spot(0)).slp_for(1.25);
        self.inspect_side(Side::Front)?;

        self.ctx.mov(center).rdn().slp();
        self.ctx.mov((cx + 255, cy)).slp_for(0.5).rup();
        self.inspect_side(Side::Left)?;

        self.ctx.rdn().rup().slp();
        self.ctx.click_at(center);
        self.ctx.rdn().slp();
        self.ctx.mov((cx - 265, cy)).slp_for(1.25);
        self.inspect_side(Side::Right)?;

        self.ctx.mov((cx - 400, cy)).rup().slp();
        self.ctx.rdn().rup().slp();
        self.ctx.click_at(center);
        self.ctx.mov(layout::parking_spot(0)).slp_for(1.25);
        self.inspect_side(Side::Back)?;

        info!(facts = ?self.ctx.facts(), "bomb inspected");
        Ok(())
    }

    /// Solve the back face, then flip the bomb and solve the front.
    pub fn solve_bomb(&mut self) -> Result<()> {
        solve_modules(&mut self.ctx, &mut self.back)?;

        let (cx, cy) = BOMB_CENTER;
        self.ctx.mov(BOMB_CENTER).rdn().slp();
        self.ctx.mov((cx + 400, cy)).slp_for(0.5).rup().slp();
        self.ctx.rdn().rup().slp_for(0.1);
        self.ctx.mov(BOMB_CENTER).ldn().lup().slp_for(1.5);

        solve_modules(&mut self.ctx, &mut self.front)
    }

    /// Read whatever the side currently in view has to offer.
    pub fn inspect_side(&mut self, side: Side) -> Result<()> {
        let screen = Frame::new(self.ctx.grab_screen()?);
        match side {
            Side::Front => self.front = inspect_face(&mut self.ctx, &screen)?,
            Side::Back => self.back = inspect_face(&mut self.ctx, &screen)?,
            _ => inspect_edge(&mut self.ctx, &screen, side)?,
        }
        Ok(())
    }
}

/// Click an arrow until a range setting moves from `current` to `target`.
fn change_range_setting(ctx: &mut Interaction, arrows: [ScreenPoint; 2], current: usize, target: usize) {
    if current == target {
        return;
    }
    ctx.mov(arrows[usize::from(target > current)]);
    for _ in 0..current.abs_diff(target) {
        ctx.ldn().lup().slp();
    }
}

fn inspect_edge(ctx: &mut Interaction, screen: &Frame, side: Side) -> Result<()> {
    let scan = scan_edge(screen, side);
    let Some(upright) = scan.upright else {
        warn!(?side, "no side border found, skipping edge");
        return Ok(());
    };
    ctx.facts.batteries += scan.report.batteries;
    ctx.facts.parallel_ports += scan.report.parallel_ports;

    let indicators = read_indicators(&upright, ctx.classifier())?;
    let serial = if ctx.facts.serial.is_none() {
        read_serial(&upright, ctx.classifier())?
    } else {
        None
    };
    ctx.facts.indicators.extend(indicators);
    if let Some(serial) = serial {
        info!(%serial, "serial number read");
        ctx.facts.record_serial(serial);
    }
    Ok(())
}

/// Classify every board slot of the face in view and build its solvers.
fn inspect_face(ctx: &mut Interaction, screen: &Frame) -> Result<Vec<Option<Solver>>> {
    let slots: Vec<Frame> = layout::MODULE_BBOXES.iter().map(|&bbox| screen.crop(bbox)).collect();
    let crops: Vec<Crop> = slots.iter().map(|slot| Crop::Color(slot.rgb.clone())).collect();
    let labels = classify::classify_checked(ctx.classifier(), Alphabet::ModuleKind, &crops)?;

    let mut face = Vec::with_capacity(slots.len());
    for (position, (slot, label)) in slots.iter().zip(labels).enumerate() {
        let kind = ModuleKind::from_label(label).ok_or(EngineError::UnknownLabel {
            what: "module kind",
            label,
        })?;
        if kind == ModuleKind::Timer {
            ctx.facts.timer_position = position;
        }
        info!(position, module = %kind, "module found");
        face.push(solvers::build(kind, position, slot, ctx.classifier())?);
    }
    Ok(face)
}

/// Zoom into each module with a solver, solve it and zoom back out.
pub fn solve_modules(ctx: &mut Interaction, face: &mut [Option<Solver>]) -> Result<()> {
    for (slot, solver) in face.iter_mut().enumerate() {
        let Some(solver) = solver else { continue };
        ctx.click_at(layout::MODULE_SPOTS[slot]);
        ctx.mov(layout::parking_spot(slot)).slp_for(0.75);
        solver.solve(ctx)?;
        ctx.rdn().rup().slp_for(1.0);
    }
    Ok(())
}
