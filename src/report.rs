//! Widget scan of one bomb edge
//!
//! Batteries and ports are counted in the edge as seen; indicators and the
//! serial sticker are only readable once the edge is turned upright.

use ktane_cv::detection::edge::{count_batteries, count_parallel_ports, detect_side_border};
use ktane_cv::detection::indicator::detect_indicators;
use ktane_cv::detection::serial::detect_serial;
use ktane_cv::detection::Frame;
use ktane_cv::utils::Rotation;
use ktane_cv::BBox;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn is_face(self) -> bool {
        matches!(self, Side::Front | Side::Back)
    }

    /// Turn that brings this edge's widgets upright
    pub fn rotation(self) -> Rotation {
        match self {
            Side::Left => Rotation::CounterClockwise,
            Side::Right => Rotation::Clockwise,
            Side::Top => Rotation::HalfTurn,
            Side::Front | Side::Back | Side::Bottom => Rotation::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeReport {
    pub side: Side,
    /// Edge between its casing markers, in screen pixels
    pub border: Option<BBox>,
    pub batteries: u32,
    pub parallel_ports: u32,
    /// Lit state of each indicator found, left to right once upright
    pub indicators: Vec<bool>,
    pub serial_visible: bool,
}

#[derive(Debug, Clone)]
pub struct EdgeScan {
    pub report: EdgeReport,
    /// The edge crop turned upright, `None` when no border was found
    pub upright: Option<Frame>,
}

/// Scan a full screenshot showing one edge of the bomb.
pub fn scan_edge(screen: &Frame, side: Side) -> EdgeScan {
    let mut report = EdgeReport {
        side,
        border: detect_side_border(&screen.hsv),
        batteries: 0,
        parallel_ports: 0,
        indicators: Vec::new(),
        serial_visible: false,
    };
    let Some(border) = report.border else {
        return EdgeScan {
            report,
            upright: None,
        };
    };

    let edge = screen.crop(border);
    report.batteries = count_batteries(&edge.hsv);
    report.parallel_ports = count_parallel_ports(&edge.hsv);

    let upright = edge.rotate(side.rotation());
    report.indicators = detect_indicators(&upright).iter().map(|i| i.lit).collect();
    report.serial_visible = detect_serial(&upright).is_some();
    debug!(?report, "edge scanned");

    EdgeScan {
        report,
        upright: Some(upright),
    }
}
