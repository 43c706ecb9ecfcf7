//! Scripted host event logs.
//!
//! A script stands in for the exercise widget that would normally host the
//! surface: it describes the container layout and the sequence of pointer
//! events and toolbar calls to replay.
//!
//! # Example TOML
//! ```toml
//! [layout]
//! width = 300.0
//! height = 150.0
//! device_pixel_ratio = 2.0
//!
//! [[events]]
//! type = "pointer-down"
//! x = 10.0
//! y = 10.0
//!
//! [[events]]
//! type = "set-tool"
//! tool = "eraser"
//! ```

use crate::draw::Canvas;
use crate::geometry::{ClientPoint, ContainerLayout, DevicePixelRatio, Padding, ScreenRect};
use crate::input::{PointerEvent, Tool};
use crate::surface::DrawingSurface;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Container measurements, in client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Uniform container padding
    #[serde(default)]
    pub padding: f64,
    /// Falls back to the configured display ratio when absent
    #[serde(default)]
    pub device_pixel_ratio: Option<f64>,
}

impl LayoutSpec {
    pub fn to_layout(&self, default_dpr: DevicePixelRatio) -> ContainerLayout {
        ContainerLayout::new(
            ScreenRect::new(self.left, self.top, self.width, self.height),
            Padding::uniform(self.padding),
            self.device_pixel_ratio
                .map(DevicePixelRatio::new)
                .unwrap_or(default_dpr),
        )
    }
}

/// One step of a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    TouchStart { touches: Vec<[f64; 2]> },
    TouchMove { touches: Vec<[f64; 2]> },
    TouchEnd,
    TouchCancel,
    SetTool { tool: Tool },
    SetPenWidth { width: f64 },
    SetEraserWidth { width: f64 },
    Clear,
    Resize { layout: LayoutSpec },
}

impl ScriptEvent {
    /// Applies this step to `surface`, the way a host widget would.
    pub fn apply<C: Canvas>(&self, surface: &mut DrawingSurface<C>, default_dpr: DevicePixelRatio) {
        match self {
            ScriptEvent::PointerDown { x, y } => {
                surface.handle_event(&PointerEvent::PointerDown(ClientPoint::new(*x, *y)))
            }
            ScriptEvent::PointerMove { x, y } => {
                surface.handle_event(&PointerEvent::PointerMove(ClientPoint::new(*x, *y)))
            }
            ScriptEvent::PointerUp => surface.handle_event(&PointerEvent::PointerUp),
            ScriptEvent::PointerLeave => surface.handle_event(&PointerEvent::PointerLeave),
            ScriptEvent::TouchStart { touches } => {
                surface.handle_event(&PointerEvent::TouchStart(touch_points(touches)))
            }
            ScriptEvent::TouchMove { touches } => {
                surface.handle_event(&PointerEvent::TouchMove(touch_points(touches)))
            }
            ScriptEvent::TouchEnd => surface.handle_event(&PointerEvent::TouchEnd),
            ScriptEvent::TouchCancel => surface.handle_event(&PointerEvent::TouchCancel),
            ScriptEvent::SetTool { tool } => surface.set_tool(*tool),
            ScriptEvent::SetPenWidth { width } => surface.set_pen_width(*width),
            ScriptEvent::SetEraserWidth { width } => surface.set_eraser_width(*width),
            ScriptEvent::Clear => surface.clear_canvas(),
            ScriptEvent::Resize { layout } => surface.resize(layout.to_layout(default_dpr)),
        }
    }
}

fn touch_points(touches: &[[f64; 2]]) -> Vec<ClientPoint> {
    touches
        .iter()
        .map(|[x, y]| ClientPoint::new(*x, *y))
        .collect()
}

/// A layout plus the events to replay against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub layout: LayoutSpec,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Invalid script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Failed to parse script {}", path.display()))
    }

    /// Mounts `surface` with the script layout and replays every event.
    pub fn replay<C: Canvas>(&self, surface: &mut DrawingSurface<C>, default_dpr: DevicePixelRatio) {
        surface.mount(self.layout.to_layout(default_dpr));
        for event in &self.events {
            event.apply(surface, default_dpr);
        }
    }
}
