// Touch gesture state machine for one zoomable image; no DOM access here

use super::double_tap::DoubleTap;
use super::touch::{TouchPoint, two_finger_geometry};
use super::transform::{MAX_SCALE, MIN_SCALE, ViewTransform};
use crate::config::GestureConfig;

/// Snapshot taken when a two-finger touch begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSession {
    pub start_distance: f64,
    pub start_scale: f64,
    pub start_mid: TouchPoint,
    pub start_pan: TouchPoint,
}

/// Single-finger drag of an already zoomed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    /// Touch position minus pan at session start.
    pub anchor: TouchPoint,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Idle,
    Pinching(PinchSession),
    Panning(PanSession),
}

/// What the caller should do after feeding an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// Suppress the browser's own handling (page zoom / scroll).
    pub prevent_default: bool,
    /// The transform changed and must be reapplied.
    pub changed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GestureMapper {
    config: GestureConfig,
    transform: ViewTransform,
    session: Session,
    double_tap: DoubleTap,
}

impl GestureMapper {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config: config.sanitized(),
            ..Default::default()
        }
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[cfg(test)]
    pub fn session(&self) -> Session {
        self.session
    }

    pub fn is_zoomed(&self) -> bool {
        self.transform.is_zoomed()
    }

    /// Back to identity with no session and no pending tap. Used when an
    /// image is opened, when the lightbox closes, and by snap-back.
    pub fn reset(&mut self) {
        self.transform.reset();
        self.session = Session::Idle;
        self.double_tap.clear();
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> Response {
        let t = self.transform;
        match touches {
            [a, b] => {
                self.session = Session::Pinching(PinchSession {
                    start_distance: a.distance(*b),
                    start_scale: t.scale,
                    start_mid: a.midpoint(*b),
                    start_pan: TouchPoint::new(t.pan_x, t.pan_y),
                });
                log::debug!("pinch start at scale {:.2}", t.scale);
                Response {
                    prevent_default: true,
                    changed: false,
                }
            }
            [a] if t.is_zoomed() => {
                self.session = Session::Panning(PanSession {
                    anchor: TouchPoint::new(a.x - t.pan_x, a.y - t.pan_y),
                });
                Response {
                    prevent_default: true,
                    changed: false,
                }
            }
            _ => {
                self.session = Session::Idle;
                Response::default()
            }
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Response {
        let before = self.transform;
        match self.session {
            Session::Pinching(pinch) => {
                let Some((mid, distance)) = two_finger_geometry(touches) else {
                    return Response::default();
                };
                // A zero baseline would divide by zero; keep the baseline scale.
                let scale = if pinch.start_distance > 0.0 {
                    pinch.start_scale * (distance / pinch.start_distance)
                } else {
                    pinch.start_scale
                };
                self.transform.scale = self.clamp_scale(scale);
                self.transform.pan_x = pinch.start_pan.x + (mid.x - pinch.start_mid.x);
                self.transform.pan_y = pinch.start_pan.y + (mid.y - pinch.start_mid.y);
            }
            Session::Panning(pan) => match touches {
                [touch] if self.transform.is_zoomed() => {
                    self.transform.pan_x = touch.x - pan.anchor.x;
                    self.transform.pan_y = touch.y - pan.anchor.y;
                }
                _ => return Response::default(),
            },
            Session::Idle => return Response::default(),
        }
        Response {
            prevent_default: true,
            changed: self.transform != before,
        }
    }

    /// `remaining` is the number of touches still on the surface;
    /// `now_ms` is a wall-clock timestamp used for double-tap detection.
    pub fn touch_end(&mut self, remaining: usize, now_ms: f64) -> Response {
        let mut response = self.end_session();
        if remaining == 0
            && self
                .double_tap
                .register(now_ms, self.config.double_tap_window_ms)
        {
            if self.transform.is_zoomed() {
                self.transform.reset();
            } else {
                self.transform.scale = self.clamp_scale(self.config.double_tap_scale);
            }
            log::debug!("double tap -> scale {:.2}", self.transform.scale);
            response = Response {
                prevent_default: true,
                changed: true,
            };
        }
        response
    }

    /// Like [`touch_end`](Self::touch_end) but a cancelled touch is never a tap.
    pub fn touch_cancel(&mut self) -> Response {
        self.double_tap.clear();
        self.end_session()
    }

    fn end_session(&mut self) -> Response {
        self.session = Session::Idle;
        if self.transform.scale <= self.config.snap_back_below && !self.transform.is_identity() {
            self.transform.reset();
            return Response {
                prevent_default: false,
                changed: true,
            };
        }
        Response::default()
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    }
}
