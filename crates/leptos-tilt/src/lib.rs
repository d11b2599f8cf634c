//! Leptos Tilt Utilities
//!
//! Pointer-driven 3D tilt with a moving glare for a card element.
//! The card is found through the `data-tilt` attribute; its bounds are
//! cached and re-measured after a viewport resize.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default maximum rotation on each axis, in degrees
pub const DEFAULT_MAX_TILT_DEG: f64 = 10.0;

/// Selector identifying the tilting element
pub const TILT_SELECTOR: &str = "[data-tilt]";

/// Element rectangle in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn from_rect(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    /// Pointer position as fractions of width and height, clamped to 0..=1.
    /// `None` when the rectangle has no area.
    fn fraction(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x = ((client_x - self.left) / self.width).clamp(0.0, 1.0);
        let y = ((client_y - self.top) / self.height).clamp(0.0, 1.0);
        Some((x, y))
    }
}

/// Card rotation and glare centre
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Glare centre, percent of width
    pub glare_x: f64,
    /// Glare centre, percent of height
    pub glare_y: f64,
    /// Whether the pointer is over the card
    pub tracking: bool,
}

impl Default for Tilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glare_x: 50.0,
        glare_y: 50.0,
        tracking: false,
    };

    /// Tilt for a pointer at (`client_x`, `client_y`) over `bounds`
    pub fn at(bounds: &Bounds, client_x: f64, client_y: f64, max_deg: f64) -> Tilt {
        let Some((x, y)) = bounds.fraction(client_x, client_y) else {
            return Tilt::NEUTRAL;
        };
        Tilt {
            // Top edge tips toward the viewer
            rotate_x: (0.5 - y) * max_deg * 2.0,
            rotate_y: (x - 0.5) * max_deg * 2.0,
            glare_x: x * 100.0,
            glare_y: y * 100.0,
            tracking: true,
        }
    }

    /// CSS `transform` value
    pub fn transform(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.rotate_x, self.rotate_y)
    }

    /// CSS `background` value for the glare layer
    pub fn glare(&self) -> String {
        let (core, blue, violet) = if self.tracking {
            (0.16, 0.06, 0.04)
        } else {
            (0.14, 0.05, 0.03)
        };
        format!(
            "radial-gradient(400px 250px at {}% {}%, rgba(255,255,255,{}), rgba(79,127,255,{}) 50%, rgba(167,139,250,{}) 65%, rgba(255,255,255,0) 75%)",
            self.glare_x, self.glare_y, core, blue, violet
        )
    }
}

/// Tilt state signals
#[derive(Clone, Copy)]
pub struct TiltSignals {
    pub tilt_read: ReadSignal<Tilt>,
    pub tilt_write: WriteSignal<Tilt>,
    /// Cached card bounds; `None` means measure on next move
    pub bounds_read: ReadSignal<Option<Bounds>>,
    pub bounds_write: WriteSignal<Option<Bounds>>,
}

pub fn create_tilt_signals() -> TiltSignals {
    let (tilt_read, tilt_write) = signal(Tilt::NEUTRAL);
    let (bounds_read, bounds_write) = signal(None::<Bounds>);
    TiltSignals {
        tilt_read,
        tilt_write,
        bounds_read,
        bounds_write,
    }
}

/// Measure the tilting ancestor of the event target
fn measure(ev: &web_sys::MouseEvent) -> Option<Bounds> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let card = target.closest(TILT_SELECTOR).ok()??;
    Some(Bounds::from_rect(&card.get_bounding_client_rect()))
}

/// Create mousemove handler for the card
pub fn make_on_mousemove(tilt: TiltSignals, max_deg: f64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        let bounds = match tilt.bounds_read.get_untracked() {
            Some(bounds) => bounds,
            None => {
                let Some(bounds) = measure(&ev) else { return };
                tilt.bounds_write.set(Some(bounds));
                bounds
            }
        };
        tilt.tilt_write.set(Tilt::at(
            &bounds,
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            max_deg,
        ));
    }
}

/// Create mouseleave handler: back to neutral
pub fn make_on_mouseleave(tilt: TiltSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        tilt.tilt_write.set(Tilt::NEUTRAL);
    }
}

/// Bind global resize handler that drops the cached bounds
pub fn bind_window_resize(tilt: TiltSignals) {
    use wasm_bindgen::closure::Closure;

    let on_resize = Closure::<dyn FnMut()>::new(move || {
        tilt.bounds_write.set(None);
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
