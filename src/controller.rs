// Click-to-click interaction engine.
// Two clicks make one line: the first click drops an anchor, the second
// commits a segment from the anchor to the click point. Between the two,
// pointer moves show a rubber-band preview that is erased again by
// restoring the snapshot taken right after the anchor was placed.

use crate::draw::{draw_line_dotted, draw_line_solid, snap_to_axis};
use crate::types::{BACKGROUND, FOREGROUND, FrameBuffer};

/// Per-event modifier flags, sampled when the event is built.
/// They apply to the segment being drawn right now, nothing persists.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub axis_snap: bool, // Shift: endpoint snaps to horizontal/vertical/45°
    pub dotted: bool,    // Ctrl: dashed instead of solid
}

/// What the window layer feeds us, already stripped of toolkit detail.
pub enum InputEvent {
    Click { x: i32, y: i32, modifiers: Modifiers },
    PointerMove { x: i32, y: i32, modifiers: Modifiers },
    Clear,
    Quit,
}

/// What the caller should do after an event was handled.
pub struct Response {
    pub redraw: bool, // the framebuffer changed, blit it
    pub quit: bool,   // leave the event loop
}

#[derive(Clone, Copy)]
enum Phase {
    Idle,
    Anchored { x: i32, y: i32 },
}

pub struct Controller {
    fb: FrameBuffer,
    phase: Phase,
}

impl Controller {
    /// Start with an empty (background-filled) canvas and no anchor.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            phase: Phase::Idle,
        }
    }

    /// The canvas, for blitting.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Clear => {
                // Visual: the whole canvas goes back to background color.
                self.fb.fill(BACKGROUND);
                self.phase = Phase::Idle;
                Response { redraw: true, quit: false }
            }
            InputEvent::Click { x, y, modifiers } => match self.phase {
                Phase::Idle => {
                    // Visual: a single white pixel marks the anchor.
                    self.fb.put_pixel(x, y, FOREGROUND);
                    // Saved once per segment; every preview restores from it.
                    self.fb.snapshot();
                    self.phase = Phase::Anchored { x, y };
                    Response { redraw: true, quit: false }
                }
                Phase::Anchored { x: ax, y: ay } => {
                    self.draw_segment(ax, ay, x, y, modifiers);
                    self.phase = Phase::Idle;
                    Response { redraw: true, quit: false }
                }
            },
            InputEvent::PointerMove { x, y, modifiers } => match self.phase {
                // No anchor, nothing to preview.
                Phase::Idle => Response { redraw: false, quit: false },
                Phase::Anchored { x: ax, y: ay } => {
                    // Visual: the rubber-band line follows the pointer; the
                    // anchor stays armed until the closing click.
                    self.draw_segment(ax, ay, x, y, modifiers);
                    Response { redraw: true, quit: false }
                }
            },
            InputEvent::Quit => Response { redraw: false, quit: true },
        }
    }

    // Restore the committed state, then draw anchor->(x,y) per the modifiers.
    fn draw_segment(&mut self, ax: i32, ay: i32, x: i32, y: i32, modifiers: Modifiers) {
        self.fb.restore();

        let (x, y) = if modifiers.axis_snap {
            snap_to_axis(ax, ay, x, y)
        } else {
            (x, y)
        };

        if modifiers.dotted {
            draw_line_dotted(&mut self.fb, ax, ay, x, y, FOREGROUND);
        } else {
            draw_line_solid(&mut self.fb, ax, ay, x, y, FOREGROUND);
        }
    }
}
