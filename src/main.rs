// Point-to-point line sketching:
// • Click once to drop an anchor, click again to commit a straight line.
// • While an anchor is armed, moving the mouse previews the line.
// • Hold Shift: the endpoint snaps to horizontal/vertical/45°.
// • Hold Ctrl: the line is drawn dotted.
// • C clears the canvas. ESC or Q quits.
// Optional argument: canvas size as WIDTHxHEIGHT (default 600x800).

mod controller;
mod draw;
mod error;
mod types;
mod window;

use controller::{Controller, InputEvent, Modifiers};
use error::Error;
use std::process::ExitCode;
use window::Drawer;

const DEFAULT_WIDTH: usize = 600;
const DEFAULT_HEIGHT: usize = 800;

/// Parse an optional "WIDTHxHEIGHT" argument; both sides must be positive.
fn canvas_size(arg: Option<&str>) -> Result<(usize, usize), Error> {
    let Some(arg) = arg else {
        return Ok((DEFAULT_WIDTH, DEFAULT_HEIGHT));
    };
    let parse = |s: &str| -> Option<usize> {
        match s.parse::<usize>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(n),
        }
    };
    arg.split_once(['x', 'X'])
        .and_then(|(w, h)| Some((parse(w)?, parse(h)?)))
        .ok_or_else(|| Error::Config(format!("expected WIDTHxHEIGHT, got {arg:?}")))
}

fn run() -> Result<(), Error> {
    let arg = std::env::args().nth(1);
    let (width, height) = canvas_size(arg.as_deref())?;

    // The window is the one thing that can fail to come up; everything after
    // this point only moves pixels around.
    let mut drawer = Drawer::new("Line Sketch", width, height)?;
    let mut ctl = Controller::new(width, height);

    // Show the empty canvas before the first input arrives.
    drawer.present(ctl.framebuffer())?;

    // Last pointer-move we forwarded; suppresses duplicate preview redraws.
    let mut last_move: Option<(i32, i32, Modifiers)> = None;

    while drawer.is_open() {
        let modifiers = Modifiers {
            axis_snap: drawer.shift_down(),
            dotted: drawer.ctrl_down(),
        };

        // Gather this frame's input as abstract events.
        let mut events = Vec::new();
        if drawer.quit_pressed() {
            events.push(InputEvent::Quit);
        }
        if drawer.clear_pressed_once() {
            events.push(InputEvent::Clear);
        }
        if drawer.left_clicked_once() {
            if let Some((x, y)) = drawer.mouse_pos() {
                events.push(InputEvent::Click { x, y, modifiers });
                last_move = None; // the next move is a fresh preview
            }
        } else if let Some((x, y)) = drawer.mouse_pos() {
            if last_move != Some((x, y, modifiers)) {
                events.push(InputEvent::PointerMove { x, y, modifiers });
                last_move = Some((x, y, modifiers));
            }
        }

        let mut redraw = false;
        for event in events {
            let response = ctl.handle_event(event);
            redraw |= response.redraw;
            if response.quit {
                return Ok(());
            }
        }

        // Present when pixels changed; otherwise just keep input flowing.
        if redraw {
            drawer.present(ctl.framebuffer())?;
        } else {
            drawer.pump();
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("execution terminated, reason: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_default() {
        assert_eq!(canvas_size(None).unwrap(), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }

    #[test]
    fn test_canvas_size_parses_dimensions() {
        assert_eq!(canvas_size(Some("320x240")).unwrap(), (320, 240));
        assert_eq!(canvas_size(Some("320X240")).unwrap(), (320, 240));
    }

    #[test]
    fn test_canvas_size_rejects_bad_input() {
        assert!(canvas_size(Some("320")).is_err());
        assert!(canvas_size(Some("0x240")).is_err());
        assert!(canvas_size(Some("320x")).is_err());
        assert!(canvas_size(Some("axb")).is_err());
    }
}
