//! An interactive visualizer for 2D vectors and their unit vectors.
//!
//! Type components for a vector A into the two input fields and the window
//! shows A, its unit vector, and the standard basis vectors î and ĵ on a
//! Cartesian grid, together with the computed magnitude and unit-vector
//! readouts. Every change triggers one full clear-and-redraw cycle.

mod mapper;
mod scene;
mod sim;

use crate::mapper::Mapper;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use std::time::Duration;

/// Window title displayed in the title bar
const TITLE: &str = "Unit Vector Visualizer";
/// Side length of the square plot region in pixels
const PLOT_SIZE: u32 = 520;
/// Height of the text panel below the plot in pixels
const PANEL_HEIGHT: u32 = 120;
/// Path to the font file used for rendering text
const FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";
/// Point size for all rendered text
const FONT_SIZE: u16 = 15;

/// Entry point: initializes SDL2, wires the input events to the simulation
/// controller, and runs the event loop at 60 FPS.
fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window(TITLE, PLOT_SIZE, PLOT_SIZE + PANEL_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let font = ttf_context.load_font(FONT_PATH, FONT_SIZE)?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Computed once for the plot's fixed dimensions; resizing the window
    // later re-runs the draw against these same constants.
    let mapper = Mapper::new(PLOT_SIZE, PLOT_SIZE, scene::WORLD_HALF_EXTENT);

    let mut inputs: [String; 2] = ["3".to_string(), "4".to_string()];
    let mut focus: usize = 0;
    let mut dirty = true;

    video_subsystem.text_input().start();
    let mut event_pump = sdl_context.event_pump()?;

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Tab),
                    ..
                } => {
                    focus = 1 - focus;
                    dirty = true;
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Backspace),
                    ..
                } => {
                    inputs[focus].pop();
                    dirty = true;
                }
                Event::TextInput { text, .. } => {
                    // Anything goes here: unparsable input is coerced to 0
                    // downstream, so there is nothing to reject.
                    inputs[focus].push_str(&text);
                    dirty = true;
                }
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..) | WindowEvent::Exposed,
                    ..
                } => {
                    dirty = true;
                }
                _ => {}
            }
        }

        // Each input change runs exactly one complete read-compute-render
        // cycle before the next batch of events is handled.
        if dirty {
            dirty = false;
            sim::update(
                &mut canvas,
                &font,
                &mapper,
                [inputs[0].as_str(), inputs[1].as_str()],
                focus,
            )?;
            canvas.present();
        }
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }
    Ok(())
}
