use crate::mapper::Mapper;
use crate::scene::{self, HAlign, VAlign, VectorSpec};
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use vecviz::library::*;

/// The single source of truth: the two scalar inputs. Everything else on
/// screen is a pure function of this.
pub struct SimulationState {
    pub ax: f64,
    pub ay: f64,
}

impl SimulationState {
    pub fn from_inputs(ax_raw: &str, ay_raw: &str) -> SimulationState {
        SimulationState {
            ax: parse_component(ax_raw),
            ay: parse_component(ay_raw),
        }
    }
}

/// The six readout strings plus the zero-vector advisory flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Readouts {
    pub ax: String,
    pub ay: String,
    pub mag_a: String,
    pub ux: String,
    pub uy: String,
    pub mag_ua: String,
    pub zero_note: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub readouts: Readouts,
    pub vectors: Vec<VectorSpec>,
}

/// Everything the display needs, computed without touching the display.
///
/// The basis vectors are always drawn. A is drawn only when nonzero, with
/// its tip clamped to the world extent for drawing purposes only; the
/// readouts and the unit vector use the true components.
pub fn derive(state: &SimulationState) -> Derived {
    let mag_a = magnitude(state.ax, state.ay);
    let unit = unit_vector(state.ax, state.ay);

    let readouts = Readouts {
        ax: format!("{:.3}", state.ax),
        ay: format!("{:.3}", state.ay),
        mag_a: format!("{:.3}", mag_a),
        ux: match unit {
            Some([ux, _]) => format!("{:.3}", ux),
            None => "N/A".to_string(),
        },
        uy: match unit {
            Some([_, uy]) => format!("{:.3}", uy),
            None => "N/A".to_string(),
        },
        mag_ua: match unit {
            Some([ux, uy]) => format!("{:.3}", magnitude(ux, uy)),
            None => "N/A".to_string(),
        },
        zero_note: unit.is_none(),
    };

    let mut vectors = vec![
        VectorSpec {
            tip: [1.0, 0.0],
            color: scene::VECTOR_I_HAT_COLOR,
            label: "î (1,0)".to_string(),
            width: 3,
        },
        VectorSpec {
            tip: [0.0, 1.0],
            color: scene::VECTOR_J_HAT_COLOR,
            label: "ĵ (0,1)".to_string(),
            width: 3,
        },
    ];
    if state.ax != 0.0 || state.ay != 0.0 {
        vectors.push(VectorSpec {
            tip: clamp_components(state.ax, state.ay, scene::WORLD_HALF_EXTENT),
            color: scene::VECTOR_A_COLOR,
            label: format!("A ({:.1},{:.1})", state.ax, state.ay),
            width: 2,
        });
    }
    if let Some([ux, uy]) = unit {
        vectors.push(VectorSpec {
            tip: [ux, uy],
            color: scene::VECTOR_UA_COLOR,
            label: format!("u<sub>A</sub> ({:.2},{:.2})", ux, uy),
            width: 3,
        });
    }

    Derived { readouts, vectors }
}

/// One complete update cycle: parse the raw inputs, derive the readouts and
/// draw list, redraw the scene, then the text panel below it. Runs at
/// startup, once per input change, and on resize (with the original mapper
/// constants; the plot never rescales).
pub fn update(
    canvas: &mut Canvas<Window>,
    font: &Font,
    mapper: &Mapper,
    inputs: [&str; 2],
    focus: usize,
) -> Result<(), String> {
    let state = SimulationState::from_inputs(inputs[0], inputs[1]);
    let derived = derive(&state);
    scene::render(canvas, font, mapper, &derived.vectors)?;
    draw_panel(canvas, font, mapper, inputs, focus, &derived.readouts)
}

fn draw_panel(
    canvas: &mut Canvas<Window>,
    font: &Font,
    mapper: &Mapper,
    inputs: [&str; 2],
    focus: usize,
    readouts: &Readouts,
) -> Result<(), String> {
    let [ox, oy] = mapper.origin();
    let top = oy * 2.0;
    canvas.set_draw_color(scene::AXIS_COLOR);
    canvas.draw_line(
        Point::new(0, top as i32),
        Point::new((ox * 2.0) as i32, top as i32),
    )?;

    let caret = |field: usize| if focus == field { "_" } else { "" };
    let mut lines = vec![
        format!(
            "ax: {}{}    ay: {}{}    (Tab switches fields)",
            inputs[0],
            caret(0),
            inputs[1],
            caret(1),
        ),
        format!(
            "A = ({}, {})    |A| = {}",
            readouts.ax, readouts.ay, readouts.mag_a
        ),
        format!(
            "uA = ({}, {})    |uA| = {}",
            readouts.ux, readouts.uy, readouts.mag_ua
        ),
    ];
    if readouts.zero_note {
        lines.push("Zero vector: unit vector is undefined.".to_string());
    }

    for (i, line) in lines.iter().enumerate() {
        let color = if i == 3 {
            scene::VECTOR_I_HAT_COLOR
        } else {
            scene::TEXT_COLOR
        };
        let anchor = [12.0, top + 10.0 + i as f64 * 24.0];
        scene::draw_text(canvas, font, line, anchor, HAlign::Left, VAlign::Top, color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readouts(ax: &str, ay: &str) -> Readouts {
        derive(&SimulationState::from_inputs(ax, ay)).readouts
    }

    #[test]
    fn three_four_gives_the_classic_triangle() {
        let r = readouts("3", "4");
        assert_eq!(r.ax, "3.000");
        assert_eq!(r.ay, "4.000");
        assert_eq!(r.mag_a, "5.000");
        assert_eq!(r.ux, "0.600");
        assert_eq!(r.uy, "0.800");
        assert_eq!(r.mag_ua, "1.000");
        assert!(!r.zero_note);
    }

    #[test]
    fn zero_vector_is_flagged_not_faulted() {
        let r = readouts("0", "0");
        assert_eq!(r.ux, "N/A");
        assert_eq!(r.uy, "N/A");
        assert_eq!(r.mag_ua, "N/A");
        assert!(r.zero_note);
        // The raw readouts stay numeric.
        assert_eq!(r.ax, "0.000");
        assert_eq!(r.mag_a, "0.000");
    }

    #[test]
    fn unparsable_input_behaves_as_the_zero_vector() {
        assert_eq!(readouts("", "abc"), readouts("0", "0"));
    }

    #[test]
    fn oversized_vector_clamps_on_screen_only() {
        let derived = derive(&SimulationState::from_inputs("7", "0"));
        assert_eq!(derived.readouts.ax, "7.000");
        assert_eq!(derived.readouts.mag_a, "7.000");
        let a = derived
            .vectors
            .iter()
            .find(|v| v.color == scene::VECTOR_A_COLOR)
            .unwrap();
        assert_eq!(a.tip, [5.0, 0.0]);
        // The label still carries the true components.
        assert_eq!(a.label, "A (7.0,0.0)");
    }

    #[test]
    fn basis_vectors_always_drawn_user_vectors_conditionally() {
        let derived = derive(&SimulationState { ax: 0.0, ay: 0.0 });
        assert_eq!(derived.vectors.len(), 2);
        assert_eq!(derived.vectors[0].tip, [1.0, 0.0]);
        assert_eq!(derived.vectors[1].tip, [0.0, 1.0]);

        let derived = derive(&SimulationState { ax: 3.0, ay: 4.0 });
        assert_eq!(derived.vectors.len(), 4);
        let ua = derived.vectors.last().unwrap();
        assert_eq!(ua.tip, [0.6, 0.8]);
        assert_eq!(ua.label, "u<sub>A</sub> (0.60,0.80)");
    }

    #[test]
    fn derive_is_a_pure_function_of_the_state() {
        let state = SimulationState::from_inputs("1.5", "-2");
        assert_eq!(derive(&state), derive(&state));
    }
}
