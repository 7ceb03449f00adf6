use crate::mapper::Mapper;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::f64::consts::PI;
use vecviz::library::magnitude;

/// World coordinates run from -WORLD_HALF_EXTENT to +WORLD_HALF_EXTENT along
/// the shorter plot dimension.
pub const WORLD_HALF_EXTENT: f64 = 5.0;
/// Length of each arrowhead barb in pixels
pub const ARROW_HEAD_SIZE: f64 = 8.0;
/// How far past the arrow tip the label sits, in arrowhead lengths
const LABEL_OFFSET_FACTOR: f64 = 1.5;

pub const BACKGROUND: Color = Color::RGB(0xff, 0xff, 0xff);
pub const GRID_COLOR: Color = Color::RGB(0xe0, 0xe0, 0xe0);
pub const AXIS_COLOR: Color = Color::RGB(0x88, 0x88, 0x88);
pub const TEXT_COLOR: Color = Color::RGB(0x33, 0x33, 0x33);
pub const VECTOR_A_COLOR: Color = Color::RGB(0x00, 0x7b, 0xff);
pub const VECTOR_I_HAT_COLOR: Color = Color::RGB(0xdc, 0x35, 0x45);
pub const VECTOR_J_HAT_COLOR: Color = Color::RGB(0x28, 0xa7, 0x45);
pub const VECTOR_UA_COLOR: Color = Color::RGB(0x6f, 0x42, 0xc1);

// The gfx primitives read the color bytes in the opposite order from the
// rest of sdl2.
fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

/// One arrow to draw: tip in world units (tail is always the origin), plus
/// styling. Rebuilt from scratch on every update cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpec {
    pub tip: [f64; 2],
    pub color: Color,
    pub label: String,
    pub width: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Labels may carry simple sub/superscript markup ("u<sub>A</sub>"); it is
/// rendered as plain text, so the tags are dropped.
pub fn strip_markup(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_tag = false;
    for c in label.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Endpoints of the two arrowhead barbs, 30 degrees off the shaft on either
/// side, `size` pixels back from the tip. All coordinates in pixel space.
pub fn arrow_barbs(origin: [f64; 2], tip: [f64; 2], size: f64) -> [[f64; 2]; 2] {
    let angle = (tip[1] - origin[1]).atan2(tip[0] - origin[0]);
    let barb = |a: f64| [tip[0] - size * a.cos(), tip[1] - size * a.sin()];
    [barb(angle - PI / 6.0), barb(angle + PI / 6.0)]
}

/// Text alignment for a vector label, from the vector's world components.
/// Near-horizontal vectors read outward and vertically centered,
/// near-vertical ones the other way around; vectors shorter than half a
/// world unit push the label into the sign-matching quadrant so it clears
/// the arrowhead.
pub fn label_anchor(vx: f64, vy: f64) -> (HAlign, VAlign) {
    let (mut h, mut v) = if vx.abs() > vy.abs() {
        let h = if vx > 0.0 { HAlign::Left } else { HAlign::Right };
        (h, VAlign::Middle)
    } else {
        let v = if vy > 0.0 { VAlign::Top } else { VAlign::Bottom };
        (HAlign::Center, v)
    };
    if magnitude(vx, vy) < 0.5 {
        h = if vx >= 0.0 { HAlign::Left } else { HAlign::Right };
        v = if vy >= 0.0 { VAlign::Bottom } else { VAlign::Top };
    }
    (h, v)
}

/// Rasterizes `text` and copies it to the canvas with the given corner or
/// center of the text box pinned to `anchor`.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    anchor: [f64; 2],
    h: HAlign,
    v: VAlign,
    color: Color,
) -> Result<(), String> {
    let surface = font.render(text).blended(color).map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    let query = texture.query();
    let x = match h {
        HAlign::Left => anchor[0],
        HAlign::Center => anchor[0] - query.width as f64 / 2.0,
        HAlign::Right => anchor[0] - query.width as f64,
    };
    let y = match v {
        VAlign::Top => anchor[1],
        VAlign::Middle => anchor[1] - query.height as f64 / 2.0,
        VAlign::Bottom => anchor[1] - query.height as f64,
    };
    let target = Rect::new(x as i32, y as i32, query.width, query.height);
    canvas.copy(&texture, None, Some(target))
}

fn draw_vector(
    canvas: &mut Canvas<Window>,
    font: &Font,
    mapper: &Mapper,
    spec: &VectorSpec,
) -> Result<(), String> {
    let origin = mapper.origin();
    let tip = mapper.to_pixel(spec.tip[0], spec.tip[1]);
    let color = to_abgr(spec.color);

    canvas.thick_line(
        origin[0] as i16,
        origin[1] as i16,
        tip[0] as i16,
        tip[1] as i16,
        spec.width,
        color,
    )?;
    for barb in arrow_barbs(origin, tip, ARROW_HEAD_SIZE) {
        canvas.thick_line(
            tip[0] as i16,
            tip[1] as i16,
            barb[0] as i16,
            barb[1] as i16,
            spec.width,
            color,
        )?;
    }

    let angle = (tip[1] - origin[1]).atan2(tip[0] - origin[0]);
    let anchor = [
        tip[0] + ARROW_HEAD_SIZE * LABEL_OFFSET_FACTOR * angle.cos(),
        tip[1] + ARROW_HEAD_SIZE * LABEL_OFFSET_FACTOR * angle.sin(),
    ];
    let (h, v) = label_anchor(spec.tip[0], spec.tip[1]);
    draw_text(
        canvas,
        font,
        &strip_markup(&spec.label),
        anchor,
        h,
        v,
        spec.color,
    )
}

/// Full clear-and-redraw of the plot: grid with numeric labels, the two
/// axes, then every requested arrow in order.
pub fn render(
    canvas: &mut Canvas<Window>,
    font: &Font,
    mapper: &Mapper,
    specs: &[VectorSpec],
) -> Result<(), String> {
    let [ox, oy] = mapper.origin();
    let scale = mapper.scale();
    let plot_w = (ox * 2.0) as i16;
    let plot_h = (oy * 2.0) as i16;

    canvas.set_draw_color(BACKGROUND);
    canvas.clear();

    // One gridline per integer world coordinate, labeled off-axis.
    let extent = WORLD_HALF_EXTENT as i32;
    for i in -extent..=extent {
        let [gx, gy] = mapper.to_pixel(i as f64, i as f64);
        canvas.line(gx as i16, 0, gx as i16, plot_h, to_abgr(GRID_COLOR))?;
        canvas.line(0, gy as i16, plot_w, gy as i16, to_abgr(GRID_COLOR))?;
        if i != 0 {
            let text = i.to_string();
            let below_axis = [gx, oy + 0.6 * scale];
            let left_of_axis = [ox - 0.6 * scale, gy];
            draw_text(canvas, font, &text, below_axis, HAlign::Center, VAlign::Middle, TEXT_COLOR)?;
            draw_text(canvas, font, &text, left_of_axis, HAlign::Center, VAlign::Middle, TEXT_COLOR)?;
        }
    }

    canvas.thick_line(0, oy as i16, plot_w, oy as i16, 2, to_abgr(AXIS_COLOR))?;
    canvas.thick_line(ox as i16, 0, ox as i16, plot_h, 2, to_abgr(AXIS_COLOR))?;
    let x_end = [plot_w as f64 - 0.5 * scale, oy + 0.6 * scale];
    let y_end = [ox + 0.6 * scale, 0.5 * scale];
    let origin_label = [ox - 0.6 * scale, oy + 0.6 * scale];
    draw_text(canvas, font, "X", x_end, HAlign::Center, VAlign::Middle, TEXT_COLOR)?;
    draw_text(canvas, font, "Y", y_end, HAlign::Center, VAlign::Middle, TEXT_COLOR)?;
    draw_text(canvas, font, "0", origin_label, HAlign::Center, VAlign::Middle, TEXT_COLOR)?;

    for spec in specs {
        draw_vector(canvas, font, mapper, spec)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_renders_as_plain_text() {
        assert_eq!(strip_markup("u<sub>A</sub> (0.60,0.80)"), "uA (0.60,0.80)");
        assert_eq!(strip_markup("x<sup>2</sup>"), "x2");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn barbs_sit_behind_the_tip_at_thirty_degrees() {
        // Arrow pointing right in pixel space.
        let [b1, b2] = arrow_barbs([0.0, 0.0], [100.0, 0.0], 8.0);
        assert!(b1[0] < 100.0 && b2[0] < 100.0);
        // Mirrored about the shaft.
        assert!((b1[1] + b2[1]).abs() < 1e-9);
        let len = ((b1[0] - 100.0).powi(2) + b1[1].powi(2)).sqrt();
        assert!((len - 8.0).abs() < 1e-9);
    }

    #[test]
    fn label_anchor_follows_dominant_component() {
        assert_eq!(label_anchor(3.0, 1.0), (HAlign::Left, VAlign::Middle));
        assert_eq!(label_anchor(-3.0, 1.0), (HAlign::Right, VAlign::Middle));
        assert_eq!(label_anchor(1.0, 3.0), (HAlign::Center, VAlign::Top));
        assert_eq!(label_anchor(1.0, -3.0), (HAlign::Center, VAlign::Bottom));
    }

    #[test]
    fn short_vectors_push_label_into_their_quadrant() {
        assert_eq!(label_anchor(0.2, 0.2), (HAlign::Left, VAlign::Bottom));
        assert_eq!(label_anchor(-0.2, -0.2), (HAlign::Right, VAlign::Top));
        assert_eq!(label_anchor(0.3, -0.1), (HAlign::Left, VAlign::Top));
    }
}
