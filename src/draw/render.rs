//! Cairo-based rendering of drawing actions and the full-log replay.

use super::action::{DrawingAction, circle_radius, normalize_rect};
use super::color::{BLACK, WHITE};
use super::font::FontDescriptor;

/// Distance from the text anchor down to the text baseline.
pub const TEXT_BASELINE_OFFSET: i32 = 10;

/// Stroke and text settings shared by replay and live previews.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Stroke width for lines, rectangles and circles
    pub line_width: f64,
    /// Face used for text actions
    pub font: FontDescriptor,
    /// Text size in points
    pub font_size: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            font: FontDescriptor::default(),
            font_size: 20.0,
        }
    }
}

/// Clears the surface to white and redraws every action in log order.
///
/// Replay is deterministic: the same actions always produce the same pixels.
pub fn replay(
    surface: &cairo::ImageSurface,
    actions: &[DrawingAction],
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    let ctx = cairo::Context::new(surface)?;
    WHITE.apply(&ctx);
    ctx.paint()?;

    for action in actions {
        render_action(&ctx, action, style)?;
    }

    log::debug!("Replayed {} actions", actions.len());
    Ok(())
}

/// Renders a single action in black ink.
pub fn render_action(
    ctx: &cairo::Context,
    action: &DrawingAction,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    match action {
        DrawingAction::Line { x1, y1, x2, y2 } => render_line(ctx, *x1, *y1, *x2, *y2, style),
        DrawingAction::Rectangle { x1, y1, x2, y2 } => {
            render_rect(ctx, *x1, *y1, *x2, *y2, style)
        }
        DrawingAction::Circle {
            cx,
            cy,
            edge_x,
            edge_y,
        } => render_circle(
            ctx,
            *cx,
            *cy,
            circle_radius(*cx, *cy, *edge_x, *edge_y),
            style,
        ),
        DrawingAction::Text { x, y, text } => render_text(ctx, *x, *y, text, style),
    }
}

fn stroke_setup(ctx: &cairo::Context, style: &RenderStyle) {
    BLACK.apply(ctx);
    ctx.set_line_width(style.line_width);
}

fn render_line(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    stroke_setup(ctx, style);
    ctx.move_to(x1 as f64, y1 as f64);
    ctx.line_to(x2 as f64, y2 as f64);
    ctx.stroke()
}

fn render_rect(
    ctx: &cairo::Context,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    stroke_setup(ctx, style);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let (x, y, w, h) = normalize_rect(x1, y1, x2, y2);
    ctx.rectangle(x as f64, y as f64, w as f64, h as f64);
    ctx.stroke()
}

/// Strokes a full circle; also used for the live preview.
pub fn render_circle(
    ctx: &cairo::Context,
    cx: i32,
    cy: i32,
    radius: f64,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    stroke_setup(ctx, style);
    ctx.new_sub_path();
    ctx.arc(
        cx as f64,
        cy as f64,
        radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    ctx.stroke()
}

/// Renders text with its baseline [`TEXT_BASELINE_OFFSET`] below `(x, y)`.
///
/// Used both for committed text and for the in-progress typing buffer.
/// Empty text draws nothing.
pub fn render_text(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    text: &str,
    style: &RenderStyle,
) -> Result<(), cairo::Error> {
    if text.is_empty() {
        return Ok(());
    }

    ctx.save()?;

    let layout = pangocairo::functions::create_layout(ctx);
    layout.set_font_description(Some(&style.font.to_pango(style.font_size)));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    let top = (y + TEXT_BASELINE_OFFSET) as f64 - baseline;

    BLACK.apply(ctx);
    ctx.move_to(x as f64, top);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Canvas;

    fn dark(canvas: &mut Canvas, x: i32, y: i32) -> bool {
        let (r, g, b) = canvas.pixel(x, y).expect("pixel in bounds");
        (r as u32 + g as u32 + b as u32) < 3 * 128
    }

    fn replay_on(canvas: &Canvas, actions: &[DrawingAction]) {
        replay(canvas.surface(), actions, &RenderStyle::default()).unwrap();
    }

    fn sample_actions() -> Vec<DrawingAction> {
        vec![
            DrawingAction::Line {
                x1: 5,
                y1: 5,
                x2: 90,
                y2: 60,
            },
            DrawingAction::Rectangle {
                x1: 70,
                y1: 70,
                x2: 20,
                y2: 30,
            },
            DrawingAction::Circle {
                cx: 50,
                cy: 50,
                edge_x: 50,
                edge_y: 80,
            },
            DrawingAction::Text {
                x: 10,
                y: 80,
                text: "Hi".to_string(),
            },
        ]
    }

    #[test]
    fn replay_is_idempotent() {
        let mut first = Canvas::new(120, 120).unwrap();
        let mut second = Canvas::new(120, 120).unwrap();
        let actions = sample_actions();

        replay_on(&first, &actions);
        replay_on(&second, &actions);
        assert_eq!(first.pixels().unwrap(), second.pixels().unwrap());

        replay_on(&first, &actions);
        assert_eq!(first.pixels().unwrap(), second.pixels().unwrap());
    }

    #[test]
    fn replay_of_empty_log_is_white() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        {
            let ctx = canvas.context().unwrap();
            ctx.set_source_rgb(0.0, 0.0, 0.0);
            ctx.paint().unwrap();
        }
        replay_on(&canvas, &[]);
        assert_eq!(canvas.pixel(20, 20), Some((255, 255, 255)));
    }

    #[test]
    fn horizontal_line_is_inked() {
        let mut canvas = Canvas::new(60, 60).unwrap();
        // A 2px stroke on an integer row fully covers rows 29 and 30
        let style = RenderStyle {
            line_width: 2.0,
            ..RenderStyle::default()
        };
        let action = DrawingAction::Line {
            x1: 10,
            y1: 30,
            x2: 50,
            y2: 30,
        };
        replay(canvas.surface(), &[action], &style).unwrap();

        assert!(dark(&mut canvas, 30, 30));
        assert!(!dark(&mut canvas, 30, 40));
    }

    #[test]
    fn reversed_rectangle_matches_normalized_one() {
        let mut forward = Canvas::new(80, 80).unwrap();
        let mut reversed = Canvas::new(80, 80).unwrap();
        replay_on(
            &forward,
            &[DrawingAction::Rectangle {
                x1: 10,
                y1: 10,
                x2: 60,
                y2: 50,
            }],
        );
        replay_on(
            &reversed,
            &[DrawingAction::Rectangle {
                x1: 60,
                y1: 50,
                x2: 10,
                y2: 10,
            }],
        );
        assert_eq!(forward.pixels().unwrap(), reversed.pixels().unwrap());
    }

    #[test]
    fn circle_is_drawn_at_euclidean_radius() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        let style = RenderStyle {
            line_width: 2.0,
            ..RenderStyle::default()
        };
        // 3-4-5 triangle scaled by 6 => radius 30
        let action = DrawingAction::Circle {
            cx: 50,
            cy: 50,
            edge_x: 68,
            edge_y: 74,
        };
        replay(canvas.surface(), &[action], &style).unwrap();

        assert!(dark(&mut canvas, 80, 50) || dark(&mut canvas, 79, 50));
        assert!(dark(&mut canvas, 50, 20) || dark(&mut canvas, 50, 19));
        assert!(!dark(&mut canvas, 50, 50));
        assert!(!dark(&mut canvas, 90, 50));
    }

    #[test]
    fn text_leaves_ink_below_anchor() {
        let mut canvas = Canvas::new(120, 60).unwrap();
        replay_on(
            &canvas,
            &[DrawingAction::Text {
                x: 10,
                y: 20,
                text: "WWW".to_string(),
            }],
        );
        let pixels = canvas.pixels().unwrap();
        assert!(pixels.chunks(4).any(|px| px[0] < 128));
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut canvas = Canvas::new(40, 40).unwrap();
        replay_on(
            &canvas,
            &[DrawingAction::Text {
                x: 5,
                y: 5,
                text: String::new(),
            }],
        );
        let pixels = canvas.pixels().unwrap();
        assert!(pixels.chunks(4).all(|px| px[0] == 255 && px[1] == 255 && px[2] == 255));
    }
}
