use cairo::{Context, ImageSurface};
use sketchpad::config::{HelpOverlayStyle, KeybindingsConfig, StatusBarStyle, StatusPosition};
use sketchpad::draw::RenderStyle;
use sketchpad::input::{InputState, Key};

fn make_input_state() -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();
    InputState::with_defaults(RenderStyle::default(), 10, true, action_map)
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let mut input = make_input_state();
    input.update_screen_dimensions(400, 200);
    let style = StatusBarStyle::default();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        sketchpad::ui::render_status_bar(&ctx, &input, position, &style, 400, 200);
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
    }
}

#[test]
fn render_help_overlay_draws_content() {
    let style = HelpOverlayStyle::default();
    let (mut surface, ctx) = surface_with_context(800, 600);
    sketchpad::ui::render_help_overlay(&ctx, &style, 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn status_text_tracks_tool_and_grid() {
    let mut input = make_input_state();
    input.update_screen_dimensions(200, 200);
    assert!(sketchpad::ui::status_text(&input).starts_with("[Line] [Grid off]"));

    input.on_key_press(Key::Char('3'));
    input.on_key_press(Key::Char('g'));
    let text = sketchpad::ui::status_text(&input);
    assert!(text.contains("[Circle]"));
    assert!(text.contains("Grid 10px"));
}

#[test]
fn status_text_includes_message() {
    let mut input = make_input_state();
    input.set_status_message("Saved ./image.png");
    assert!(sketchpad::ui::status_text(&input).ends_with("Saved ./image.png"));
}

#[test]
fn ui_chrome_never_touches_canvas() {
    let mut input = make_input_state();
    input.update_screen_dimensions(300, 200);
    input.on_key_press(Key::Char('h'));

    let (_surface, ctx) = surface_with_context(300, 200);
    sketchpad::ui::render_help_overlay(&ctx, &HelpOverlayStyle::default(), 300, 200);
    sketchpad::ui::render_status_bar(
        &ctx,
        &input,
        StatusPosition::BottomLeft,
        &StatusBarStyle::default(),
        300,
        200,
    );

    let canvas = input.canvas.as_mut().unwrap();
    let pixels = canvas.pixels().unwrap();
    assert!(pixels
        .chunks(4)
        .all(|px| px[0] == 255 && px[1] == 255 && px[2] == 255));
}
