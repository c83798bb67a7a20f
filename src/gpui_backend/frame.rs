use gpui::{Bounds, Pixels, TextRun, Window, font, px};

use crate::geom::{ScreenPoint, ScreenRect};
use crate::labels::format_readout;
use crate::render::{
    Color, RectStyle, RenderCommand, RenderList, TextStyle, build_scene_commands,
};
use crate::scene::DdaScene;

use super::config::DdaViewConfig;
use super::state::DdaUiState;

const PANEL_PADDING: f64 = 4.0;

#[derive(Debug, Clone)]
pub(crate) struct DdaFrame {
    pub(crate) render: RenderList,
}

pub(crate) fn build_frame(
    scene: &mut DdaScene,
    state: &mut DdaUiState,
    config: &DdaViewConfig,
    bounds: Bounds<Pixels>,
    window: &Window,
) -> DdaFrame {
    let mut render = RenderList::new();

    let origin_x = f64::from(f32::from(bounds.origin.x));
    let origin_y = f64::from(f32::from(bounds.origin.y));
    let width = f64::from(f32::from(bounds.size.width));
    let height = f64::from(f32::from(bounds.size.height));
    if width <= 1.0 || height <= 1.0 {
        return DdaFrame { render };
    }

    let rect = ScreenRect::new(
        ScreenPoint::new(origin_x, origin_y),
        ScreenPoint::new(origin_x + width, origin_y + height),
    );
    state.surface_rect = Some(rect);

    match scene.frame(rect.size()) {
        Ok(frame) => {
            state.record_error(None);
            tracing::trace!(
                grid = frame.grid.len(),
                points = frame.raster.len(),
                labels = frame.grid_labels.len(),
                "frame built"
            );
            build_scene_commands(&frame, rect, scene.theme(), &mut render);
        }
        Err(err) => {
            state.record_error(Some(err.to_string()));
            push_panel(&mut render, rect, scene.theme().background);
        }
    }

    let theme = scene.theme().clone();
    if let Some(message) = state.last_error.clone() {
        let position = ScreenPoint::new(rect.min.x + 8.0, rect.min.y + 8.0);
        push_label(
            &mut render,
            window,
            position,
            format!("error: {message}"),
            theme.error,
            theme.panel,
        );
    }

    if config.show_readout {
        if let Some(cursor) = state.cursor.filter(|cursor| rect.contains(*cursor)) {
            if let Some(world) = state
                .to_local(cursor)
                .and_then(|local| scene.pixel_to_world(local))
            {
                let position = ScreenPoint::new(
                    cursor.x + config.readout_offset.0,
                    cursor.y + config.readout_offset.1,
                );
                push_label(
                    &mut render,
                    window,
                    position,
                    format_readout(world),
                    theme.readout,
                    theme.panel,
                );
            }
        }
    }

    if width <= config.min_surface_px || height <= config.min_surface_px {
        push_panel(&mut render, rect, theme.panel);
        let message = format!(
            "Enlarge the window to more than {0} x {0} px",
            config.min_surface_px
        );
        let (text_width, text_height) = measure_text(window, &message, theme.readout.size);
        let position = ScreenPoint::new(
            rect.min.x + (width - f64::from(text_width)).max(0.0) * 0.5,
            rect.min.y + (height - f64::from(text_height)).max(0.0) * 0.5,
        );
        render.push(RenderCommand::Text {
            position,
            text: message,
            style: theme.readout,
        });
    }

    DdaFrame { render }
}

fn push_panel(render: &mut RenderList, rect: ScreenRect, fill: Color) {
    render.push(RenderCommand::Rect {
        rect,
        style: RectStyle {
            fill,
            stroke: fill,
            stroke_width: 0.0,
        },
    });
}

fn push_label(
    render: &mut RenderList,
    window: &Window,
    position: ScreenPoint,
    text: String,
    style: TextStyle,
    panel_fill: Color,
) {
    let (text_width, text_height) = measure_text(window, &text, style.size);
    let panel = ScreenRect::new(
        position,
        ScreenPoint::new(
            position.x + f64::from(text_width) + PANEL_PADDING * 2.0,
            position.y + f64::from(text_height) + PANEL_PADDING,
        ),
    );
    push_panel(render, panel, panel_fill);
    render.push(RenderCommand::Text {
        position: ScreenPoint::new(position.x + PANEL_PADDING, position.y + PANEL_PADDING * 0.5),
        text,
        style,
    });
}

fn measure_text(window: &Window, text: &str, size: f32) -> (f32, f32) {
    if text.is_empty() {
        return (0.0, 0.0);
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: gpui::black(),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(size), &[run], None);
    let height = f32::from(shaped.ascent + shaped.descent);
    (f32::from(shaped.width), height.max(size * 1.2))
}
