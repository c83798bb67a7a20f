use std::time::Duration;

use gpui::{
    AppContext, Application, AsyncWindowContext, Bounds, Timer, WindowBounds, WindowOptions, px,
    size,
};
use tracing_subscriber::EnvFilter;

use gpui_dda::{DdaHandle, DdaScene, GpuiDdaView, LineParameters, Point, Theme};

const DEGREES_PER_TICK: f64 = 0.75;

fn spawn_rotation(
    window: &mut gpui::Window,
    cx: &mut gpui::App,
    view: gpui::Entity<GpuiDdaView>,
    handle: DdaHandle,
) {
    window
        .spawn(cx, move |cx: &mut AsyncWindowContext| {
            let mut cx = cx.clone();
            async move {
                loop {
                    Timer::after(Duration::from_millis(16)).await;
                    handle.write(|scene| {
                        let mut line = *scene.line();
                        line.theta_deg = (line.theta_deg + DEGREES_PER_TICK) % 360.0;
                        scene.set_line(line);
                    });

                    if cx
                        .update(|_, cx| view.update(cx, |_view, view_cx| view_cx.notify()))
                        .is_err()
                    {
                        tracing::debug!("window closed, stopping rotation");
                        break;
                    }
                }
            }
        })
        .detach();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gpui_dda=info")),
        )
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(900.0), px(700.0)),
                cx,
            ))),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let line = LineParameters::point_and_theta(Point::new(0.0, 0.0), 0.0, 3.2);
            let scene = DdaScene::builder()
                .theme(Theme::light())
                .line(line)
                .grid_labels(false)
                .scale(90.0)
                .build();

            let view = GpuiDdaView::new(scene);
            let handle = view.scene_handle();
            let entity = cx.new(|_| view);
            spawn_rotation(window, cx, entity.clone(), handle);
            entity
        });
        if let Err(err) = opened {
            tracing::error!(%err, "failed to open window");
            cx.quit();
        }
    });
}
