use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_dda::{
    ClosingPoint, Color, DdaScene, DdaViewConfig, GpuiDdaView, LineParameters, Point, Theme,
};

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

        let opened = cx.open_window(options, |_window, cx| {
            let scene = DdaScene::builder()
                .theme(
                    Theme::dark()
                        .with_line_color(Color::new(0.95, 0.45, 0.3, 1.0))
                        .with_point_size(6.0),
                )
                .line(LineParameters::two_points(
                    Point::new(-2.4, -1.1),
                    Point::new(1.8, 2.3),
                ))
                .closing(ClosingPoint::Normalized)
                .build();

            let view = GpuiDdaView::with_config(scene, DdaViewConfig::default());
            cx.new(|_| view)
        });
        if let Err(err) = opened {
            tracing::error!(%err, "failed to open window");
            cx.quit();
        }
    });
}
