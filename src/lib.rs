mod utils;
pub mod curve_params;
pub mod error;
pub mod frame_buffer;
pub mod lissajou_app;
pub mod player;
pub mod settings;

use anyhow::Context as _;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};
use curve_params::CurveParams;
use frame_buffer::FrameBuffer;
use lissajou_app::LissajouApp;
use player::Player;
use settings::Viewport;

/// Generates every frame of `params`, opens the window and plays them until it is closed.
pub fn run(params: CurveParams) -> anyhow::Result<()> {
    params.validate().context("Invalid curve parameters")?;
    let viewport = Viewport::new(settings::X_MAX, settings::Y_MAX).context("Invalid viewport")?;
    log::info!("Curve: {}", params);

    let frames = FrameBuffer::generate(&params);
    log::info!(
        "Generated {} frames of {} points",
        frames.frame_count(), frames.samples_per_frame()
    );
    let player = Player::new(frames)?;

    let (ctx, event_loop) = ContextBuilder::new("lissajous", "lissajous")
        .window_setup(WindowSetup::default().title(settings::WINDOW_TITLE))
        .window_mode(
            WindowMode::default()
                .dimensions(settings::WINDOW_SIZE.x, settings::WINDOW_SIZE.y)
                .resizable(false),
        )
        .build()
        .map_err(|e| anyhow::anyhow!("Could not open the display window: {}", e))?;
    log::info!(
        "Window {}x{}, tick every {}ms",
        settings::WINDOW_SIZE.x, settings::WINDOW_SIZE.y, settings::TICK_INTERVAL.as_millis()
    );

    let app = LissajouApp::new(player, viewport);
    event::run(ctx, event_loop, app)
}
