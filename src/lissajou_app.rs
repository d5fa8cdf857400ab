use ggez::{Context, GameResult};
use ggez::event;
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, DrawParam, Mesh};
use crate::player::{Player, Ticker};
use crate::settings::{self, Viewport};

pub struct LissajouApp {
    player: Player,
    ticker: Ticker,
    viewport: Viewport,
    line: Option<Mesh>,
}

impl LissajouApp {
    pub fn new(player: Player, viewport: Viewport) -> LissajouApp {
        LissajouApp {
            player,
            ticker: Ticker::new(settings::TICK_INTERVAL, settings::MAX_TICKS_PER_UPDATE),
            viewport,
            line: None,
        }
    }

    fn screen_size(ctx: &Context) -> Vec2 {
        let (width, height) = ctx.gfx.drawable_size();
        Vec2::new(width, height)
    }

    fn rebuild_line(&mut self, ctx: &mut Context) -> GameResult {
        let size = Self::screen_size(ctx);
        if let Some(points) = self.player.displayed_points() {
            let polyline = self.viewport.polyline(points, size);
            self.line = Some(Mesh::new_line(ctx, &polyline[..], settings::LINE_WIDTH, settings::LINE_COLOR)?);
        }
        Ok(())
    }
}

impl event::EventHandler<ggez::GameError> for LissajouApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let due = self.ticker.advance(ctx.time.delta());
        if due == 0 {
            return Ok(());
        }

        for _ in 0..due {
            self.player.tick();
        }
        self.rebuild_line(ctx)?;

        if let Some(frame) = self.player.displayed_frame() {
            ctx.gfx.window().set_title(&format!(
                "{} frame {:>4} / {}",
                settings::WINDOW_TITLE, frame, self.player.frame_count()
            ));
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, settings::BACKGROUND_COLOR);
        if let Some(line) = &self.line {
            canvas.draw(line, DrawParam::default());
        }
        canvas.finish(ctx)
    }
}
