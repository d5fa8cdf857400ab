use std::time::Duration;
use ggez::glam::DVec2;
use crate::error::LissajousError;
use crate::frame_buffer::FrameBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing { next_frame: usize },
}

/// Cycles through a finished [`FrameBuffer`], one frame per tick.
pub struct Player {
    frames: FrameBuffer,
    state: PlaybackState,
    displayed: Option<usize>,
}

impl Player {
    pub fn new(frames: FrameBuffer) -> Result<Player, LissajousError> {
        if frames.is_empty() {
            return Err(LissajousError::EmptyFrameBuffer);
        }
        Ok(Player {
            frames,
            state: PlaybackState::Idle,
            displayed: None,
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// Frame the next tick will display.
    pub fn frame_index(&self) -> usize {
        match self.state {
            PlaybackState::Idle => 0,
            PlaybackState::Playing { next_frame } => next_frame,
        }
    }

    pub fn displayed_frame(&self) -> Option<usize> {
        self.displayed
    }

    pub fn displayed_points(&self) -> Option<&[DVec2]> {
        self.displayed.map(|f| self.frames.frame(f))
    }

    /// Shows the current frame, advances to the next one and returns the points to draw.
    pub fn tick(&mut self) -> &[DVec2] {
        let frame = self.frame_index();
        if self.state == PlaybackState::Idle {
            log::info!("Playback started, {} frames", self.frame_count());
        }

        let next_frame = (frame + 1) % self.frame_count();
        if next_frame == 0 {
            log::debug!("Playback wrapped after frame {}", frame);
        }

        self.state = PlaybackState::Playing { next_frame };
        self.displayed = Some(frame);
        self.frames.frame(frame)
    }
}

/// Turns wall-clock time reported by the host into whole ticks of a fixed interval.
pub struct Ticker {
    interval: Duration,
    max_ticks: u32,
    residual: Duration,
}

impl Ticker {
    pub fn new(interval: Duration, max_ticks: u32) -> Ticker {
        Ticker {
            interval,
            max_ticks,
            residual: Duration::ZERO,
        }
    }

    /// Number of ticks due after `elapsed`. At most `max_ticks` are returned, the rest is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return self.max_ticks;
        }

        self.residual += elapsed;
        let mut due = 0u32;
        while self.residual >= self.interval {
            self.residual -= self.interval;
            due = due.saturating_add(1);
        }

        if due > self.max_ticks {
            log::debug!("Dropping {} late ticks", due - self.max_ticks);
            return self.max_ticks;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve_params::CurveParams;

    fn params(frames: usize) -> CurveParams {
        CurveParams { frames, samples: 16, ..CurveParams::MORPHING }
    }

    fn player(frames: usize) -> Player {
        Player::new(FrameBuffer::generate(&params(frames))).unwrap()
    }

    #[test]
    fn starts_idle() {
        let player = player(5);
        assert_eq!(player.state(), PlaybackState::Idle);
        assert_eq!(player.frame_index(), 0);
        assert_eq!(player.displayed_frame(), None);
        assert!(player.displayed_points().is_none());
    }

    #[test]
    fn first_tick_shows_frame_zero() {
        let mut player = player(5);
        assert_eq!(player.tick().len(), 16);
        assert_eq!(player.displayed_frame(), Some(0));
        assert_eq!(player.state(), PlaybackState::Playing { next_frame: 1 });
    }

    #[test]
    fn wraps_after_frame_count_ticks() {
        let mut player = player(720);
        for _ in 0..720 {
            player.tick();
        }
        assert_eq!(player.frame_index(), 0);
        assert_eq!(player.displayed_frame(), Some(719));
        player.tick();
        assert_eq!(player.displayed_frame(), Some(0));
    }

    #[test]
    fn ticks_return_the_buffer_frames() {
        let buffer = FrameBuffer::generate(&params(3));
        let mut player = Player::new(buffer.clone()).unwrap();
        for f in [0, 1, 2, 0, 1] {
            assert_eq!(player.tick(), buffer.frame(f));
            assert_eq!(player.displayed_points(), Some(buffer.frame(f)));
        }
    }

    #[test]
    fn single_frame_stays_on_zero() {
        let mut player = player(1);
        player.tick();
        player.tick();
        assert_eq!(player.state(), PlaybackState::Playing { next_frame: 0 });
        assert_eq!(player.displayed_frame(), Some(0));
    }

    #[test]
    fn rejects_empty_buffer() {
        let buffer = FrameBuffer::generate(&params(0));
        assert!(matches!(Player::new(buffer), Err(LissajousError::EmptyFrameBuffer)));
    }

    #[test]
    fn ticker_carries_remainder() {
        let mut ticker = Ticker::new(Duration::from_millis(30), 10);
        assert_eq!(ticker.advance(Duration::from_millis(95)), 3);
        assert_eq!(ticker.advance(Duration::from_millis(20)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(5)), 1);
    }

    #[test]
    fn ticker_waits_for_a_full_interval() {
        let mut ticker = Ticker::new(Duration::from_millis(30), 4);
        assert_eq!(ticker.advance(Duration::from_millis(16)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(16)), 1);
    }

    #[test]
    fn ticker_drops_surplus_ticks() {
        let mut ticker = Ticker::new(Duration::from_millis(30), 4);
        assert_eq!(ticker.advance(Duration::from_secs(1)), 4);
        assert_eq!(ticker.advance(Duration::from_millis(9)), 0);
    }
}
