use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use std::time::Duration;
use tokio::time::Instant;

pub struct EventHandler {
    frame_interval: Duration,
    last_tick: Instant,
}

impl EventHandler {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            last_tick: Instant::now(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Mouse(mouse) => EventType::Mouse(mouse),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // If no immediate event, wait one frame and return tick
        tokio::time::sleep(self.frame_interval).await;
        Ok(EventType::Tick)
    }

    /// Time since the previous call, used to advance animations
    pub fn take_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        elapsed
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::constants::DEFAULT_FRAME_INTERVAL_MS))
    }
}
