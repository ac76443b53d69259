use std::time::Duration;

use tokio::sync::watch;

use crate::maze::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackDelays {
    pub step: Duration,
    pub corner: Duration,
}

impl PlaybackDelays {
    pub fn from_millis(step_ms: u64, corner_ms: u64) -> Self {
        Self {
            step: Duration::from_millis(step_ms),
            corner: Duration::from_millis(corner_ms),
        }
    }
}

impl Default for PlaybackDelays {
    fn default() -> Self {
        Self::from_millis(100, 200)
    }
}

/// a direction change at `current`; the last step of a path is never a corner
pub fn is_corner(prev: Position, next: Option<Position>) -> bool {
    next.is_some_and(|next| prev.x != next.x && prev.y != next.y)
}

/// creates a handle/token pair for one playback
pub fn cancellation() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle(tx), CancelToken(rx))
}

#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct CancelToken(watch::Receiver<bool>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    async fn cancelled(&mut self) {
        let handle_dropped = self.0.wait_for(|&cancelled| cancelled).await.is_err();
        if handle_dropped {
            std::future::pending::<()>().await;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Cancelled { shown: usize },
}

/// Replays a path one cell at a time.
///
/// After each cell it waits `step`, or `corner` when the path turns there.
pub struct Playback {
    start: Position,
    path: Vec<Position>,
    delays: PlaybackDelays,
}

impl Playback {
    pub fn new(start: Position, path: &[Position], delays: PlaybackDelays) -> Self {
        Self {
            start,
            path: path.to_vec(),
            delays,
        }
    }

    pub fn delay_after(&self, index: usize) -> Duration {
        let prev = match index {
            0 => self.start,
            i => self.path[i - 1],
        };
        let next = self.path.get(index + 1).copied();

        if is_corner(prev, next) {
            self.delays.corner
        } else {
            self.delays.step
        }
    }

    pub async fn run(
        self,
        mut token: CancelToken,
        mut on_step: impl FnMut(usize, Position),
    ) -> PlaybackOutcome {
        for (index, &pos) in self.path.iter().enumerate() {
            if token.is_cancelled() {
                return PlaybackOutcome::Cancelled { shown: index };
            }

            on_step(index, pos);

            tokio::select! {
                _ = tokio::time::sleep(self.delay_after(index)) => {}
                _ = token.cancelled() => {
                    return PlaybackOutcome::Cancelled { shown: index + 1 };
                }
            }
        }

        PlaybackOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn l_path() -> Vec<Position> {
        vec![p(1, 0), p(2, 0), p(2, 1), p(2, 2)]
    }

    #[test]
    fn corners_take_longer() {
        let playback = Playback::new(p(0, 0), &l_path(), PlaybackDelays::default());

        let delays: Vec<_> = (0..4).map(|i| playback.delay_after(i).as_millis()).collect();
        assert_eq!(delays, vec![100, 200, 100, 100]);
    }

    #[tokio::test(start_paused = true)]
    async fn completes_and_reports_every_step() {
        let (_handle, token) = cancellation();
        let mut shown = Vec::new();

        let outcome = Playback::new(p(0, 0), &l_path(), PlaybackDelays::default())
            .run(token, |_, pos| shown.push(pos))
            .await;

        assert_eq!(outcome, PlaybackOutcome::Completed);
        assert_eq!(shown, l_path());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelling_one_playback_leaves_others_running() {
        let (first_handle, first_token) = cancellation();
        let (_second_handle, second_token) = cancellation();

        let first = Playback::new(p(0, 0), &l_path(), PlaybackDelays::default());
        let second = Playback::new(p(0, 0), &l_path(), PlaybackDelays::default());

        let first = tokio::spawn(first.run(first_token, |_, _| {}));
        let second = tokio::spawn(second.run(second_token, |_, _| {}));

        tokio::time::sleep(Duration::from_millis(150)).await;
        first_handle.cancel();

        assert_eq!(
            first.await.unwrap(),
            PlaybackOutcome::Cancelled { shown: 2 }
        );
        assert_eq!(second.await.unwrap(), PlaybackOutcome::Completed);
    }

    #[tokio::test]
    async fn cancelled_before_start_shows_nothing() {
        let (handle, token) = cancellation();
        handle.cancel();

        let outcome = Playback::new(p(0, 0), &l_path(), PlaybackDelays::from_millis(0, 0))
            .run(token, |_, _| panic!("nothing should be shown"))
            .await;

        assert_eq!(outcome, PlaybackOutcome::Cancelled { shown: 0 });
    }
}
