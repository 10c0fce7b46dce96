use crate::areas::scheduler::PollEvent;
use crate::areas::session::Session;
use crate::commands::render;
use colored::Colorize;
use std::io::Write;
use tokio::time::MissedTickBehavior;

impl Session {
    /// Drives the scheduler on the configured tick interval and prints a
    /// summary line whenever a poll changes the sets. Stops on Ctrl-C or
    /// after `max_polls` completed polls.
    pub async fn watch(&mut self, max_polls: Option<usize>, porcelain: bool) -> anyhow::Result<()> {
        let mut interval = tokio::time::interval(self.config().tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut polls = 0usize;
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        tracing::info!(
            root = %self.root().display(),
            update_rate = self.config().update_rate,
            "watching repository"
        );

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("interrupted, stopping watch");
                    break;
                }
                _ = interval.tick() => {
                    let (tracker, scheduler) = self.parts();
                    let events = scheduler.tick(tracker);

                    for event in events {
                        match event {
                            PollEvent::Reconciled(summary) => {
                                if polls == 0 || !summary.is_unchanged() {
                                    self.report(porcelain)?;
                                }
                                polls += 1;
                            }
                            PollEvent::PollFailed(e) => {
                                writeln!(self.writer(), "{} {}", "poll failed:".red(), e)?;
                                polls += 1;
                            }
                            _ => {}
                        }
                    }
                }
            }

            if max_polls.is_some_and(|max| polls >= max) {
                break;
            }
        }

        Ok(())
    }

    fn report(&self, porcelain: bool) -> anyhow::Result<()> {
        let tracker = self.tracker();
        let mut writer = self.writer();

        if porcelain {
            render::porcelain(&mut **writer, tracker)?;
        } else {
            let stamp = tracker
                .last_polled()
                .map(|time| time.format("%H:%M:%S").to_string())
                .unwrap_or_default();
            writeln!(writer, "[{}] {}", stamp.dimmed(), tracker.stats())?;
        }

        writer.flush()?;
        Ok(())
    }
}
