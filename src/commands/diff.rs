use crate::areas::scheduler::PollEvent;
use crate::areas::session::Session;
use crate::artifacts::status::file_change::Area;
use crate::commands::render;

impl Session {
    /// Selects `paths` in the working tree and prints their unstaged diff.
    /// With no paths, every unstaged change is selected.
    pub async fn diff(&mut self, paths: &[String]) -> anyhow::Result<()> {
        let (tracker, scheduler) = self.parts();
        scheduler.poll_now(tracker).await?;

        let paths = if paths.is_empty() {
            tracker
                .working_tree()
                .values()
                .filter(|change| change.secondary_state().is_change())
                .map(|change| change.display_path().to_string())
                .collect::<Vec<_>>()
        } else {
            paths.to_vec()
        };
        tracker.select_paths(Area::WorkingTree, &paths)?;

        if !scheduler.request_diff(tracker) {
            return Ok(());
        }

        for event in scheduler.settle(tracker).await {
            if let PollEvent::DiffFailed(e) = event {
                return Err(e.into());
            }
        }

        render::diff(&mut **self.writer(), self.tracker().diff())
    }
}
