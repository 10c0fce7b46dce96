use crate::areas::session::Session;
use crate::areas::vcs::IndexWriter;
use crate::artifacts::status::action::FileAction;
use crate::artifacts::status::file_change::Area;

impl Session {
    pub async fn stage(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.update_index(FileAction::Stage, Area::WorkingTree, paths, false)
            .await
    }

    pub async fn unstage(&mut self, paths: &[String]) -> anyhow::Result<()> {
        self.update_index(FileAction::Unstage, Area::Staged, paths, false)
            .await
    }

    /// Deletes working-tree paths and stages the deletion. Files with unstaged
    /// edits are only removed with `force`.
    pub async fn remove(&mut self, paths: &[String], force: bool) -> anyhow::Result<()> {
        self.update_index(FileAction::Remove, Area::WorkingTree, paths, force)
            .await
    }

    async fn update_index(
        &mut self,
        action: FileAction,
        area: Area,
        paths: &[String],
        force: bool,
    ) -> anyhow::Result<()> {
        let (tracker, scheduler) = self.parts();
        scheduler.poll_now(tracker).await?;

        tracker.select_paths(area, paths)?;
        let plan = tracker.plan(action)?;
        if !plan.at_risk.is_empty() && !force {
            let listing = plan
                .at_risk
                .iter()
                .map(|path| format!("\t{path}"))
                .collect::<Vec<_>>()
                .join("\n");
            anyhow::bail!(
                "the following files have unstaged changes that would be lost:\n{listing}\n\
                 use --force to remove them anyway"
            );
        }

        tracing::info!(action = %plan.action, paths = ?plan.paths, "updating index");
        scheduler.fetcher().apply(&plan, force).await?;
        tracker.clear_selection();

        Ok(())
    }
}
