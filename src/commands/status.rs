use crate::areas::session::Session;
use crate::commands::render;

impl Session {
    /// Polls once and prints both sets with the working-tree summary.
    pub async fn status(&mut self, porcelain: bool) -> anyhow::Result<()> {
        let (tracker, scheduler) = self.parts();
        scheduler.poll_now(tracker).await?;

        let mut writer = self.writer();
        if porcelain {
            render::porcelain(&mut **writer, self.tracker())
        } else {
            render::human(&mut **writer, self.tracker())
        }
    }
}
