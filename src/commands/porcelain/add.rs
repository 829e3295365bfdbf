use crate::areas::repository::Repository;
use crate::artifacts::objects::Tree;
use crate::artifacts::staging::staging_target::StagingTarget;
use log::info;
use std::io::Write;

impl Repository {
    pub async fn add(&mut self, target: &StagingTarget) -> anyhow::Result<Tree> {
        let staging = self.staging();
        let mut staging = staging.lock().await;

        let staged = staging.stage(target, self.workspace(), self.database())?;
        info!("staged {} file(s)", staged.len());

        for (path, object_id) in &staged {
            writeln!(self.writer(), "added {} ({})", path, object_id.to_short_oid())?;
        }

        Ok(staged)
    }
}
