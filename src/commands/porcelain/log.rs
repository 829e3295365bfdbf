use crate::areas::repository::Repository;
use crate::artifacts::log::history::HistoryEntry;
use std::io::Write;

impl Repository {
    /// Print the history of the current branch, newest first
    ///
    /// Entries are written as they are read, so a damaged store still shows
    /// everything up to the point of failure before the error is returned.
    pub fn log(&mut self) -> anyhow::Result<Vec<HistoryEntry>> {
        let head = self.current_head_or_none()?;
        let mut entries = Vec::new();

        for entry in self.list_history(head) {
            let entry = entry?;
            writeln!(self.writer(), "{} - {}", entry.oid, entry.message())?;
            entries.push(entry);
        }

        Ok(entries)
    }
}
