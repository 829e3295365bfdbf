use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    pub fn hash_object(&mut self, object_path: &str, write: bool) -> anyhow::Result<ObjectId> {
        // read object file
        let object_data = self
            .workspace()
            .read_file(object_path)?
            .ok_or_else(|| anyhow::anyhow!("cannot read '{}': no such file", object_path))?;

        // hash, or hash and store as compressed object file
        let object_id = if write {
            self.database().save(&object_data)?
        } else {
            self.database().hash(&object_data)?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(object_id)
    }
}
