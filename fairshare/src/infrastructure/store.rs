use fairshare_application::{SalaryStore, StoreError};
use std::{collections::BTreeMap, fs, io, path::PathBuf};

/// JSON key-value file backing the salary store. The file holds a flat
/// string map and is rewritten whole on every `set`.
pub struct FileSalaryStore {
    path: PathBuf,
}

impl FileSalaryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StoreError::Malformed(e.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StoreError::Read(e)),
        }
    }
}

impl SalaryStore for FileSalaryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSalaryStore {
        FileSalaryStore::new(dir.path().join("salaries.json"))
    }

    #[rstest]
    fn get_on_missing_file_returns_none() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        assert!(store.get("salary1").expect("get should succeed").is_none());
    }

    #[rstest]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        store.set("salary1", "3,000.00").expect("set should succeed");
        store.set("salary2", "1,000.00").expect("set should succeed");

        assert_eq!(
            store.get("salary1").expect("get should succeed").as_deref(),
            Some("3,000.00")
        );
        assert_eq!(
            store.get("salary2").expect("get should succeed").as_deref(),
            Some("1,000.00")
        );
    }

    #[rstest]
    fn set_overwrites_existing_key_and_keeps_others() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);

        store.set("salary1", "100.00").expect("set should succeed");
        store.set("salary1", "200.00").expect("set should succeed");
        store.set("salary2", "50.00").expect("set should succeed");

        assert_eq!(
            store.get("salary1").expect("get should succeed").as_deref(),
            Some("200.00")
        );
        assert_eq!(
            store.get("salary2").expect("get should succeed").as_deref(),
            Some("50.00")
        );
    }

    #[rstest]
    fn malformed_file_is_reported() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("salaries.json");
        fs::write(&path, "not json").expect("write fixture");
        let store = FileSalaryStore::new(path);

        assert!(matches!(
            store.get("salary1"),
            Err(StoreError::Malformed(_))
        ));
        assert!(matches!(
            store.set("salary1", "1.00"),
            Err(StoreError::Malformed(_))
        ));
    }
}
