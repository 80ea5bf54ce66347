use std::{borrow::Cow, env, fs, path::PathBuf};

/// Cross-platform application paths. `FAIRSHARE_DATA_DIR` overrides the
/// platform data directory.
#[derive(Debug, Clone)]
pub struct AppPaths {
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, Cow<'static, str>> {
        let data_dir = Self::resolve_data_dir()?;

        fs::create_dir_all(&data_dir)
            .map_err(|e| Cow::from(format!("Failed to create data directory: {e}")))?;

        Ok(Self { data_dir })
    }

    fn resolve_data_dir() -> Result<PathBuf, Cow<'static, str>> {
        if let Some(dir) = env::var_os("FAIRSHARE_DATA_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let base = dirs::data_dir().ok_or(Cow::Borrowed("Could not determine data directory"))?;
        Ok(base.join("fairshare"))
    }

    pub fn salaries_file(&self) -> PathBuf {
        self.data_dir.join("salaries.json")
    }
}
