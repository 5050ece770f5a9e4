use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("FSMBTI_DATA_DIR")
            && !dir.is_empty()
        {
            self.data_dir = PathBuf::from(dir);
        }

        if let Ok(key) = std::env::var("FSMBTI_STORAGE_KEY")
            && !key.is_empty()
        {
            self.storage_key = key;
        }

        if let Ok(name) = std::env::var("FSMBTI_NICKNAME")
            && !name.is_empty()
        {
            self.nickname = Some(name);
        }

        if let Ok(link) = std::env::var("FSMBTI_SHARE_LINK")
            && !link.is_empty()
        {
            self.share.link = Some(link);
        }

        if let Ok(path) = std::env::var("FSMBTI_QUESTION_BANK")
            && !path.is_empty()
        {
            self.question_bank = Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FSMBTI_TYPE_CATALOG")
            && !path.is_empty()
        {
            self.type_catalog = Some(PathBuf::from(path));
        }
    }
}
