//! Config file discovery

use std::path::{Path, PathBuf};

/// Name of the config file looked up in each search location
pub const CONFIG_FILE: &str = ".copilot-session.toml";

/// Candidate config file paths, highest priority first
///
/// The working directory wins over the home directory. A home directory that
/// is also the working directory is searched once.
pub fn search_paths(cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::with_capacity(2);
    for dir in [cwd, home].into_iter().flatten() {
        let candidate = dir.join(CONFIG_FILE);
        if !paths.contains(&candidate) {
            paths.push(candidate);
        }
    }
    paths
}

/// Read the first candidate that exists, returning its path and content
pub fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, String)> {
    candidates.iter().find_map(|path| match std::fs::read_to_string(path) {
        Ok(content) => Some((path.clone(), content)),
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    })
}

/// Load config file content from the working directory, then the home directory
pub fn load_config_file() -> Option<String> {
    let cwd = std::env::current_dir().ok();
    let home = dirs::home_dir();
    let (path, content) = read_first(&search_paths(cwd.as_deref(), home.as_deref()))?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_search_paths_order_and_dedup() {
        let cwd = Path::new("/work/project");
        let home = Path::new("/home/user");

        assert_eq!(
            search_paths(Some(cwd), Some(home)),
            vec![cwd.join(CONFIG_FILE), home.join(CONFIG_FILE)]
        );
        assert_eq!(search_paths(Some(home), Some(home)), vec![home.join(CONFIG_FILE)]);
        assert_eq!(search_paths(None, Some(home)), vec![home.join(CONFIG_FILE)]);
        assert!(search_paths(None, None).is_empty());
    }

    #[test]
    fn test_working_directory_wins_over_home() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().join("cwd");
        let home = tmp.path().join("home");
        fs::create_dir_all(&cwd).unwrap();
        fs::create_dir_all(&home).unwrap();
        fs::write(cwd.join(CONFIG_FILE), "backend_uri = \"https://cwd/\"").unwrap();
        fs::write(home.join(CONFIG_FILE), "backend_uri = \"https://home/\"").unwrap();

        let (path, content) = read_first(&search_paths(Some(&cwd), Some(&home))).unwrap();
        assert_eq!(path, cwd.join(CONFIG_FILE));
        assert!(content.contains("https://cwd/"));
    }

    #[test]
    fn test_falls_back_to_home() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().join("cwd");
        let home = tmp.path().join("home");
        fs::create_dir_all(&cwd).unwrap();
        fs::create_dir_all(&home).unwrap();
        fs::write(home.join(CONFIG_FILE), "max_alerts = 5").unwrap();

        let (path, content) = read_first(&search_paths(Some(&cwd), Some(&home))).unwrap();
        assert_eq!(path, home.join(CONFIG_FILE));
        assert_eq!(content, "max_alerts = 5");
    }

    #[test]
    fn test_no_config_anywhere() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_first(&search_paths(Some(tmp.path()), None)).is_none());
    }
}
