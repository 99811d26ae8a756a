use std::{fs::create_dir_all, io, path::PathBuf};

use xdg::BaseDirectories;

/// Returns the path to the profile cards configuration directory. If it doesn't exist when this
/// function is called, it will be created.
pub fn config_dir() -> io::Result<PathBuf> {
    let path = xdg_prefix()
        .get_config_home()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "$HOME must exist"))?;

    create_dir_all(&path)?;

    Ok(path)
}

fn xdg_prefix() -> BaseDirectories {
    BaseDirectories::with_prefix("profile-cards")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_dir_is_created() {
        let home = tempfile::tempdir().unwrap();
        // SAFETY: tests in this module don't read the environment concurrently
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", home.path());
        }

        let dir = config_dir().unwrap();

        assert!(dir.starts_with(home.path()));
        assert!(dir.ends_with("profile-cards"));
        assert!(dir.is_dir());
    }
}
