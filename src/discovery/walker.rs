use ignore::WalkBuilder;
use log::debug;
use std::path::Path;

/// Configures and builds the sequential `ignore::Walk` over `root`.
///
/// All standard filters are disabled: hidden files, `.gitignore`d files and
/// files under ignored directories are still candidates for decompression.
pub(super) fn build_walker(root: &Path, recursive: bool) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder.standard_filters(false);
    debug!("Configuring WalkBuilder: standard_filters disabled.");

    if !recursive {
        // Max depth 1 means only the immediate children of the root.
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    } else {
        debug!("Recursion enabled (no max depth).");
    }

    walker_builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn walked_names(root: &Path, recursive: bool) -> Vec<String> {
        let mut names: Vec<String> = build_walker(root, recursive)
            .filter_map(|e| e.ok())
            .filter(|e| e.depth() > 0)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_hidden_and_gitignored_entries_are_walked() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join(".gitignore"), "*.gz\n")?;
        fs::write(temp.path().join(".hidden.gz"), "x")?;
        fs::write(temp.path().join("ignored.gz"), "x")?;

        let names = walked_names(temp.path(), true);
        assert!(names.contains(&".hidden.gz".to_string()));
        assert!(names.contains(&"ignored.gz".to_string()));
        Ok(())
    }

    #[test]
    fn test_depth_limit_when_not_recursive() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("sub"))?;
        fs::write(temp.path().join("sub").join("deep.gz"), "x")?;
        fs::write(temp.path().join("top.gz"), "x")?;

        assert_eq!(walked_names(temp.path(), false), vec!["sub", "top.gz"]);
        assert_eq!(
            walked_names(temp.path(), true),
            vec!["deep.gz", "sub", "top.gz"]
        );
        Ok(())
    }
}
