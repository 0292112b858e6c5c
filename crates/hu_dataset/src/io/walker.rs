use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    error::{DatasetError, Result},
    types::Sample,
};

/// Lazily walks `<root>/<label>/<file>` pairs.
///
/// Only immediate subdirectories of the root are treated as classes, and only
/// regular files directly inside them as samples. Entries are visited in file
/// name order so repeated runs see the same sequence.
#[derive(Debug)]
pub struct DatasetWalker {
    classes: std::vec::IntoIter<(String, PathBuf)>,
    current: Option<(String, std::vec::IntoIter<PathBuf>)>,
}

impl DatasetWalker {
    /// Open the dataset root. Fails if the root cannot be listed.
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let entries = sorted_entries(root).map_err(|source| DatasetError::InputDir {
            path: root.to_path_buf(),
            source,
        })?;

        let classes: Vec<(String, PathBuf)> = entries
            .into_iter()
            .filter(|path| path.is_dir())
            .filter_map(|path| {
                let label = path.file_name()?.to_string_lossy().into_owned();
                Some((label, path))
            })
            .collect();

        Ok(Self {
            classes: classes.into_iter(),
            current: None,
        })
    }
}

impl Iterator for DatasetWalker {
    type Item = Result<Sample>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((label, files)) = &mut self.current {
                if let Some(path) = files.next() {
                    return Some(Ok(Sample {
                        label: label.clone(),
                        path,
                    }));
                }
            }

            let (label, dir) = self.classes.next()?;
            match sorted_entries(&dir) {
                Ok(entries) => {
                    let files: Vec<PathBuf> = entries.into_iter().filter(|p| p.is_file()).collect();
                    self.current = Some((label, files.into_iter()));
                }
                Err(err) => {
                    self.current = None;
                    return Some(Err(err.into()));
                }
            }
        }
    }
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    paths.sort();
    Ok(paths)
}
