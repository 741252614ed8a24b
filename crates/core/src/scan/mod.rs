mod read;
mod walker;

#[cfg(test)]
mod tests;

use std::path::Path;

pub(crate) use read::read_unit_text;
pub(crate) use walker::collect_source_files;

pub(crate) fn unit_label(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
