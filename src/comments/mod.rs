pub mod report;

use std::collections::BTreeMap;

use crate::model::{AnnotationSet, CommentedFile, LineComment};

/// Group warnings into one `CommentedFile` per path.
///
/// Files come out sorted by path, and comments within a file by line and
/// then message, so identical input always yields identical output.
pub fn assemble(novel: &AnnotationSet) -> Vec<CommentedFile> {
    let mut by_file: BTreeMap<&str, Vec<LineComment>> = BTreeMap::new();
    for annotation in novel {
        by_file
            .entry(annotation.file_path.as_str())
            .or_default()
            .push(LineComment {
                line: annotation.line,
                message: annotation.message.clone(),
            });
    }

    by_file
        .into_iter()
        .map(|(path, comments)| CommentedFile {
            path: path.to_string(),
            comments,
        })
        .collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
