use crate::error::Result;
use crate::model::CommentedFile;
use crate::report_helpers;

pub fn print_report(build: &str, files: &[CommentedFile]) {
    if files.is_empty() {
        println!("No new warnings for build {build}.");
        return;
    }

    let total: usize = files.iter().map(|f| f.comments.len()).sum();
    let max_path_len = report_helpers::max_width(files.iter().map(|f| f.path.as_str()), 4);
    // 1 (leading space) + path + 2 + 6 + 2 + message
    let header_width = max_path_len + 11 + 40;
    let separator = report_helpers::separator(header_width.max(78));

    println!("New warnings for build {build} ({total} in {} files)", files.len());
    println!("{separator}");
    println!(
        " {:<width$}  {:>6}  Message",
        "File",
        "Line",
        width = max_path_len
    );
    println!("{separator}");

    for file in files {
        for comment in &file.comments {
            println!(
                " {:<width$}  {:>6}  {}",
                file.path,
                comment.line,
                comment.message,
                width = max_path_len
            );
        }
    }

    println!("{separator}");
}

pub fn print_json(files: &[CommentedFile]) -> Result<()> {
    report_helpers::print_json_stdout(&files)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
