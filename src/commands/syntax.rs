//! Implementation of the `markgate syntax` command.

use crate::cli::SyntaxArgs;
use crate::config::Config;
use crate::error::Result;
use crate::syntax::{CommentSyntax, SyntaxTable};

/// Print the resolved comment syntax for each path.
pub fn cmd_syntax(args: SyntaxArgs) -> Result<()> {
    let cwd = super::current_dir()?;
    let config = Config::discover(args.config.as_deref(), &cwd)?;
    let table = config.syntax_table();

    for line in describe_syntax(&table, &args.paths) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per path: `path: line=<tok> block=<start> <end>`.
pub fn describe_syntax(table: &SyntaxTable, paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .map(|path| format!("{}: {}", path, format_syntax(&table.resolve(path))))
        .collect()
}

fn format_syntax(syntax: &CommentSyntax) -> String {
    if !syntax.has_line_comment() {
        return "no line comment (markers disabled)".to_string();
    }
    format!(
        "line={} block={} {}",
        syntax.line, syntax.block_start, syntax.block_end
    )
}
