//! Editor commands typed at the prompt

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use doc_model::{DocumentKind, LineRange, Position};
use editor_workspace::{
    ConfirmPrompt, SaveTarget, SpellChecker, TextAction, Workspace, XmlAction,
};

/// One input line, parsed
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct InputLine {
    #[command(subcommand)]
    pub command: EditorCommand,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum EditorCommand {
    /// Open a file, or switch to it if already open
    Load { file: String },
    /// Save the active file, a named file, or `all`
    Save { target: Option<String> },
    /// Create a new file
    Init {
        #[arg(value_parser = parse_kind)]
        kind: DocumentKind,
        file: String,
        #[arg(value_parser = ["with-log"])]
        with_log: Option<String>,
    },
    /// Close the active or a named file
    Close { file: Option<String> },
    /// Switch to an open file
    Edit { file: String },
    /// List open files
    EditorList,
    /// Show a directory tree
    DirTree { path: Option<String> },
    Undo,
    Redo,
    /// Save the workspace and quit
    Exit,
    LogOn { file: Option<String> },
    LogOff { file: Option<String> },
    LogShow { file: Option<String> },
    /// Add a line at the end
    Append {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Insert text at line:col
    Insert {
        #[arg(value_parser = Position::parse)]
        position: Position,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Delete chars at line:col
    Delete {
        #[arg(value_parser = Position::parse)]
        position: Position,
        length: usize,
    },
    /// Replace chars at line:col
    Replace {
        #[arg(value_parser = Position::parse)]
        position: Position,
        length: usize,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print lines, optionally start:end
    Show {
        #[arg(value_parser = LineRange::parse)]
        range: Option<LineRange>,
    },
    InsertBefore {
        tag: String,
        new_id: String,
        target_id: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    AppendChild {
        tag: String,
        new_id: String,
        parent_id: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    EditId { old_id: String, new_id: String },
    EditText {
        id: String,
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    DeleteElement { id: String },
    /// Show the element tree of the active or a named file
    XmlTree { file: Option<String> },
    SpellCheck { file: Option<String> },
}

fn parse_kind(name: &str) -> std::result::Result<DocumentKind, String> {
    DocumentKind::from_name(name).ok_or_else(|| format!("expected text or xml, got {name}"))
}

/// What to do after a command ran
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Print(String),
    Quiet,
    Exit,
}

pub fn execute(
    workspace: &mut Workspace,
    command: EditorCommand,
    prompt: &mut dyn ConfirmPrompt,
    checker: &dyn SpellChecker,
) -> Result<Reply> {
    let reply = match command {
        EditorCommand::Load { file } => {
            workspace.load(&file)?;
            Reply::Quiet
        }
        EditorCommand::Save { target } => {
            let target = match target.as_deref() {
                None => SaveTarget::Active,
                Some("all") => SaveTarget::All,
                Some(path) => SaveTarget::Path(path.to_string()),
            };
            let saved = workspace.save(target)?;
            if saved.is_empty() {
                Reply::Quiet
            } else {
                Reply::Print(format!("saved {}", saved.join(", ")))
            }
        }
        EditorCommand::Init {
            kind,
            file,
            with_log,
        } => {
            if DocumentKind::from_path(&file) != Some(kind) {
                bail!("{file} does not have the .{} extension", kind.extension());
            }
            workspace.init(&file, with_log.is_some())?;
            Reply::Quiet
        }
        EditorCommand::Close { file } => {
            workspace.close(file.as_deref(), prompt)?;
            Reply::Quiet
        }
        EditorCommand::Edit { file } => {
            workspace.edit(&file)?;
            Reply::Quiet
        }
        EditorCommand::EditorList => Reply::Print(workspace.editor_list()),
        EditorCommand::DirTree { path } => Reply::Print(workspace.dir_tree(path.as_deref())?),
        EditorCommand::Undo => Reply::Print(match workspace.undo()? {
            Some(description) => format!("undo {description}"),
            None => "nothing to undo".to_string(),
        }),
        EditorCommand::Redo => Reply::Print(match workspace.redo()? {
            Some(description) => format!("redo {description}"),
            None => "nothing to redo".to_string(),
        }),
        EditorCommand::Exit => {
            workspace.exit(prompt)?;
            Reply::Exit
        }
        EditorCommand::LogOn { file } => {
            workspace.log_on(file.as_deref())?;
            Reply::Quiet
        }
        EditorCommand::LogOff { file } => {
            workspace.log_off(file.as_deref())?;
            Reply::Quiet
        }
        EditorCommand::LogShow { file } => {
            Reply::Print(workspace.log_show(file.as_deref())?.trim_end().to_string())
        }
        EditorCommand::Append { text } => text_edit(workspace, TextAction::Append { text })?,
        EditorCommand::Insert { position, text } => {
            text_edit(workspace, TextAction::Insert { position, text })?
        }
        EditorCommand::Delete { position, length } => {
            text_edit(workspace, TextAction::Delete { position, length })?
        }
        EditorCommand::Replace {
            position,
            length,
            text,
        } => text_edit(
            workspace,
            TextAction::Replace {
                position,
                length,
                text,
            },
        )?,
        EditorCommand::Show { range } => {
            Reply::Print(workspace.show(range.unwrap_or_default())?)
        }
        EditorCommand::InsertBefore {
            tag,
            new_id,
            target_id,
            text,
        } => xml_edit(
            workspace,
            XmlAction::InsertBefore {
                tag,
                new_id,
                target_id,
                text,
            },
        )?,
        EditorCommand::AppendChild {
            tag,
            new_id,
            parent_id,
            text,
        } => xml_edit(
            workspace,
            XmlAction::AppendChild {
                tag,
                new_id,
                parent_id,
                text,
            },
        )?,
        EditorCommand::EditId { old_id, new_id } => {
            xml_edit(workspace, XmlAction::EditId { old_id, new_id })?
        }
        EditorCommand::EditText { id, text } => {
            xml_edit(workspace, XmlAction::EditText { id, text })?
        }
        EditorCommand::DeleteElement { id } => {
            xml_edit(workspace, XmlAction::DeleteElement { id })?
        }
        EditorCommand::XmlTree { file } => Reply::Print(workspace.xml_tree(file.as_deref())?),
        EditorCommand::SpellCheck { file } => {
            let issues = workspace.spell_check(file.as_deref(), checker)?;
            if issues.is_empty() {
                Reply::Print("no spelling issues".to_string())
            } else {
                Reply::Print(
                    issues
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n"),
                )
            }
        }
    };
    Ok(reply)
}

fn text_edit(workspace: &mut Workspace, action: TextAction) -> Result<Reply> {
    let description = workspace.text_command(action)?;
    tracing::debug!(%description, "executed");
    Ok(Reply::Quiet)
}

fn xml_edit(workspace: &mut Workspace, action: XmlAction) -> Result<Reply> {
    let description = workspace.xml_command(action)?;
    tracing::debug!(%description, "executed");
    Ok(Reply::Quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use editor_workspace::WordListChecker;
    use store::EditorSettings;
    use tempfile::TempDir;

    fn parse(words: &[&str]) -> EditorCommand {
        InputLine::try_parse_from(words).unwrap().command
    }

    fn run(workspace: &mut Workspace, words: &[&str]) -> Result<Reply> {
        let checker = WordListChecker::english();
        let mut never = |_: &str| false;
        execute(workspace, parse(words), &mut never, &checker)
    }

    #[test]
    fn test_parse_text_commands() {
        assert_eq!(
            parse(&["insert", "1:7", "Rust"]),
            EditorCommand::Insert {
                position: Position::new(1, 7),
                text: "Rust".into()
            }
        );
        assert_eq!(
            parse(&["append", "-- dashes"]),
            EditorCommand::Append {
                text: "-- dashes".into()
            }
        );
        assert_eq!(
            parse(&["show", "2:4"]),
            EditorCommand::Show {
                range: Some(LineRange::new(2, 4))
            }
        );
        assert_eq!(parse(&["show"]), EditorCommand::Show { range: None });
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(InputLine::try_parse_from(["insert", "one", "x"]).is_err());
        assert!(InputLine::try_parse_from(["delete", "1:1", "many"]).is_err());
        assert!(InputLine::try_parse_from(["init", "json", "a.json"]).is_err());
        assert!(InputLine::try_parse_from(["init", "text", "a.txt", "verbose"]).is_err());
        assert!(InputLine::try_parse_from(["frobnicate"]).is_err());
    }

    #[test]
    fn test_parse_xml_commands() {
        assert_eq!(
            parse(&["insert-before", "book", "b0", "b1"]),
            EditorCommand::InsertBefore {
                tag: "book".into(),
                new_id: "b0".into(),
                target_id: "b1".into(),
                text: None
            }
        );
        assert_eq!(
            parse(&["init", "xml", "a.xml", "with-log"]),
            EditorCommand::Init {
                kind: DocumentKind::Xml,
                file: "a.xml".into(),
                with_log: Some("with-log".into())
            }
        );
    }

    #[test]
    fn test_init_checks_extension() {
        let dir = TempDir::new().unwrap();
        let mut workspace = Workspace::new(dir.path(), EditorSettings::default());
        assert!(run(&mut workspace, &["init", "text", "a.xml"]).is_err());
        assert_eq!(run(&mut workspace, &["init", "text", "a.txt"]).unwrap(), Reply::Quiet);
    }

    #[test]
    fn test_session() {
        let dir = TempDir::new().unwrap();
        let mut workspace = Workspace::new(dir.path(), EditorSettings::default());

        run(&mut workspace, &["init", "text", "a.txt"]).unwrap();
        run(&mut workspace, &["append", "Hello World"]).unwrap();
        run(&mut workspace, &["insert", "1:7", "Rust "]).unwrap();
        assert_eq!(
            run(&mut workspace, &["show"]).unwrap(),
            Reply::Print("1: Hello Rust World".into())
        );
        assert_eq!(
            run(&mut workspace, &["undo"]).unwrap(),
            Reply::Print("undo insert 1:7 \"Rust \"".into())
        );
        assert_eq!(
            run(&mut workspace, &["spell-check"]).unwrap(),
            Reply::Print("no spelling issues".into())
        );
        assert_eq!(
            run(&mut workspace, &["save"]).unwrap(),
            Reply::Print("saved a.txt".into())
        );
        assert_eq!(run(&mut workspace, &["exit"]).unwrap(), Reply::Exit);
        assert!(dir.path().join(".editor_workspace").exists());
    }

    #[test]
    fn test_xml_command_on_text_editor_fails() {
        let dir = TempDir::new().unwrap();
        let mut workspace = Workspace::new(dir.path(), EditorSettings::default());
        run(&mut workspace, &["init", "text", "a.txt"]).unwrap();
        assert!(run(&mut workspace, &["delete-element", "x"]).is_err());
        assert!(run(&mut workspace, &["xml-tree"]).is_err());
    }
}
