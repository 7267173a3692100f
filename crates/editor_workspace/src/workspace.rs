//! Working set of open editors
//!
//! Paths given by the user are resolved against the workspace directory.
//! At most one editor is active; closing it activates the most recently
//! active editor that is still open.

use crate::spellcheck::{self, SpellChecker, SpellIssue};
use crate::{ConfirmPrompt, OpenDocument, Result, SaveTarget, TextAction, WorkspaceError, XmlAction};
use doc_model::{DocumentKind, LineRange};
use edit_engine::{EditorEvent, EditorId, EditorInfo};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use store::{EditorSettings, OpenFileRecord, SessionLog, WorkspaceSnapshot};

pub struct Workspace {
    dir: PathBuf,
    settings: EditorSettings,
    /// Open editors in the order they were opened
    editors: Vec<OpenDocument>,
    active: Option<EditorId>,
    /// Previously active editors, most recent last
    recent: Vec<EditorId>,
    session_log: Rc<RefCell<SessionLog>>,
}

impl Workspace {
    pub fn new(dir: impl Into<PathBuf>, settings: EditorSettings) -> Self {
        Self {
            dir: dir.into(),
            settings,
            editors: Vec::new(),
            active: None,
            recent: Vec::new(),
            session_log: Rc::new(RefCell::new(SessionLog::new())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Infos of all open editors, in opening order
    pub fn editors(&self) -> impl Iterator<Item = &EditorInfo> {
        self.editors.iter().map(OpenDocument::info)
    }

    pub fn active(&self) -> Option<&OpenDocument> {
        let id = self.active?;
        self.editors.iter().find(|e| e.id() == id)
    }

    /// Path of the active editor as shown to the user
    pub fn active_path(&self) -> Option<String> {
        self.active().map(|e| self.display_path(e.path()))
    }

    /// Open `path`, or switch to it if it is already open.
    ///
    /// A file that does not exist yet opens as an empty, modified document.
    pub fn load(&mut self, path: &str) -> Result<()> {
        let resolved = self.resolve(path);
        if let Some(index) = self.find(&resolved) {
            let id = self.editors[index].id();
            self.set_active(Some(id));
            return Ok(());
        }

        let kind = kind_of(&resolved)?;
        let editor = if resolved.exists() {
            OpenDocument::load(&resolved, kind)?
        } else {
            OpenDocument::create(&resolved, kind, false)
        };
        let reason = format!("load {}", self.display_path(&resolved));
        self.open(editor, reason);
        Ok(())
    }

    /// Create a new, unsaved document. Fails if the file exists or is open.
    pub fn init(&mut self, path: &str, with_log: bool) -> Result<()> {
        let resolved = self.resolve(path);
        if resolved.exists() || self.find(&resolved).is_some() {
            return Err(WorkspaceError::AlreadyExists(path.to_string()));
        }

        let kind = kind_of(&resolved)?;
        let with_log = with_log || self.settings.log_enabled_by_default;
        let editor = OpenDocument::create(&resolved, kind, with_log);
        let shown = self.display_path(&resolved);
        let reason = if with_log {
            format!("init {shown} with-log")
        } else {
            format!("init {shown}")
        };
        self.open(editor, reason);
        Ok(())
    }

    /// Save one editor or all of them. Returns the saved paths.
    pub fn save(&mut self, target: SaveTarget) -> Result<Vec<String>> {
        let indices: Vec<usize> = match target {
            SaveTarget::All => {
                if self.editors.is_empty() {
                    tracing::warn!("no open editors to save");
                }
                (0..self.editors.len()).collect()
            }
            SaveTarget::Active => vec![self.target(None)?],
            SaveTarget::Path(path) => vec![self.target(Some(path.as_str()))?],
        };

        let mut saved = Vec::with_capacity(indices.len());
        for index in indices {
            self.editors[index].save()?;
            saved.push(self.display_path(self.editors[index].path()));
        }
        Ok(saved)
    }

    /// Close an editor, asking whether to save unsaved changes first
    pub fn close(&mut self, path: Option<&str>, prompt: &mut dyn ConfirmPrompt) -> Result<()> {
        let index = self.target(path)?;
        let shown = self.display_path(self.editors[index].path());

        if self.editors[index].is_modified()
            && prompt.confirm(&format!("{shown} has unsaved changes. Save?"))
        {
            self.editors[index].save()?;
        }

        let mut editor = self.editors.remove(index);
        editor.notify_closed();
        tracing::debug!(path = %shown, "closed");

        if self.active == Some(editor.id()) {
            self.active = None;
            let next = self.last_active();
            self.set_active(next);
        }
        Ok(())
    }

    /// Make an already open editor active
    pub fn edit(&mut self, path: &str) -> Result<()> {
        let index = self.target(Some(path))?;
        let id = self.editors[index].id();
        self.set_active(Some(id));
        Ok(())
    }

    /// One row per editor: `* path [modified]`, `*` marking the active one
    pub fn editor_list(&self) -> String {
        self.editors
            .iter()
            .map(|editor| {
                let marker = if Some(editor.id()) == self.active { '*' } else { ' ' };
                let mut row = format!("{marker} {}", self.display_path(editor.path()));
                if editor.is_modified() {
                    row.push_str(" [modified]");
                }
                row
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn undo(&mut self) -> Result<Option<String>> {
        let index = self.target(None)?;
        self.editors[index].undo()
    }

    pub fn redo(&mut self) -> Result<Option<String>> {
        let index = self.target(None)?;
        self.editors[index].redo()
    }

    pub fn log_on(&mut self, path: Option<&str>) -> Result<()> {
        let index = self.target(path)?;
        self.editors[index].set_logging(true);
        Ok(())
    }

    pub fn log_off(&mut self, path: Option<&str>) -> Result<()> {
        let index = self.target(path)?;
        self.editors[index].set_logging(false);
        Ok(())
    }

    /// Session log content of an editor's file
    pub fn log_show(&self, path: Option<&str>) -> Result<String> {
        let index = self.target(path)?;
        let content = self.session_log.borrow().show(self.editors[index].path())?;
        Ok(content)
    }

    /// Run a text edit on the active editor. Returns the command description.
    pub fn text_command(&mut self, action: TextAction) -> Result<String> {
        let index = self.target(None)?;
        match &mut self.editors[index] {
            OpenDocument::Text(editor) => Ok(editor.execute(action.into_command())?),
            OpenDocument::Xml(_) => Err(WorkspaceError::WrongDocumentKind {
                expected: DocumentKind::Text,
                actual: DocumentKind::Xml,
            }),
        }
    }

    /// Run a markup edit on the active editor. Returns the command description.
    pub fn xml_command(&mut self, action: XmlAction) -> Result<String> {
        let index = self.target(None)?;
        match &mut self.editors[index] {
            OpenDocument::Xml(editor) => Ok(editor.execute(action.into_command())?),
            OpenDocument::Text(_) => Err(WorkspaceError::WrongDocumentKind {
                expected: DocumentKind::Xml,
                actual: DocumentKind::Text,
            }),
        }
    }

    /// Numbered lines of the active text editor
    pub fn show(&self, range: LineRange) -> Result<String> {
        let index = self.target(None)?;
        match &self.editors[index] {
            OpenDocument::Text(editor) => Ok(editor.document().show(range)),
            OpenDocument::Xml(_) => Err(WorkspaceError::WrongDocumentKind {
                expected: DocumentKind::Text,
                actual: DocumentKind::Xml,
            }),
        }
    }

    /// Element tree of a markup editor
    pub fn xml_tree(&self, path: Option<&str>) -> Result<String> {
        let index = self.target(path)?;
        match &self.editors[index] {
            OpenDocument::Xml(editor) => Ok(render_model::render_xml_tree(editor.document())),
            OpenDocument::Text(_) => Err(WorkspaceError::WrongDocumentKind {
                expected: DocumentKind::Xml,
                actual: DocumentKind::Text,
            }),
        }
    }

    /// Directory tree of `path`, or of the workspace directory
    pub fn dir_tree(&self, path: Option<&str>) -> Result<String> {
        let root = match path {
            Some(path) => self.resolve(path),
            None => self.dir.clone(),
        };
        Ok(render_model::render_dir_tree(root)?)
    }

    pub fn spell_check(
        &self,
        path: Option<&str>,
        checker: &dyn SpellChecker,
    ) -> Result<Vec<SpellIssue>> {
        let index = self.target(path)?;
        Ok(match &self.editors[index] {
            OpenDocument::Text(editor) => spellcheck::check_text(editor.document(), checker),
            OpenDocument::Xml(editor) => spellcheck::check_xml(editor.document(), checker),
        })
    }

    /// Open files and the active one, for writing on exit
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            open_files: self
                .editors
                .iter()
                .map(|editor| OpenFileRecord {
                    path: PathBuf::from(self.display_path(editor.path())),
                    kind: editor.kind(),
                    modified: editor.is_modified(),
                    logging_enabled: editor.info().logging_enabled,
                })
                .collect(),
            active: self.active_path().map(PathBuf::from),
        }
    }

    /// Reopen the files of a snapshot. Files that fail to open are skipped.
    pub fn restore(&mut self, snapshot: WorkspaceSnapshot) {
        for record in snapshot.open_files {
            let resolved = self.resolve_path(&record.path);
            if self.find(&resolved).is_some() {
                continue;
            }
            let opened = if resolved.exists() {
                OpenDocument::load(&resolved, record.kind)
            } else {
                Ok(OpenDocument::create(&resolved, record.kind, false))
            };
            match opened {
                Ok(mut editor) => {
                    editor.set_modified(record.modified);
                    editor.set_logging(record.logging_enabled);
                    self.attach(editor);
                }
                Err(err) => {
                    tracing::warn!(path = %resolved.display(), error = %err, "could not reopen file");
                }
            }
        }

        let active = snapshot
            .active
            .map(|path| self.resolve_path(&path))
            .and_then(|path| self.find(&path))
            .map(|index| self.editors[index].id());
        self.active = None;
        self.set_active(active);
    }

    /// Path of the snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        self.dir.join(&self.settings.workspace_file)
    }

    /// Restore the snapshot written by a previous [`exit`](Self::exit).
    /// Returns false when there is none.
    pub fn restore_from_disk(&mut self) -> Result<bool> {
        match WorkspaceSnapshot::load(self.snapshot_path())? {
            Some(snapshot) => {
                self.restore(snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Offer to save every modified editor, then write the snapshot
    pub fn exit(&mut self, prompt: &mut dyn ConfirmPrompt) -> Result<()> {
        for index in 0..self.editors.len() {
            if !self.editors[index].is_modified() {
                continue;
            }
            let shown = self.display_path(self.editors[index].path());
            if prompt.confirm(&format!("{shown} has unsaved changes. Save?")) {
                self.editors[index].save()?;
            }
        }
        self.snapshot().save(self.snapshot_path())?;
        Ok(())
    }

    fn open(&mut self, editor: OpenDocument, reason: String) {
        let id = self.attach(editor);
        self.set_active(Some(id));
        if let Some(editor) = self.editors.iter_mut().find(|e| e.id() == id) {
            editor.notify_started(reason);
        }
    }

    /// Add an editor with the session log listening to it
    fn attach(&mut self, editor: OpenDocument) -> EditorId {
        let mut editor = editor.with_history_limit(self.settings.history_limit);
        let log = Rc::clone(&self.session_log);
        editor.subscribe(Box::new(move |event: &EditorEvent| {
            if event.logging_enabled {
                log.borrow_mut().append(&event.path, &event.log_line());
            }
        }));
        let id = editor.id();
        tracing::debug!(path = %editor.path().display(), kind = %editor.kind(), "opened");
        self.editors.push(editor);
        id
    }

    fn set_active(&mut self, id: Option<EditorId>) {
        if let Some(current) = self.active {
            self.recent.retain(|recent| *recent != current && Some(*recent) != id);
            if Some(current) != id {
                self.recent.push(current);
            }
        }
        self.active = id;
        match self.active_path() {
            Some(path) => tracing::info!(%path, "active editor"),
            None => tracing::info!("no active editor"),
        }
    }

    /// Most recently active editor that is still open
    fn last_active(&mut self) -> Option<EditorId> {
        while let Some(id) = self.recent.pop() {
            if self.editors.iter().any(|e| e.id() == id) {
                return Some(id);
            }
        }
        None
    }

    /// Index of the editor for `path`, or of the active editor
    fn target(&self, path: Option<&str>) -> Result<usize> {
        match path {
            Some(path) => self
                .find(&self.resolve(path))
                .ok_or_else(|| WorkspaceError::NotOpen(path.to_string())),
            None => {
                let id = self.active.ok_or(WorkspaceError::NoActiveEditor)?;
                self.editors
                    .iter()
                    .position(|e| e.id() == id)
                    .ok_or(WorkspaceError::NoActiveEditor)
            }
        }
    }

    fn find(&self, resolved: &Path) -> Option<usize> {
        self.editors.iter().position(|e| e.path() == resolved)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.resolve_path(Path::new(path))
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }

    /// Path relative to the workspace directory when it lies inside it
    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

fn kind_of(path: &Path) -> Result<DocumentKind> {
    DocumentKind::from_path(path)
        .ok_or_else(|| WorkspaceError::UnsupportedFileType(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WordListChecker;
    use doc_model::Position;
    use tempfile::TempDir;

    fn workspace(dir: &TempDir) -> Workspace {
        Workspace::new(dir.path(), EditorSettings::default())
    }

    fn never(_: &str) -> bool {
        false
    }

    fn append(ws: &mut Workspace, text: &str) -> String {
        ws.text_command(TextAction::Append { text: text.to_string() }).unwrap()
    }

    #[test]
    fn test_load_missing_file_is_new_and_modified() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.load("notes.txt").unwrap();
        assert_eq!(ws.active_path().as_deref(), Some("notes.txt"));
        assert_eq!(ws.editor_list(), "* notes.txt [modified]");
    }

    #[test]
    fn test_load_existing_and_switch_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        let mut ws = workspace(&dir);

        ws.load("a.txt").unwrap();
        ws.load("b.txt").unwrap();
        assert_eq!(ws.editor_list(), "  a.txt\n* b.txt [modified]");

        ws.load("a.txt").unwrap();
        assert_eq!(ws.active_path().as_deref(), Some("a.txt"));
        assert_eq!(ws.editors().count(), 2);
        assert_eq!(ws.show(LineRange::all()).unwrap(), "1: alpha");
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        assert!(matches!(
            ws.load("image.png").unwrap_err(),
            WorkspaceError::UnsupportedFileType(_)
        ));
        assert!(ws.active().is_none());
    }

    #[test]
    fn test_init_conflicts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("exists.txt"), "").unwrap();
        let mut ws = workspace(&dir);

        assert!(matches!(
            ws.init("exists.txt", false).unwrap_err(),
            WorkspaceError::AlreadyExists(_)
        ));
        ws.init("new.xml", false).unwrap();
        assert!(matches!(
            ws.init("new.xml", false).unwrap_err(),
            WorkspaceError::AlreadyExists(_)
        ));
    }

    #[test]
    fn test_init_with_log_writes_session_log() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("log.txt", true).unwrap();
        append(&mut ws, "hello");
        ws.undo().unwrap();
        ws.save(SaveTarget::Active).unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("log.txt")).unwrap(),
            "# log"
        );
        let log = ws.log_show(None).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert!(lines[0].starts_with("session start at "));
        assert!(lines[1].ends_with(" init log.txt with-log"));
        assert!(lines[2].ends_with(" append \"hello\""));
        assert!(lines[3].ends_with(" undo append \"hello\""));
        assert!(lines[4].ends_with(" save"));
    }

    #[test]
    fn test_log_off_stops_logging() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("a.txt", false).unwrap();
        append(&mut ws, "quiet");
        assert!(ws.log_show(None).is_err());

        ws.log_on(Some("a.txt")).unwrap();
        append(&mut ws, "loud");
        ws.log_off(None).unwrap();
        append(&mut ws, "quiet again");

        let log = ws.log_show(Some("a.txt")).unwrap();
        assert_eq!(log.lines().count(), 2);
        assert!(log.contains("append \"loud\""));
    }

    #[test]
    fn test_text_and_xml_dispatch() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("doc.xml", false).unwrap();

        let err = ws
            .text_command(TextAction::Append { text: "x".into() })
            .unwrap_err();
        assert!(matches!(
            err,
            WorkspaceError::WrongDocumentKind {
                expected: DocumentKind::Text,
                actual: DocumentKind::Xml
            }
        ));

        let description = ws
            .xml_command(XmlAction::AppendChild {
                tag: "p".into(),
                new_id: "p1".into(),
                parent_id: "root".into(),
                text: Some("hi".into()),
            })
            .unwrap();
        assert_eq!(description, "append-child p p1 root \"hi\"");
        assert_eq!(
            ws.xml_tree(None).unwrap(),
            "└── root [id=\"root\"]\n    └── p [id=\"p1\"]\n        └── \"hi\""
        );

        ws.init("doc.txt", false).unwrap();
        ws.text_command(TextAction::Insert {
            position: Position::new(1, 1),
            text: "Line 1".into(),
        })
        .unwrap();
        assert!(ws.xml_tree(None).is_err());
        assert!(ws.xml_tree(Some("doc.xml")).is_ok());
    }

    #[test]
    fn test_undo_redo_on_active_editor() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        assert!(matches!(ws.undo().unwrap_err(), WorkspaceError::NoActiveEditor));

        ws.init("a.txt", false).unwrap();
        append(&mut ws, "one");
        append(&mut ws, "two");
        assert_eq!(ws.undo().unwrap().as_deref(), Some("append \"two\""));
        assert_eq!(ws.redo().unwrap().as_deref(), Some("append \"two\""));
        assert_eq!(ws.redo().unwrap(), None);
        assert_eq!(ws.show(LineRange::new(2, 9)).unwrap(), "2: two");
    }

    #[test]
    fn test_close_activates_previous_editor() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("a.txt", false).unwrap();
        ws.init("b.txt", false).unwrap();
        ws.init("c.txt", false).unwrap();
        ws.edit("a.txt").unwrap();
        ws.edit("c.txt").unwrap();

        ws.close(None, &mut never).unwrap();
        assert_eq!(ws.active_path().as_deref(), Some("a.txt"));
        ws.close(None, &mut never).unwrap();
        assert_eq!(ws.active_path().as_deref(), Some("b.txt"));
        ws.close(None, &mut never).unwrap();
        assert!(ws.active().is_none());
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_close_other_editor_keeps_active() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("a.txt", false).unwrap();
        ws.init("b.txt", false).unwrap();
        ws.close(Some("a.txt"), &mut never).unwrap();
        assert_eq!(ws.active_path().as_deref(), Some("b.txt"));
        assert!(matches!(
            ws.close(Some("a.txt"), &mut never).unwrap_err(),
            WorkspaceError::NotOpen(_)
        ));
    }

    #[test]
    fn test_close_asks_to_save_modified() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("a.txt", false).unwrap();
        append(&mut ws, "keep me");

        let mut questions = Vec::new();
        ws.close(None, &mut |q: &str| {
            questions.push(q.to_string());
            true
        })
        .unwrap();
        assert_eq!(questions, ["a.txt has unsaved changes. Save?"]);
        assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "keep me");
    }

    #[test]
    fn test_close_logged_editor_records_close() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        ws.init("a.txt", true).unwrap();
        ws.close(Some("a.txt"), &mut never).unwrap();

        let log = std::fs::read_to_string(dir.path().join(".a.txt.log")).unwrap();
        assert!(log.lines().last().unwrap().ends_with(" close"));
        assert!(ws.active().is_none());
    }

    #[test]
    fn test_save_all() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        assert!(ws.save(SaveTarget::All).unwrap().is_empty());

        ws.init("a.txt", false).unwrap();
        ws.init("b.xml", false).unwrap();
        let saved = ws.save(SaveTarget::All).unwrap();
        assert_eq!(saved, ["a.txt", "b.xml"]);
        assert!(dir.path().join("b.xml").exists());
        assert_eq!(ws.editor_list(), "  a.txt\n* b.xml");

        assert!(matches!(
            ws.save(SaveTarget::Path("c.txt".into())).unwrap_err(),
            WorkspaceError::NotOpen(_)
        ));
    }

    #[test]
    fn test_spell_check_both_kinds() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        let checker = WordListChecker::new(["hello", "world"]);

        ws.init("a.txt", false).unwrap();
        append(&mut ws, "hello wrld");
        let issues = ws.spell_check(None, &checker).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].to_string(), "1:7 \"wrld\" -> world");

        ws.init("b.xml", false).unwrap();
        ws.xml_command(XmlAction::AppendChild {
            tag: "p".into(),
            new_id: "p1".into(),
            parent_id: "root".into(),
            text: Some("helo".into()),
        })
        .unwrap();
        let issues = ws.spell_check(Some("b.xml"), &checker).unwrap();
        assert_eq!(issues[0].to_string(), "[p1] \"helo\" -> hello");
    }

    #[test]
    fn test_exit_and_restore() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("kept.txt"), "saved").unwrap();
        {
            let mut ws = workspace(&dir);
            ws.load("kept.txt").unwrap();
            ws.init("draft.xml", true).unwrap();
            ws.edit("kept.txt").unwrap();
            ws.exit(&mut never).unwrap();
        }
        assert!(dir.path().join(".editor_workspace").exists());

        let mut ws = workspace(&dir);
        assert!(ws.restore_from_disk().unwrap());
        assert_eq!(ws.editor_list(), "* kept.txt\n  draft.xml [modified]");
        ws.edit("draft.xml").unwrap();
        assert!(ws.active().unwrap().info().logging_enabled);
    }

    #[test]
    fn test_restore_without_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut ws = workspace(&dir);
        assert!(!ws.restore_from_disk().unwrap());
    }

    #[test]
    fn test_dir_tree() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("x.txt"), "").unwrap();
        let ws = workspace(&dir);
        assert_eq!(ws.dir_tree(None).unwrap(), "└── sub\n    └── x.txt");
        assert_eq!(ws.dir_tree(Some("sub")).unwrap(), "└── x.txt");
    }

    #[test]
    fn test_history_limit_from_settings() {
        let dir = TempDir::new().unwrap();
        let settings = EditorSettings {
            history_limit: Some(1),
            ..EditorSettings::default()
        };
        let mut ws = Workspace::new(dir.path(), settings);
        ws.init("a.txt", false).unwrap();
        append(&mut ws, "1");
        append(&mut ws, "2");
        assert!(ws.undo().unwrap().is_some());
        assert_eq!(ws.undo().unwrap(), None);
    }
}
