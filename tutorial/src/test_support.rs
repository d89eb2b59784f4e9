//! Test-only helpers: scripted collaborators and a scratch workspace.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::context::TutorialContext;
use crate::core::catalog::{LESSONS, find};
use crate::core::types::{Lesson, LessonStatus, StatusMap};
use crate::io::config::{CheckConfig, TutorialConfig};
use crate::io::paths::TutorialPaths;
use crate::io::prompt::Confirm;
use crate::io::runner::LessonRunner;
use crate::io::status_store::load_statuses;

/// Create a deterministic lesson. Known ids keep their catalog `test_ref`.
pub fn lesson(id: &str, title: &str, status: LessonStatus) -> Lesson {
    let test_ref = find(id)
        .map(|def| def.test_ref.to_string())
        .unwrap_or_else(|| format!("lesson_{id}"));
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        test_ref,
        hint: Some(format!("{title} hint")),
        url: Some(format!("https://example.test/{id}")),
        status,
    }
}

/// Runner that replays queued pass/fail results and records each lesson id.
pub struct ScriptedRunner {
    results: RefCell<VecDeque<bool>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new(results: Vec<bool>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl LessonRunner for ScriptedRunner {
    fn run(&self, lesson: &Lesson) -> Result<bool> {
        self.calls.borrow_mut().push(lesson.id.clone());
        self.results
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted result for lesson {}", lesson.id))
    }
}

/// Confirmation that replays queued answers and records each question.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    pub questions: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: Vec<bool>) -> Self {
        Self {
            answers: answers.into(),
            questions: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected confirmation: {question}"))
    }
}

/// Scratch directory laid out like a tutorial checkout.
///
/// ```text
/// <tmp>/home/                     status dir (status.json)
/// <tmp>/solutions/<test_ref>.rs   one per catalog lesson
/// <tmp>/workbook/src/main.rs      learner file
/// ```
pub struct TestWorkspace {
    dir: TempDir,
}

pub const STARTER_SOURCE: &str = "fn main() {}\n";

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let root = dir.path();
        fs::create_dir_all(root.join("home")).context("create home")?;
        fs::create_dir_all(root.join("solutions")).context("create solutions")?;
        fs::create_dir_all(root.join("workbook").join("src")).context("create workbook")?;
        for def in LESSONS {
            fs::write(
                root.join("solutions").join(format!("{}.rs", def.test_ref)),
                solution_source(def.test_ref),
            )
            .context("write solution")?;
        }
        fs::write(root.join("workbook/src/main.rs"), STARTER_SOURCE)
            .context("write starter")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    pub fn workbook_main(&self) -> PathBuf {
        self.path().join("workbook/src/main.rs")
    }

    pub fn paths(&self) -> TutorialPaths {
        TutorialPaths::new(self.home())
    }

    /// Config with absolute paths into the workspace.
    pub fn config(&self) -> TutorialConfig {
        TutorialConfig {
            solutions_dir: self.path().join("solutions"),
            solution_dest: self.workbook_main(),
            status_dir: Some(self.home()),
            check: CheckConfig {
                command: vec![
                    "sh".to_string(),
                    "-c".to_string(),
                    "exit 0".to_string(),
                    "{test}".to_string(),
                ],
                workdir: self.path().to_path_buf(),
            },
        }
    }

    pub fn context(&self) -> Result<TutorialContext> {
        TutorialContext::load(self.paths(), self.config())
    }

    /// Write `tutorial.toml` with relative paths and the given check script.
    pub fn write_config_file(&self, check_script: &str) -> Result<PathBuf> {
        let path = self.path().join("tutorial.toml");
        let contents = format!(
            "solutions_dir = \"solutions\"\n\
             solution_dest = \"workbook/src/main.rs\"\n\n\
             [check]\n\
             command = [\"sh\", \"-c\", {script:?}, \"{{test}}\"]\n\
             workdir = \".\"\n",
            script = check_script
        );
        fs::write(&path, contents).context("write tutorial.toml")?;
        Ok(path)
    }

    pub fn write_status_file(&self, contents: &str) -> Result<()> {
        fs::write(self.paths().status_path, contents).context("write status.json")
    }

    pub fn read_statuses(&self) -> Result<StatusMap> {
        Ok(load_statuses(&self.paths().status_path)?)
    }
}

pub fn solution_source(test_ref: &str) -> String {
    format!("// solution: {test_ref}\nfn main() {{}}\n")
}
