//! Request dispatcher
//!
//! Turns a user action into one backend request and hands the outcome to a
//! display sink. Every action resolves exactly once: no retries, no timeouts,
//! no cancellation.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::render::{ResultView, first_review};
use std::sync::Arc;

/// The user actions, one per result element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum Action {
    #[strum(to_string = "File review")]
    FileReview,
    #[strum(to_string = "Folder review")]
    FolderReview,
    #[strum(to_string = "Bug fix")]
    BugFix,
}

/// Field values captured when an action is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    FileReview {
        file_path: String,
    },
    FolderReview {
        project_path: String,
        ignore_files: String,
        file_extensions: String,
    },
    BugFix {
        file_path: String,
        error_msg: String,
    },
}

impl Submission {
    pub fn action(&self) -> Action {
        match self {
            Submission::FileReview { .. } => Action::FileReview,
            Submission::FolderReview { .. } => Action::FolderReview,
            Submission::BugFix { .. } => Action::BugFix,
        }
    }

    /// What the request is about, for the activity log.
    pub fn target(&self) -> &str {
        match self {
            Submission::FileReview { file_path } => file_path,
            Submission::FolderReview { project_path, .. } => project_path,
            Submission::BugFix { file_path, .. } => file_path,
        }
    }
}

/// Where resolved actions are displayed.
#[async_trait::async_trait]
pub trait ResultSink: Send + Sync {
    async fn show(&self, action: Action, view: &ResultView);
}

#[derive(Clone)]
pub struct Dispatcher {
    backend: Arc<dyn Backend>,
}

impl Dispatcher {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Base URL of the backend requests go to.
    pub fn backend_url(&self) -> String {
        self.backend.environment().backend_url()
    }

    /// Reviews one file and shows the first review as rendered markdown.
    pub async fn submit_file_review(&self, file_path: &str, sink: &dyn ResultSink) -> ResultView {
        tracing::info!("{}: {}", Action::FileReview, file_path);
        let outcome = self
            .backend
            .review_file(file_path)
            .await
            .and_then(|body| first_review(&body).map(ResultView::markdown));
        self.resolve(Action::FileReview, outcome, sink).await
    }

    /// Reviews a project folder and shows the whole body as pretty JSON.
    pub async fn submit_folder_review(
        &self,
        project_path: &str,
        ignore_files: &str,
        file_extensions: &str,
        sink: &dyn ResultSink,
    ) -> ResultView {
        tracing::info!("{}: {}", Action::FolderReview, project_path);
        let outcome = self
            .backend
            .review_folder(project_path, ignore_files, file_extensions)
            .await
            .map(|body| ResultView::json(&body));
        self.resolve(Action::FolderReview, outcome, sink).await
    }

    /// Asks for a fix and shows the whole body as pretty JSON.
    pub async fn submit_bug_fix(
        &self,
        file_path: &str,
        error_msg: &str,
        sink: &dyn ResultSink,
    ) -> ResultView {
        tracing::info!("{}: {}", Action::BugFix, file_path);
        let outcome = self
            .backend
            .bug_fixer(file_path, error_msg)
            .await
            .map(|body| ResultView::json(&body));
        self.resolve(Action::BugFix, outcome, sink).await
    }

    /// Runs whichever action the submission belongs to.
    pub async fn submit(&self, submission: &Submission, sink: &dyn ResultSink) -> ResultView {
        match submission {
            Submission::FileReview { file_path } => self.submit_file_review(file_path, sink).await,
            Submission::FolderReview {
                project_path,
                ignore_files,
                file_extensions,
            } => {
                self.submit_folder_review(project_path, ignore_files, file_extensions, sink)
                    .await
            }
            Submission::BugFix {
                file_path,
                error_msg,
            } => self.submit_bug_fix(file_path, error_msg, sink).await,
        }
    }

    async fn resolve(
        &self,
        action: Action,
        outcome: Result<ResultView, BackendError>,
        sink: &dyn ResultSink,
    ) -> ResultView {
        let view = match outcome {
            Ok(view) => view,
            Err(e) => {
                let action_name = action.to_string().to_lowercase();
                match e.status() {
                    Some(status) => {
                        tracing::error!(status, "Error fetching {}: {}", action_name, e)
                    }
                    None => tracing::error!("Error fetching {}: {}", action_name, e),
                }
                ResultView::error(&e)
            }
        };
        sink.show(action, &view).await;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::environment::Environment;
    use crate::render::markdown_to_html;
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        shown: Mutex<Vec<(Action, ResultView)>>,
    }

    #[async_trait::async_trait]
    impl ResultSink for RecordingSink {
        async fn show(&self, action: Action, view: &ResultView) {
            self.shown.lock().unwrap().push((action, view.clone()));
        }
    }

    impl RecordingSink {
        fn single(&self) -> (Action, ResultView) {
            let shown = self.shown.lock().unwrap();
            assert_eq!(shown.len(), 1, "each action must be shown exactly once");
            shown[0].clone()
        }
    }

    fn dispatcher(backend: MockBackend) -> Dispatcher {
        Dispatcher::new(Arc::new(backend))
    }

    #[tokio::test]
    async fn file_review_renders_first_review_as_html() {
        let mut backend = MockBackend::new();
        backend
            .expect_review_file()
            .with(eq("a.py"))
            .times(1)
            .returning(|_| Ok(json!({"review": {"a.py": "**bold**"}})));
        let sink = RecordingSink::default();

        let view = dispatcher(backend).submit_file_review("a.py", &sink).await;

        assert_eq!(view.text(), markdown_to_html("**bold**"));
        assert_eq!(sink.single(), (Action::FileReview, view));
    }

    #[tokio::test]
    async fn file_review_with_unexpected_body_shows_error() {
        let mut backend = MockBackend::new();
        backend
            .expect_review_file()
            .times(1)
            .returning(|_| Ok(json!({"detail": "Not Found"})));
        let sink = RecordingSink::default();

        let view = dispatcher(backend).submit_file_review("a.py", &sink).await;

        assert!(view.text().starts_with("Error"));
        assert!(sink.single().1.is_error());
    }

    #[tokio::test]
    async fn folder_review_echoes_body_as_pretty_json() {
        let body: Value =
            serde_json::from_str(r#"{"summary": "ok", "files": ["b.py", "a.py"]}"#).unwrap();
        let expected = serde_json::to_string_pretty(&body).unwrap();
        let mut backend = MockBackend::new();
        backend
            .expect_review_folder()
            .with(eq("/proj"), eq("venv"), eq(".py"))
            .times(1)
            .returning(move |_, _, _| Ok(body.clone()));
        let sink = RecordingSink::default();

        let view = dispatcher(backend)
            .submit_folder_review("/proj", "venv", ".py", &sink)
            .await;

        assert_eq!(view.text(), expected);
        assert_eq!(sink.single().0, Action::FolderReview);
    }

    #[tokio::test]
    async fn bug_fix_failure_shows_error_with_message() {
        let mut backend = MockBackend::new();
        backend
            .expect_bug_fixer()
            .with(eq("main.py"), eq("KeyError"))
            .times(1)
            .returning(|_, _| {
                Err(BackendError::Http {
                    status: 502,
                    message: "bad gateway".to_string(),
                })
            });
        let sink = RecordingSink::default();

        let view = dispatcher(backend)
            .submit_bug_fix("main.py", "KeyError", &sink)
            .await;

        let text = view.text();
        assert!(text.starts_with("Error: "));
        assert!(text.contains("bad gateway"));
        assert_eq!(sink.single(), (Action::BugFix, view));
    }

    #[tokio::test]
    /// Concurrent actions are neither merged nor deduplicated.
    async fn repeated_actions_each_issue_their_own_request() {
        let mut backend = MockBackend::new();
        backend
            .expect_bug_fixer()
            .times(2)
            .returning(|_, _| Ok(json!({"fix": "x"})));
        let dispatcher = dispatcher(backend);
        let sink = RecordingSink::default();

        let (first, second) = tokio::join!(
            dispatcher.submit_bug_fix("a.py", "e", &sink),
            dispatcher.submit_bug_fix("a.py", "e", &sink)
        );

        assert_eq!(first, second);
        assert_eq!(sink.shown.lock().unwrap().len(), 2);
    }

    #[test]
    fn backend_url_comes_from_the_backend_environment() {
        let mut backend = MockBackend::new();
        backend
            .expect_environment()
            .return_const(Environment::Custom {
                backend_url: "http://review.internal:9000".to_string(),
            });
        assert_eq!(
            dispatcher(backend).backend_url(),
            "http://review.internal:9000"
        );
    }
}
