//! Form panels: input fields plus one button per action

use crate::config::Config;
use crate::dispatcher::{Action, Submission};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// One form: the fields an action reads and the button that fires it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub action: Action,
    pub button: &'static str,
    pub fields: Vec<Field>,
}

impl Form {
    fn value(&self, index: usize) -> String {
        self.fields
            .get(index)
            .map(|f| f.value.clone())
            .unwrap_or_default()
    }

    /// Reads the current field values.
    pub fn submission(&self) -> Submission {
        match self.action {
            Action::FileReview => Submission::FileReview {
                file_path: self.value(0),
            },
            Action::FolderReview => Submission::FolderReview {
                project_path: self.value(0),
                ignore_files: self.value(1),
                file_extensions: self.value(2),
            },
            Action::BugFix => Submission::BugFix {
                file_path: self.value(0),
                error_msg: self.value(1),
            },
        }
    }
}

/// The three forms, pre-filled from the saved configuration.
pub fn forms_from_config(config: &Config) -> Vec<Form> {
    vec![
        Form {
            action: Action::FileReview,
            button: "Review File",
            fields: vec![Field::new("File path", &config.file_path)],
        },
        Form {
            action: Action::FolderReview,
            button: "Review Folder",
            fields: vec![
                Field::new("Project path", &config.project_path),
                Field::new("Ignore files", &config.ignore_files),
                Field::new("File extensions", &config.file_extensions),
            ],
        },
        Form {
            action: Action::BugFix,
            button: "Fix Bug",
            fields: vec![
                Field::new("File path", &config.bug_file_path),
                Field::new("Error message", &config.error_msg),
            ],
        },
    ]
}

/// Copies the current form values back into a configuration.
pub fn store_forms(forms: &[Form], config: &mut Config) {
    for form in forms {
        match form.submission() {
            Submission::FileReview { file_path } => config.file_path = file_path,
            Submission::FolderReview {
                project_path,
                ignore_files,
                file_extensions,
            } => {
                config.project_path = project_path;
                config.ignore_files = ignore_files;
                config.file_extensions = file_extensions;
            }
            Submission::BugFix {
                file_path,
                error_msg,
            } => {
                config.bug_file_path = file_path;
                config.error_msg = error_msg;
            }
        }
    }
}

/// Position of the cursor: a form and, within it, a field or the button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Focus {
    pub form: usize,
    /// Field index; equal to the form's field count when the button is focused.
    pub slot: usize,
}

impl Focus {
    pub fn on_button(&self, forms: &[Form]) -> bool {
        forms
            .get(self.form)
            .is_some_and(|form| self.slot >= form.fields.len())
    }

    pub fn next(self, forms: &[Form]) -> Self {
        let Some(form) = forms.get(self.form) else {
            return Focus::default();
        };
        if self.slot < form.fields.len() {
            Focus {
                form: self.form,
                slot: self.slot + 1,
            }
        } else {
            Focus {
                form: (self.form + 1) % forms.len(),
                slot: 0,
            }
        }
    }

    pub fn prev(self, forms: &[Form]) -> Self {
        if self.slot > 0 {
            return Focus {
                form: self.form,
                slot: self.slot - 1,
            };
        }
        let form = if self.form == 0 {
            forms.len().saturating_sub(1)
        } else {
            self.form - 1
        };
        Focus {
            form,
            slot: forms.get(form).map(|f| f.fields.len()).unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_walks_every_field_and_button_then_wraps() {
        let forms = forms_from_config(&Config::default());
        let mut focus = Focus::default();
        let mut visited = 1;
        loop {
            focus = focus.next(&forms);
            if focus == Focus::default() {
                break;
            }
            visited += 1;
        }
        // 1 + 3 + 2 fields and 3 buttons
        assert_eq!(visited, 9);
    }

    #[test]
    fn prev_from_start_lands_on_last_button() {
        let forms = forms_from_config(&Config::default());
        let focus = Focus::default().prev(&forms);
        assert_eq!(focus, Focus { form: 2, slot: 2 });
        assert!(focus.on_button(&forms));
        assert_eq!(focus.next(&forms), Focus::default());
    }

    #[test]
    fn submission_reads_values_in_field_order() {
        let mut forms = forms_from_config(&Config::default());
        forms[1].fields[0].value = "/proj".to_string();
        forms[1].fields[1].value = "venv".to_string();
        forms[1].fields[2].value = ".py".to_string();
        assert_eq!(
            forms[1].submission(),
            Submission::FolderReview {
                project_path: "/proj".to_string(),
                ignore_files: "venv".to_string(),
                file_extensions: ".py".to_string(),
            }
        );
        assert_eq!(forms[1].submission().target(), "/proj");
    }

    #[test]
    fn forms_round_trip_through_config() {
        let config = Config {
            file_path: "a.py".to_string(),
            bug_file_path: "b.py".to_string(),
            error_msg: "boom".to_string(),
            ..Config::default()
        };
        let forms = forms_from_config(&config);
        let mut stored = Config::default();
        store_forms(&forms, &mut stored);
        assert_eq!(stored, config);
    }
}
