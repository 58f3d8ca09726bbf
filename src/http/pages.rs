use crate::assistant::{AssistantForm, Model, Voice};
use crate::interview::{
    preparation_tips, CompanyType, InterviewDuration, InterviewForm, Level, PreparationTips, Role,
    IN_PROGRESS_TIPS,
};
use crate::session::{Notice, SessionSnapshot};
use anyhow::{Context, Result};
use minijinja::{context, Environment};
use serde::Serialize;

/// One entry of a select box
#[derive(Debug, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    fn list<T>(
        all: &[T],
        current: &str,
        key: impl Fn(&T) -> &'static str,
        label: impl Fn(&T) -> String,
    ) -> Vec<Self> {
        all.iter()
            .map(|item| Self {
                value: key(item).to_string(),
                label: label(item),
                selected: key(item) == current,
            })
            .collect()
    }
}

/// Everything the assistant page renders from
pub struct AssistantView<'a> {
    pub form: &'a AssistantForm,
    pub snapshot: &'a SessionSnapshot,
    pub notice: Option<&'a Notice>,
    pub needs_api_key: bool,
}

/// Everything the interview page renders from
pub struct InterviewView<'a> {
    pub form: &'a InterviewForm,
    pub role: Role,
    pub snapshot: &'a SessionSnapshot,
    pub notice: Option<&'a Notice>,
    pub needs_api_key: bool,
}

/// Page templates
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("templates/base.html"))
            .context("Invalid base template")?;
        env.add_template("assistant.html", include_str!("templates/assistant.html"))
            .context("Invalid assistant template")?;
        env.add_template("interview.html", include_str!("templates/interview.html"))
            .context("Invalid interview template")?;

        Ok(Self { env })
    }

    pub fn assistant(&self, view: &AssistantView<'_>) -> Result<String> {
        let models = SelectOption::list(&Model::ALL, view.form.model.as_str(), |m| m.as_str(), |m| {
            m.as_str().to_string()
        });
        let voices = SelectOption::list(&Voice::ALL, view.form.voice.as_str(), |v| v.as_str(), |v| {
            v.as_str().to_string()
        });

        self.render(
            "assistant.html",
            context! {
                form => view.form,
                models => models,
                voices => voices,
                status => view.snapshot.status.as_str(),
                active => view.snapshot.status.is_active(),
                snapshot => view.snapshot,
                notice => view.notice,
                needs_api_key => view.needs_api_key,
            },
        )
    }

    pub fn interview(&self, view: &InterviewView<'_>) -> Result<String> {
        let form = view.form;
        let roles = SelectOption::list(Role::ALL, &form.role, |r| r.key(), |r| r.label());
        let levels = SelectOption::list(Level::ALL, &form.level, |l| l.key(), |l| l.label());
        let durations = SelectOption::list(
            InterviewDuration::ALL,
            &form.duration,
            |d| d.key(),
            |d| d.label(),
        );
        let companies = SelectOption::list(
            CompanyType::ALL,
            &form.company,
            |c| c.key(),
            |c| c.label(),
        );
        let tips: &PreparationTips = preparation_tips(view.role);

        self.render(
            "interview.html",
            context! {
                form => form,
                roles => roles,
                levels => levels,
                durations => durations,
                companies => companies,
                tips => tips,
                in_progress_tips => IN_PROGRESS_TIPS,
                status => view.snapshot.status.as_str(),
                active => view.snapshot.status.is_active(),
                snapshot => view.snapshot,
                notice => view.notice,
                needs_api_key => view.needs_api_key,
            },
        )
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|template| template.render(ctx))
            .with_context(|| format!("Failed to render {}", name))
    }
}
