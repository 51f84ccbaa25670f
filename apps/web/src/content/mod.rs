//! Content pipeline: the five CV documents, the source adapter that loads
//! them, and the per-document load status tracked for the page.

pub mod models;
pub mod source;
pub mod status;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::content::models::{CoursesDoc, EducationDoc, ExperienceDoc, SkillsDoc, Structure};
use crate::content::source::ContentSource;
use crate::content::status::{ContentState, DocumentStatus};

/// The five named content documents, in declaration order. The order is part
/// of the contract: the error panel lists failed documents in this order,
/// regardless of when each load actually failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Skills,
    Experiences,
    Structure,
    Courses,
    Education,
}

impl Document {
    pub const ALL: [Document; 5] = [
        Document::Skills,
        Document::Experiences,
        Document::Structure,
        Document::Courses,
        Document::Education,
    ];

    /// File name (or URL path segment) this document is resolved from.
    pub fn file_name(self) -> &'static str {
        match self {
            Document::Skills => "skills.json",
            Document::Experiences => "experiences.json",
            Document::Structure => "structure.json",
            Document::Courses => "courses.json",
            Document::Education => "education.json",
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Document::Skills => "Skills",
            Document::Experiences => "Experiences",
            Document::Structure => "Structure",
            Document::Courses => "Courses",
            Document::Education => "Education",
        };
        f.write_str(name)
    }
}

/// Kicks off the five document loads. Each runs independently and writes
/// exactly its own status cell on completion; requests arriving before all
/// five have finished see the loading page. Loads are never cancelled — if
/// the process shuts down first, the results are simply discarded.
pub fn spawn_loaders(
    source: &Arc<dyn ContentSource>,
    state: &Arc<RwLock<ContentState>>,
) -> Vec<JoinHandle<()>> {
    vec![
        spawn_one::<SkillsDoc, _>(source, state, Document::Skills, |s, v| s.skills = v),
        spawn_one::<ExperienceDoc, _>(source, state, Document::Experiences, |s, v| {
            s.experiences = v
        }),
        spawn_one::<Structure, _>(source, state, Document::Structure, |s, v| s.structure = v),
        spawn_one::<CoursesDoc, _>(source, state, Document::Courses, |s, v| s.courses = v),
        spawn_one::<EducationDoc, _>(source, state, Document::Education, |s, v| s.education = v),
    ]
}

fn spawn_one<T, F>(
    source: &Arc<dyn ContentSource>,
    state: &Arc<RwLock<ContentState>>,
    doc: Document,
    set: F,
) -> JoinHandle<()>
where
    T: DeserializeOwned + Send + 'static,
    F: FnOnce(&mut ContentState, DocumentStatus<T>) + Send + 'static,
{
    let source = source.clone();
    let state = state.clone();
    tokio::spawn(async move {
        let status = source::load_json::<T>(source.as_ref(), doc).await.into();
        set(&mut *state.write().await, status);
    })
}
