//! Per-document load status and the aggregate page state derived from it.

use crate::content::models::{
    CoursesDoc, CvContent, EducationDoc, ExperienceDoc, SkillsDoc, Structure,
};
use crate::content::source::FetchError;
use crate::content::Document;

/// Load status of a single document. `Pending` transitions exactly once, to
/// `Loaded` or `Failed`; both are terminal.
#[derive(Debug, Clone)]
pub enum DocumentStatus<T> {
    Pending,
    Loaded(T),
    Failed(FetchError),
}

/// Status stripped of its payload, used for aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Loaded,
    Failed,
}

impl<T> DocumentStatus<T> {
    fn phase(&self) -> Phase {
        match self {
            DocumentStatus::Pending => Phase::Pending,
            DocumentStatus::Loaded(_) => Phase::Loaded,
            DocumentStatus::Failed(_) => Phase::Failed,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            DocumentStatus::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for DocumentStatus<T> {
    fn default() -> Self {
        DocumentStatus::Pending
    }
}

impl<T> From<Result<T, FetchError>> for DocumentStatus<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => DocumentStatus::Loaded(value),
            Err(e) => DocumentStatus::Failed(e),
        }
    }
}

/// Aggregate page state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Loading,
    /// Every failed document, in `Document::ALL` order.
    Error { failed: Vec<Document> },
    Ready,
}

/// The five status cells, one per document. Each cell is written exactly once,
/// by its own document's load completion; renderers only ever read.
#[derive(Debug, Default)]
pub struct ContentState {
    pub skills: DocumentStatus<SkillsDoc>,
    pub experiences: DocumentStatus<ExperienceDoc>,
    pub structure: DocumentStatus<Structure>,
    pub courses: DocumentStatus<CoursesDoc>,
    pub education: DocumentStatus<EducationDoc>,
}

impl ContentState {
    fn phase(&self, doc: Document) -> Phase {
        match doc {
            Document::Skills => self.skills.phase(),
            Document::Experiences => self.experiences.phase(),
            Document::Structure => self.structure.phase(),
            Document::Courses => self.courses.phase(),
            Document::Education => self.education.phase(),
        }
    }

    /// Derives the aggregate state. Loading takes precedence over Error: as
    /// long as any document is still pending, failures that have already
    /// arrived are not surfaced.
    pub fn page_state(&self) -> PageState {
        if Document::ALL.iter().any(|d| self.phase(*d) == Phase::Pending) {
            return PageState::Loading;
        }
        let failed: Vec<Document> = Document::ALL
            .iter()
            .copied()
            .filter(|d| self.phase(*d) == Phase::Failed)
            .collect();
        if failed.is_empty() {
            PageState::Ready
        } else {
            PageState::Error { failed }
        }
    }

    /// The full content snapshot, available once every document has loaded.
    pub fn snapshot(&self) -> Option<CvContent> {
        Some(CvContent {
            structure: self.structure.loaded()?.clone(),
            experiences: self.experiences.loaded()?.clone(),
            skills: self.skills.loaded()?.clone(),
            education: self.education.loaded()?.clone(),
            courses: self.courses.loaded()?.clone(),
        })
    }
}
