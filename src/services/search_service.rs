use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::models::catalog;
use crate::models::note::Note;
use crate::models::paper::PastPaper;
use crate::store::{collections, ContentStore, ListQuery};

/// Uploaded content is only searched within the most recent documents per
/// collection, which keeps one search at two bounded store reads.
const RECENT_WINDOW: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Semester,
    Subject,
    Note,
    Pyq,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub kind: SearchKind,
    pub title: String,
    pub subtitle: String,
    pub link: String,
}

#[derive(Clone)]
pub struct SearchService {
    store: Arc<dyn ContentStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Case-insensitive substring search over the course catalog plus the
    /// recent uploads window. Hits come back catalog first, then notes,
    /// then papers.
    pub async fn search(&self, raw_query: &str) -> Result<Vec<SearchHit>> {
        let query = raw_query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits = Vec::new();

        for semester in catalog::SEMESTERS {
            if semester.title.to_lowercase().contains(&query) {
                hits.push(SearchHit {
                    id: format!("sem-{}", semester.id),
                    kind: SearchKind::Semester,
                    title: semester.title.to_string(),
                    subtitle: "Browse all papers in this semester".to_string(),
                    link: format!("/semester/{}", semester.id),
                });
            }
            for subject in semester.subjects {
                if subject.name.to_lowercase().contains(&query)
                    || subject.id.to_lowercase().contains(&query)
                {
                    hits.push(SearchHit {
                        id: subject.id.to_string(),
                        kind: SearchKind::Subject,
                        title: subject.name.to_string(),
                        subtitle: format!("{} • Syllabus & Resources", semester.title),
                        link: format!("/semester/{}/{}?view=syllabus", semester.id, subject.id),
                    });
                }
            }
        }

        let recent = ListQuery::recent(RECENT_WINDOW);

        for doc in self.store.list(collections::NOTES, &recent).await? {
            let Some(note) = Note::from_document(&doc) else {
                continue;
            };
            if note.unit_title.to_lowercase().contains(&query)
                || note.subject_id.to_lowercase().contains(&query)
            {
                hits.push(SearchHit {
                    id: note.id.clone(),
                    kind: SearchKind::Note,
                    title: note.unit_title.clone(),
                    subtitle: format!(
                        "Note • Sem {} • {}",
                        note.semester,
                        note.subject_id.to_uppercase()
                    ),
                    link: format!("/semester/{}/{}?view=notes", note.semester, note.subject_id),
                });
            }
        }

        for doc in self.store.list(collections::PYQ, &recent).await? {
            let Some(paper) = PastPaper::from_document(&doc) else {
                continue;
            };
            if paper.year.to_lowercase().contains(&query)
                || paper.subject_id.to_lowercase().contains(&query)
            {
                hits.push(SearchHit {
                    id: paper.id.clone(),
                    kind: SearchKind::Pyq,
                    title: format!("{} Question Paper", paper.year),
                    subtitle: format!(
                        "PYQ • Sem {} • {}",
                        paper.semester,
                        paper.subject_id.to_uppercase()
                    ),
                    link: format!("/pyq/view/{}", paper.id),
                });
            }
        }

        Ok(hits)
    }
}
