use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;

use crate::dto::quiz_dto::{QuestionView, SessionView, STATUS_FINISHED, STATUS_IN_PROGRESS};
use crate::error::{Error, Result};
use crate::models::session::{QuizSession, QuizState};
use crate::services::loader_service::QuestionSetLoader;
use crate::store::ContentStore;

/// Owns the live quiz sessions. Loading happens once per started session,
/// everything after that operates on the in-memory state machine.
#[derive(Clone)]
pub struct SessionService {
    loader: QuestionSetLoader,
    sessions: Arc<Mutex<HashMap<Uuid, QuizSession>>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self {
            loader: QuestionSetLoader::new(store),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn start(&self, test_id: &str) -> Result<SessionView> {
        let set = Arc::new(self.loader.load(test_id).await?);
        let session = QuizSession::new(set);
        let id = Uuid::new_v4();
        let view = Self::view_of(id, &session);

        self.lock().insert(id, session);
        tracing::info!(
            "Started quiz session {} for test '{}' with {} questions",
            id,
            test_id,
            view.question.as_ref().map_or(0, |q| q.total)
        );
        Ok(view)
    }

    pub fn view(&self, id: Uuid) -> Result<SessionView> {
        let sessions = self.lock();
        let session = sessions.get(&id).ok_or_else(|| Self::unknown(id))?;
        Ok(Self::view_of(id, session))
    }

    pub fn select(&self, id: Uuid, option: usize) -> Result<SessionView> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id).ok_or_else(|| Self::unknown(id))?;
        session.select(option)?;
        Ok(Self::view_of(id, session))
    }

    pub fn advance(&self, id: Uuid) -> Result<SessionView> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id).ok_or_else(|| Self::unknown(id))?;
        session.advance()?;
        if let QuizState::Finished { score, total } = *session.state() {
            tracing::info!("Quiz session {} finished with score {}/{}", id, score, total);
        }
        Ok(Self::view_of(id, session))
    }

    pub fn restart(&self, id: Uuid) -> Result<SessionView> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id).ok_or_else(|| Self::unknown(id))?;
        session.restart();
        Ok(Self::view_of(id, session))
    }

    pub fn exit(&self, id: Uuid) -> Result<()> {
        self.lock().remove(&id).ok_or_else(|| Self::unknown(id))?;
        tracing::info!("Quiz session {} exited", id);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, QuizSession>> {
        self.sessions.lock().expect("Session registry mutex poisoned")
    }

    fn unknown(id: Uuid) -> Error {
        Error::NotFound(format!("No active quiz session {}", id))
    }

    fn view_of(id: Uuid, session: &QuizSession) -> SessionView {
        let set = session.question_set();
        match *session.state() {
            QuizState::InProgress {
                current, selected, ..
            } => SessionView {
                session_id: id,
                test_id: set.test_id.clone(),
                title: set.title.clone(),
                status: STATUS_IN_PROGRESS.to_string(),
                progress: session.progress(),
                question: set.question(current).map(|q| QuestionView {
                    number: current + 1,
                    total: set.len(),
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                    selected,
                }),
                result: None,
            },
            QuizState::Finished { .. } => SessionView {
                session_id: id,
                test_id: set.test_id.clone(),
                title: set.title.clone(),
                status: STATUS_FINISHED.to_string(),
                progress: 1.0,
                question: None,
                result: session.summary().map(Into::into),
            },
        }
    }
}
