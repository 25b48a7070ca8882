pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    authoring_service::AuthoringService, mock_test_service::MockTestService,
    note_service::NoteService, paper_service::PaperService, search_service::SearchService,
    session_service::SessionService, syllabus_service::SyllabusService,
};
use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub note_service: NoteService,
    pub syllabus_service: SyllabusService,
    pub paper_service: PaperService,
    pub mock_test_service: MockTestService,
    pub search_service: SearchService,
    pub session_service: SessionService,
    pub authoring_service: AuthoringService,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        let note_service = NoteService::new(store.clone());
        let syllabus_service = SyllabusService::new(store.clone());
        let paper_service = PaperService::new(store.clone());
        let mock_test_service = MockTestService::new(store.clone());
        let search_service = SearchService::new(store.clone());
        let session_service = SessionService::new(store.clone());
        let authoring_service = AuthoringService::new(store.clone());

        Self {
            store,
            note_service,
            syllabus_service,
            paper_service,
            mock_test_service,
            search_service,
            session_service,
            authoring_service,
        }
    }
}
