pub mod authoring_service;
pub mod loader_service;
pub mod mock_test_service;
pub mod note_service;
pub mod paper_service;
pub mod search_service;
pub mod session_service;
pub mod syllabus_service;
