pub mod conflict;
pub mod repository;

pub use conflict::ConflictDetectionService;
pub use repository::AppointmentRepository;
