pub mod repository;

pub use repository::PatientRepository;
