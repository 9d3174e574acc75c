pub mod repository;

pub use repository::DoctorRepository;
