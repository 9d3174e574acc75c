pub mod repository;

pub use repository::RoomRepository;
