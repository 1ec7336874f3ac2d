pub mod session;
pub mod teacher;
pub mod user;

pub use session::PostgresSessionRepository;
pub use teacher::PostgresTeacherRepository;
pub use user::PostgresUserRepository;
