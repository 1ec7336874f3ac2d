use async_trait::async_trait;

use crate::teacher::errors::TeacherError;
use crate::teacher::models::Teacher;
use crate::teacher::models::TeacherId;

#[async_trait]
pub trait TeacherServicePort: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Teacher>, TeacherError>;

    /// # Errors
    /// * `NotFound` - Teacher does not exist
    async fn get_teacher(&self, id: TeacherId) -> Result<Teacher, TeacherError>;
}

#[async_trait]
pub trait TeacherRepository: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<Teacher>, TeacherError>;

    async fn find_by_id(&self, id: TeacherId) -> Result<Option<Teacher>, TeacherError>;
}
