use std::sync::Arc;

use async_trait::async_trait;

use crate::teacher::errors::TeacherError;
use crate::teacher::models::Teacher;
use crate::teacher::models::TeacherId;
use crate::teacher::ports::TeacherRepository;
use crate::teacher::ports::TeacherServicePort;

pub struct TeacherService<TR>
where
    TR: TeacherRepository,
{
    repository: Arc<TR>,
}

impl<TR> TeacherService<TR>
where
    TR: TeacherRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TeacherServicePort for TeacherService<TR>
where
    TR: TeacherRepository,
{
    async fn find_all(&self) -> Result<Vec<Teacher>, TeacherError> {
        self.repository.find_all().await
    }

    async fn get_teacher(&self, id: TeacherId) -> Result<Teacher, TeacherError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TeacherError::NotFound(id.to_string()))
    }
}
