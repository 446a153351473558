//! Student registry service

use crate::{
    error::AppResult,
    models::student::{Student, StudentPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Student>> {
        self.repository
            .students
            .list()
            .await
            .inspect_err(|e| e.log("Error fetching student list"))
    }

    pub async fn create(&self, payload: StudentPayload) -> AppResult<i32> {
        let student = Student::from(payload);
        let id = self
            .repository
            .students
            .create(&student)
            .await
            .inspect_err(|e| e.log("Error registering student"))?;
        tracing::info!(id_aluno = id, "Student registered");
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository
            .students
            .delete(id)
            .await
            .inspect_err(|e| e.log("Error removing student"))?;
        tracing::info!(id_aluno = id, "Student removed");
        Ok(())
    }

    pub async fn update(&self, id: i32, payload: StudentPayload) -> AppResult<()> {
        let mut student = Student::from(payload);
        student.set_id(id);
        self.repository
            .students
            .update(student.id(), &student)
            .await
            .inspect_err(|e| e.log("Error updating student"))?;
        tracing::info!(id_aluno = id, "Student updated");
        Ok(())
    }
}
