use crate::{
    error::{ApiError, ApiResult},
    models::program::{CreateProgramRequest, Program},
    store::ContentStore,
    validation::Validate,
};

pub struct ProgramService;

impl ProgramService {
    pub async fn list(store: &ContentStore, active: Option<bool>) -> ApiResult<Vec<Program>> {
        Ok(store.programs.list(active).await?)
    }

    pub async fn get(store: &ContentStore, id: i64) -> ApiResult<Program> {
        store
            .programs
            .get(id)
            .await?
            .ok_or(ApiError::NotFound("Program not found"))
    }

    pub async fn create(store: &ContentStore, req: CreateProgramRequest) -> ApiResult<Program> {
        req.validate()?;
        Ok(store.programs.create(req).await?)
    }
}
