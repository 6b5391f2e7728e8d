use crate::{
    error::{ApiError, ApiResult},
    models::announcement::Announcement,
    store::ContentStore,
};

pub struct AnnouncementService;

impl AnnouncementService {
    pub async fn list(store: &ContentStore, active: Option<bool>) -> ApiResult<Vec<Announcement>> {
        Ok(store.announcements.list(active).await?)
    }

    pub async fn get(store: &ContentStore, id: i64) -> ApiResult<Announcement> {
        store
            .announcements
            .get(id)
            .await?
            .ok_or(ApiError::NotFound("Announcement not found"))
    }
}
