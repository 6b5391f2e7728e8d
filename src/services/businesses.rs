use crate::{
    error::{ApiError, ApiResult},
    models::business::Business,
    store::ContentStore,
};

pub struct BusinessService;

impl BusinessService {
    pub async fn list(store: &ContentStore, active: bool) -> ApiResult<Vec<Business>> {
        Ok(store.businesses.list(Some(active)).await?)
    }

    pub async fn featured(store: &ContentStore) -> ApiResult<Vec<Business>> {
        Ok(store
            .businesses
            .find(&|b: &Business| b.active && b.featured)
            .await?)
    }

    /// Active listings in `category`, compared case-insensitively.
    pub async fn by_category(store: &ContentStore, category: &str) -> ApiResult<Vec<Business>> {
        let category = category.trim().to_lowercase();
        Ok(store
            .businesses
            .find(&move |b: &Business| b.active && b.category.to_lowercase() == category)
            .await?)
    }

    pub async fn get(store: &ContentStore, id: i64) -> ApiResult<Business> {
        store
            .businesses
            .get(id)
            .await?
            .ok_or(ApiError::NotFound("Business not found"))
    }
}
