use tracing::info;

use crate::{
    error::ApiResult,
    models::donation::{CreateDonationRequest, Donation},
    services::metrics::{DONATIONS_COUNTER, DONATION_AMOUNT_COUNTER},
    store::ContentStore,
    validation::Validate,
};

pub struct DonationService;

impl DonationService {
    pub async fn record(store: &ContentStore, req: CreateDonationRequest) -> ApiResult<Donation> {
        req.validate()?;
        let donation = store.donations.create(req).await?;

        let fund = donation.fund_label();
        DONATIONS_COUNTER
            .with_label_values(&[fund, donation.donation_type_label()])
            .inc();
        DONATION_AMOUNT_COUNTER
            .with_label_values(&[fund])
            .inc_by(donation.amount as f64);
        info!(
            id = donation.id,
            amount = donation.amount,
            fund = %donation.fund,
            donation_type = %donation.donation_type,
            "Donation recorded"
        );
        Ok(donation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ApiError, models::donation::KNOWN_FUNDS};

    fn request(amount: i64, fund: &str) -> CreateDonationRequest {
        CreateDonationRequest {
            amount,
            name: Some("Anonymous".into()),
            email: None,
            donation_type: "monthly".into(),
            fund: fund.into(),
            transaction_id: None,
        }
    }

    #[tokio::test]
    async fn records_server_assigned_fields() {
        let store = ContentStore::in_memory();
        let donation = DonationService::record(&store, request(5000, "Zakat")).await.unwrap();

        assert_eq!(donation.id, 1);
        assert_eq!(donation.amount, 5000);
        let stored = store.donations.get(1).await.unwrap().unwrap();
        assert_eq!(stored, donation);
    }

    #[tokio::test]
    async fn negative_amount_is_rejected_before_storing() {
        let store = ContentStore::in_memory();
        let err = DonationService::record(&store, request(-500, "General"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(store.donations.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn arbitrary_funds_share_one_series() {
        let store = ContentStore::in_memory();
        for i in 0..25 {
            DonationService::record(&store, request(100, &format!("campaign-{i}")))
                .await
                .unwrap();
        }
        assert_eq!(store.donations.count().await.unwrap(), 25);

        let family = prometheus::gather()
            .into_iter()
            .find(|f| f.get_name() == "api_donations_total")
            .expect("donation counter registered");
        let funds: Vec<String> = family
            .get_metric()
            .iter()
            .flat_map(|m| m.get_label().iter())
            .filter(|l| l.get_name() == "fund")
            .map(|l| l.get_value().to_string())
            .collect();

        assert!(funds.iter().any(|f| f == "other"));
        assert!(funds.iter().all(|f| f == "other" || KNOWN_FUNDS.contains(&f.as_str())));
        assert!(family.get_metric().len() <= (KNOWN_FUNDS.len() + 1) * 3);
    }
}
