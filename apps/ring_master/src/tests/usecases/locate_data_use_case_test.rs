#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};

    use crate::{
        core::{
            domain::models::{AppError, usecases::LocateDataUseCaseInput},
            usecases::LocateDataUseCase,
        },
        tests::test_mocks::{MockRing, placement},
    };

    #[tokio::test]
    async fn validate_fails_when_key_is_empty() {
        let uc = LocateDataUseCase::new(Arc::new(MockRing::new()));

        let err = uc
            .validate(&LocateDataUseCaseInput { key: "".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn locate_does_not_assign() {
        let ring = Arc::new(MockRing::new());
        ring.set_placement_result(Ok(placement(90, 0, "n1")));
        let uc = LocateDataUseCase::new(ring.clone());

        let out = uc
            .execute(LocateDataUseCaseInput { key: "k90".into() })
            .await
            .expect("locate should succeed");

        assert_eq!(out.placement.node_id, "n1");
        assert_eq!(ring.last_locate_key.lock().as_deref(), Some("k90"));
        assert!(ring.last_assign_key.lock().is_none());
    }
}
