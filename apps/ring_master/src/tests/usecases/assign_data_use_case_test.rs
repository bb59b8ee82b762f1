#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};
    use app_ring::RingError;

    use crate::{
        core::{
            domain::models::{AppError, usecases::AssignDataUseCaseInput},
            usecases::AssignDataUseCase,
        },
        tests::test_mocks::{MockRing, placement},
    };

    #[tokio::test]
    async fn validate_fails_when_key_is_empty() {
        let ring = Arc::new(MockRing::new());
        let uc = AssignDataUseCase::new(ring.clone());

        let err = uc
            .validate_and_execute(AssignDataUseCaseInput { key: "".into() })
            .await
            .unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Key is empty"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert!(ring.last_assign_key.lock().is_none());
    }

    #[tokio::test]
    async fn returns_placement_from_ring() {
        let ring = Arc::new(MockRing::new());
        ring.set_placement_result(Ok(placement(40, 66, "n3")));
        let uc = AssignDataUseCase::new(ring.clone());

        let out = uc
            .execute(AssignDataUseCaseInput {
                key: "user:1".into(),
            })
            .await
            .expect("assign should succeed");

        assert_eq!(out.placement, placement(40, 66, "n3"));
        assert_eq!(ring.last_assign_key.lock().as_deref(), Some("user:1"));
    }

    #[tokio::test]
    async fn empty_ring_is_an_error() {
        let ring = Arc::new(MockRing::new());
        ring.set_placement_result(Err(AppError::Ring(RingError::EmptyRing)));
        let uc = AssignDataUseCase::new(ring);

        let err = uc
            .execute(AssignDataUseCaseInput { key: "k".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Ring(RingError::EmptyRing)));
    }
}
