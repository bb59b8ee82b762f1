#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use app_core::{UseCase, UseCaseValidatable};
    use app_ring::RingError;

    use crate::{
        core::{
            domain::models::{AppError, usecases::AddNodeUseCaseInput},
            usecases::AddNodeUseCase,
        },
        tests::test_mocks::{MockRing, change},
    };

    #[tokio::test]
    async fn validate_fails_on_empty_node_id() {
        let ring = Arc::new(MockRing::new());
        let uc = AddNodeUseCase::new(ring);

        let input = AddNodeUseCaseInput {
            node_id: "  ".into(),
        };
        let err = uc.validate(&input).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Node id is empty"));
    }

    #[tokio::test]
    async fn join_happy_path() {
        let ring = Arc::new(MockRing::new());
        ring.set_add_result(Ok(change("n4", 25, 33, 2)));
        let uc = AddNodeUseCase::new(ring.clone());

        let out = uc
            .validate_and_execute(AddNodeUseCaseInput {
                node_id: "n4".into(),
            })
            .await
            .expect("join should succeed");

        assert_eq!(out.position, 25);
        assert_eq!(out.taken_from, 33);
        assert_eq!(out.keys_moved, 2);
        assert_eq!(ring.last_add_node.lock().as_deref(), Some("n4"));
    }

    #[tokio::test]
    async fn ring_errors_are_propagated() {
        let ring = Arc::new(MockRing::new());
        ring.set_add_result(Err(AppError::Ring(RingError::PositionTaken {
            position: 33,
            owner: "n2".into(),
        })));
        let uc = AddNodeUseCase::new(ring);

        let err = uc
            .execute(AddNodeUseCaseInput {
                node_id: "n33".into(),
            })
            .await
            .unwrap_err();

        match err {
            AppError::Ring(RingError::PositionTaken { position, owner }) => {
                assert_eq!(position, 33);
                assert_eq!(owner, "n2");
            }
            other => panic!("expected PositionTaken, got {other:?}"),
        }
    }
}
