use crate::core::domain::models::Placement;

#[derive(Debug)]
pub struct LocateDataUseCaseInput {
    pub key: String,
}

#[derive(Debug)]
pub struct LocateDataUseCaseOutput {
    pub placement: Placement,
}
