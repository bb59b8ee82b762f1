use crate::core::domain::models::Placement;

#[derive(Debug)]
pub struct AssignDataUseCaseInput {
    pub key: String,
}

#[derive(Debug)]
pub struct AssignDataUseCaseOutput {
    pub placement: Placement,
}
