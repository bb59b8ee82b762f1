use app_ring::Position;

#[derive(Debug)]
pub struct RemoveNodeUseCaseInput {
    pub node_id: String,
}

#[derive(Debug)]
pub struct RemoveNodeUseCaseOutput {
    pub position: Position,
    pub absorbed_by: Position,
    pub keys_moved: usize,
}
