use app_ring::Position;

#[derive(Debug)]
pub struct AddNodeUseCaseInput {
    pub node_id: String,
}

#[derive(Debug)]
pub struct AddNodeUseCaseOutput {
    pub position: Position,
    pub taken_from: Position,
    pub keys_moved: usize,
}
