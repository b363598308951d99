pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge `{edge_id}` references node `{node_id}` which is not in the current node set")]
    MissingEndpoint { edge_id: String, node_id: String },

    #[error("duplicate node id `{node_id}` in topology input")]
    DuplicateNode { node_id: String },
}
