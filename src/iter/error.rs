use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("traversal stride must be at least 1")]
pub struct ZeroStep;
