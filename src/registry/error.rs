use derive_more::{Display, Error, From, IsVariant};

use crate::iter::ZeroStep;
use crate::parse::ParseError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no {verb} operation is registered for type {type_name}")]
pub struct UnsupportedType {
    pub type_name: &'static str,
    pub verb: &'static str,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{verb} operation for type {type_name} was registered more than once")]
pub struct DuplicateRegistration {
    pub type_name: &'static str,
    pub verb: &'static str,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("the {slot} cursor operation was not registered for type {type_name}")]
pub struct MissingOperation {
    pub type_name: &'static str,
    pub slot: &'static str,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("the global registry has already been initialized")]
pub struct AlreadyInstalled;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum RegistryParseError {
    Unsupported(UnsupportedType),
    Parse(ParseError),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum TraversalError {
    Unsupported(UnsupportedType),
    MissingOperation(MissingOperation),
    ZeroStep(ZeroStep),
}
