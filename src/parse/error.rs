use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no characters in the input could be parsed as the target type")]
pub struct NoDigits;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("parsed number is out of range for the target type")]
pub struct OutOfRange;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("input is not one of the literals accepted by the target type")]
pub struct InvalidLiteral;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("unparsed input remains after byte {consumed}")]
pub struct TrailingInput {
    pub consumed: usize,
}

/// The reasons a string can fail to parse as a [`Parsable`](super::Parsable) type.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, Error, IsVariant)]
pub enum ParseError {
    NoDigits(NoDigits),
    OutOfRange(OutOfRange),
    InvalidLiteral(InvalidLiteral),
    TrailingInput(TrailingInput),
}
